use proptest::prelude::*;

use ballot_types::{Difficulty, MiningPolicy};
use ballot_work::{validate_work, work_hash, Miner};

proptest! {
    /// Uncapped mining always produces a hash that passes validation.
    #[test]
    fn uncapped_mining_always_valid(
        prefix in prop::collection::vec(any::<u8>(), 1..64),
        difficulty in 1u32..=2,
    ) {
        let difficulty = Difficulty::try_new(difficulty).unwrap();
        let miner = Miner::new(MiningPolicy::Uncapped);
        let outcome = miner.mine(&prefix, difficulty);
        prop_assert!(outcome.met_target);
        prop_assert!(
            validate_work(&outcome.hash, difficulty),
            "mined hash must pass validation"
        );
    }

    /// The stored hash is always the work hash of the stored nonce.
    #[test]
    fn outcome_hash_matches_nonce(
        prefix in prop::collection::vec(any::<u8>(), 1..64),
        cap in 0u64..200,
    ) {
        let miner = Miner::new(MiningPolicy::Capped { max_iterations: cap });
        let outcome = miner.mine(&prefix, Difficulty::MAX);
        prop_assert_eq!(outcome.hash, work_hash(&prefix, outcome.nonce));
    }

    /// Capped mining never exceeds its iteration budget.
    #[test]
    fn capped_mining_bounded(
        prefix in prop::collection::vec(any::<u8>(), 1..64),
        cap in 0u64..500,
    ) {
        let miner = Miner::new(MiningPolicy::Capped { max_iterations: cap });
        let outcome = miner.mine(&prefix, Difficulty::MAX);
        prop_assert!(outcome.iterations <= cap);
        if outcome.met_target {
            prop_assert!(validate_work(&outcome.hash, Difficulty::MAX));
        }
    }

    /// Lower difficulty is easier to meet: valid at d implies valid at d-1.
    #[test]
    fn lower_difficulty_is_easier(
        hash_bytes in prop::array::uniform32(0u8..),
        difficulty in 2u32..=5,
    ) {
        let hash = ballot_types::BlockHash::new(hash_bytes);
        let at_d = validate_work(&hash, Difficulty::try_new(difficulty).unwrap());
        let at_d_minus_1 = validate_work(&hash, Difficulty::try_new(difficulty - 1).unwrap());
        if at_d {
            prop_assert!(
                at_d_minus_1,
                "valid at difficulty {} must imply valid at {}",
                difficulty,
                difficulty - 1
            );
        }
    }

    /// Mining is deterministic: same material and policy, same outcome.
    #[test]
    fn mining_is_deterministic(
        prefix in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        let difficulty = Difficulty::try_new(1).unwrap();
        let miner = Miner::new(MiningPolicy::Uncapped);
        let a = miner.mine(&prefix, difficulty);
        let b = miner.mine(&prefix, difficulty);
        prop_assert_eq!(a.nonce, b.nonce);
        prop_assert_eq!(a.hash, b.hash);
    }
}
