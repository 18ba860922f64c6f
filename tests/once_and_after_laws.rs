#![cfg(feature = "switch")]
//! Property-based tests for the switch-once combinator.
//!
//! ## Dispatch Laws
//! - **First call**: the first result equals `first(x)`
//! - **Later calls**: every later result equals `second(x)` for its own `x`
//! - **Absorbing switch**: once a call has returned, the stage never leaves `Switched`
//!
//! Using proptest, we generate random call sequences to verify these laws.

use hofkit::switch::{OnceAndAfter, Stage, once_and_after, once_and_after_flag};
use proptest::prelude::*;

fn first_function(value: i64) -> i64 {
    value.wrapping_mul(3)
}

fn second_function(value: i64) -> i64 {
    value.wrapping_sub(7)
}

proptest! {
    /// The first call runs `first`, every later call runs `second`.
    #[test]
    fn prop_first_then_second(arguments in prop::collection::vec(any::<i64>(), 1..64)) {
        let mut combined = once_and_after(first_function, second_function);

        let results: Vec<i64> = arguments.iter().map(|argument| combined(*argument)).collect();

        prop_assert_eq!(results[0], first_function(arguments[0]));
        for (result, argument) in results.iter().zip(&arguments).skip(1) {
            prop_assert_eq!(*result, second_function(*argument));
        }
    }

    /// After at least four calls, the stage is still `Switched`.
    #[test]
    fn prop_switch_is_absorbing(arguments in prop::collection::vec(any::<i64>(), 4..32)) {
        let mut combinator = OnceAndAfter::new(first_function, second_function);

        for argument in arguments {
            combinator.call(argument);
            prop_assert_eq!(combinator.stage(), Stage::Switched);
        }
    }

    /// Without panics the flag-based variant agrees with the stage-based one.
    #[test]
    fn prop_flag_variant_agrees(arguments in prop::collection::vec(any::<i64>(), 0..32)) {
        let mut by_stage = once_and_after(first_function, second_function);
        let mut by_flag = once_and_after_flag(first_function, second_function);

        for argument in arguments {
            prop_assert_eq!(by_stage(argument), by_flag(argument));
        }
    }

    /// Failed attempts of a fallible `first` never consume the switch.
    #[test]
    fn prop_errors_keep_first_pending(failures in 0usize..16, argument in any::<i64>()) {
        let mut remaining = failures;
        let mut combinator = OnceAndAfter::new(
            |value: i64| {
                if remaining == 0 {
                    Ok(first_function(value))
                } else {
                    remaining -= 1;
                    Err(remaining)
                }
            },
            |value: i64| Ok(second_function(value)),
        );

        for _ in 0..failures {
            prop_assert!(combinator.try_call(argument).is_err());
            prop_assert_eq!(combinator.stage(), Stage::AwaitingFirst);
        }
        prop_assert_eq!(combinator.try_call(argument), Ok(first_function(argument)));
        prop_assert_eq!(combinator.try_call(argument), Ok(second_function(argument)));
    }
}
