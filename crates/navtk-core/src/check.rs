//! Build-time switch for caller-contract checks.
//!
//! Contract violations (an index past the end of a list, a checked enqueue
//! on a full queue) are hard failures when checks are compiled in and are
//! skipped entirely otherwise. Checks are on in debug builds and in any
//! build with the `checked` feature enabled.
//!
//! [`CHECKS_ENABLED`] is a `const`, so `if CHECKS_ENABLED { .. }` blocks are
//! removed by the optimiser in release builds.

/// Whether caller-contract checks are compiled into this build.
pub const CHECKS_ENABLED: bool = cfg!(any(debug_assertions, feature = "checked"));

/// Assert a caller contract when [`CHECKS_ENABLED`] is set.
///
/// Accepts the same arguments as [`assert!`]. In unchecked builds the
/// condition is not evaluated.
#[macro_export]
macro_rules! nav_check {
    ($cond:expr $(,)?) => {
        if $crate::check::CHECKS_ENABLED {
            assert!($cond);
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if $crate::check::CHECKS_ENABLED {
            assert!($cond, $($arg)+);
        }
    };
}

/// Check that `index < len` when [`CHECKS_ENABLED`] is set.
///
/// # Panics
///
/// Panics with an out-of-range message in checked builds.
#[inline]
#[track_caller]
pub fn check_index(index: usize, len: usize) {
    nav_check!(index < len, "index {index} out of range for length {len}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_follow_debug_assertions() {
        if cfg!(debug_assertions) {
            assert!(CHECKS_ENABLED);
        }
    }

    #[test]
    fn in_range_index_passes() {
        check_index(0, 1);
        check_index(4, 5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "index 3 out of range for length 3")]
    fn out_of_range_index_panics_when_checked() {
        check_index(3, 3);
    }

    #[test]
    fn unchecked_condition_is_not_evaluated_when_disabled() {
        let mut evaluated = false;
        nav_check!({
            evaluated = true;
            true
        });
        assert_eq!(evaluated, CHECKS_ENABLED);
    }
}
