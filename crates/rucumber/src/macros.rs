//! Public macro helpers exported by `rucumber`.
//!
//! The macros live in a dedicated module to keep `lib.rs` small and focused on
//! type exports. They remain available at the crate root via `#[macro_export]`.

/// Return a [`StepError::Assertion`](crate::StepError::Assertion) from the
/// enclosing handler.
///
/// # Examples
/// ```
/// use rucumber::{StepResult, step_fail};
///
/// fn never(_: u32) -> StepResult {
///     step_fail!("expected {} files", 2);
/// }
///
/// assert_eq!(
///     never(0).unwrap_err().to_string(),
///     "assertion failed: expected 2 files"
/// );
/// ```
#[macro_export]
macro_rules! step_fail {
    ($msg:literal $(,)?) => {
        return ::core::result::Result::Err($crate::StepError::assertion(::std::format!($msg)))
    };
    ($msg:expr $(,)?) => {
        return ::core::result::Result::Err($crate::StepError::assertion($msg))
    };
    ($fmt:literal, $($arg:tt)+) => {
        return ::core::result::Result::Err($crate::StepError::assertion(::std::format!($fmt, $($arg)+)))
    };
}

/// Fail the enclosing handler unless `cond` holds.
///
/// Without a message the stringified condition is reported.
///
/// # Examples
/// ```
/// use rucumber::{StepResult, step_ensure};
///
/// fn positive(value: i32) -> StepResult {
///     step_ensure!(value > 0);
///     step_ensure!(value < 10, "{value} is too large");
///     Ok(())
/// }
///
/// assert!(positive(3).is_ok());
/// assert_eq!(
///     positive(-1).unwrap_err().to_string(),
///     "assertion failed: value > 0"
/// );
/// assert_eq!(
///     positive(12).unwrap_err().to_string(),
///     "assertion failed: 12 is too large"
/// );
/// ```
#[macro_export]
macro_rules! step_ensure {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::step_fail!(stringify!($cond));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::step_fail!($($arg)+);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{StepError, StepResult};

    fn equal(left: &str, right: &str) -> StepResult {
        step_ensure!(left == right, "{left:?} != {right:?}");
        Ok(())
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert!(equal("a", "a").is_ok());
        let Err(StepError::Assertion { message }) = equal("a", "b") else {
            panic!("mismatch must fail");
        };
        assert_eq!(message, r#""a" != "b""#);
    }

    #[test]
    fn fail_accepts_owned_messages() {
        fn owned() -> StepResult {
            step_fail!(String::from("owned"));
        }
        assert_eq!(
            owned().map_err(|e| e.to_string()),
            Err(String::from("assertion failed: owned"))
        );
    }
}
