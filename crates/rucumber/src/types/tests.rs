//! Tests for step errors and outcomes.

use super::*;
use rstest::rstest;

#[rstest]
#[case(StepOutcome::Undefined, false, "UNDEFINED")]
#[case(StepOutcome::Succeeded, true, "SUCCEEDED")]
#[case(StepOutcome::Failed(StepError::assertion("x")), false, "FAILED")]
fn outcome_success_and_label(
    #[case] outcome: StepOutcome,
    #[case] success: bool,
    #[case] label: &str,
) {
    assert_eq!(outcome.is_success(), success);
    assert_eq!(outcome.label(), label);
}

#[test]
fn failed_outcome_retains_error() {
    let outcome = StepOutcome::from(Err(StepError::assertion("disk full")));
    let Some(error) = outcome.error() else {
        panic!("failed outcome should expose its error");
    };
    assert_eq!(error.to_string(), "assertion failed: disk full");
    assert_eq!(outcome.to_string(), "FAILED: assertion failed: disk full");
}

#[test]
fn io_errors_convert_transparently() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err = StepError::from(io);
    assert!(matches!(err, StepError::Other(_)));
    assert_eq!(err.to_string(), "read-only");
    assert!(!err.is_panic());
}

#[test]
fn default_outcome_is_undefined() {
    assert!(StepOutcome::default().is_undefined());
    assert!(StepOutcome::from(Ok(())).is_success());
}
