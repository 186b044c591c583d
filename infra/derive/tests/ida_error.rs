use std::borrow::Cow;

#[test]
fn ida_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ida_error_pass.rs");
    t.pass("tests/ui/ida_error_message_only.rs");
}

#[ida_derive::ida_error]
pub enum ProbeError {
    #[error("Probe I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Probe rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal probe error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk gone"))
}

fn rejected() -> Result<(), ProbeError> {
    Err(ProbeError::Rejected { message: "bad input".into(), context: None })
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), ProbeError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, ProbeError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "Probe I/O failure: disk gone");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("reading fixture").unwrap_err();
    assert_eq!(err.context(), Some("reading fixture"));
    assert_eq!(err.to_string(), "Probe I/O failure (reading fixture): disk gone");
}

#[test]
fn context_replaces_on_own_results() {
    let err = rejected().context("first").context("second").unwrap_err();
    assert_eq!(err.context(), Some("second"));
    assert_eq!(err.to_string(), "Probe rejected (second): bad input");
}

#[test]
fn internal_variant_accepts_strings() {
    let from_static: ProbeError = "static failure".into();
    let from_owned: ProbeError = String::from("owned failure").into();

    assert!(matches!(from_static, ProbeError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal probe error: owned failure");
    assert_eq!(from_owned.context(), None);
}
