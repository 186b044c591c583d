use ida_derive::ida_error;
use std::borrow::Cow;

#[ida_error]
#[derive(Debug)]
pub enum ShapeOnlyError {
    #[error("Shape mismatch{}: {message}", format_context(.context))]
    Shape { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = ShapeOnlyError::Shape { message: "'x' is not an object.".into(), context: None };
    assert_eq!(err.to_string(), "Shape mismatch: 'x' is not an object.");
}
