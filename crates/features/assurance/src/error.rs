use std::borrow::Cow;

/// Error raised when a request does not conform to the `verified_claims` schema.
///
/// There is a single kind: the input disagrees with the expected shape. The
/// message names the offending member (`'claims' is not an object.`) and the
/// context, when present, is the dotted route of the object that contains it
/// (`verified_claims.verification`).
#[ida_derive::ida_error]
#[derive(Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// Shape mismatch between the input mapping and the schema.
    #[error("Constraint shape mismatch{}: {message}", format_context(.context))]
    Shape { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ConstraintError {
    pub(crate) fn shape(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Shape { message: message.into(), context: None }
    }

    pub(crate) fn not_an_object(key: &str) -> Self {
        Self::shape(format!("'{key}' is not an object."))
    }

    /// `expected` is a noun phrase with its article, e.g. `"a boolean"`.
    pub(crate) fn not_a(key: &str, expected: &str) -> Self {
        Self::shape(format!("'{key}' is not {expected}."))
    }

    /// The bare message without the route.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Shape { message, .. } => message.as_ref(),
        }
    }

    /// Dotted route to the object holding the offending member, if it is nested.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.context()
    }

    /// Prefixes the route with the member the failing object was found under.
    pub(crate) fn nested_in(self, key: &str) -> Self {
        match self {
            Self::Shape { message, context } => {
                let route = match context {
                    Some(inner) => format!("{key}.{inner}"),
                    None => key.to_owned(),
                };
                Self::Shape { message, context: Some(route.into()) }
            },
        }
    }
}
