//! # Recursive Extraction
//!
//! One algorithm builds every constraint node. Given a parent object and a
//! member name it decides the member's presence and, when the member holds an
//! object, hands that object to the node's field table which in turn extracts
//! each declared child through this same module.
//!
//! ```text
//! START ──► absent ─────────────────────────────► DONE (exists = false)
//!   │
//!   ├─────► null ───────────────────────────────► DONE (exists, is_null)
//!   │
//!   ├─────► object ──► fill children in order ──► DONE
//!   │                        │
//!   │                        └─ child fails ────► error (route += key)
//!   │
//!   └─────► anything else ──────────────────────► error "'key' is not an object."
//! ```
//!
//! Recursion terminates because the schema is a finite tree: every node type
//! only names node types strictly below it.

use crate::error::ConstraintError;
use crate::presence::Presence;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

mod sealed {
    use super::{ConstraintError, Map, Presence, Value};

    /// The mutating half of a node, reachable only while it is being extracted.
    pub trait Populate: Default {
        fn presence_mut(&mut self) -> &mut Presence;

        /// Populates declared children from a non-null object, in declaration order.
        ///
        /// # Errors
        /// Returns [`ConstraintError::Shape`] for the first child that does not conform.
        fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError>;
    }
}

pub(crate) use sealed::Populate;

/// A typed schema object carrying its own presence state.
///
/// Nodes are only built by [`extract`]: the presence flags and children are
/// written during extraction and are read-only afterwards. The trait is sealed,
/// so the node set is the one defined in [`crate::constraints`].
///
/// ```compile_fail
/// use ida_assurance::{ConstraintNode, extract_verified_claims};
/// use serde_json::json;
///
/// let request = json!({ "verified_claims": { "claims": { "given_name": null } } });
/// let mut node = extract_verified_claims(request.as_object().unwrap()).unwrap();
/// node.presence_mut().set_null(true);
/// ```
pub trait ConstraintNode: sealed::Populate {
    fn presence(&self) -> &Presence;

    /// `true` if the member was present in its parent object.
    fn exists(&self) -> bool {
        self.presence().exists()
    }

    /// `true` if the member was present with an explicit `null`.
    fn is_null(&self) -> bool {
        self.presence().is_null()
    }
}

/// Extracts the node stored under `key` in `parent`.
///
/// A missing member or a `null` value is a valid outcome, not an error.
///
/// # Errors
/// Returns [`ConstraintError::Shape`] if the member holds a non-object value or if
/// any of its children fails to conform. No partially built node is returned.
pub fn extract<T: ConstraintNode>(
    parent: &Map<String, Value>,
    key: &str,
) -> Result<T, ConstraintError> {
    extract_entry(parent.get(key), key)
}

/// Same as [`extract`] for an entry that was already looked up.
///
/// `label` names the entry in error messages; array elements use `key[index]`.
///
/// # Errors
/// See [`extract`].
pub fn extract_entry<T: ConstraintNode>(
    entry: Option<&Value>,
    label: &str,
) -> Result<T, ConstraintError> {
    let mut node = T::default();

    let Some(value) = entry else {
        trace!(key = label, state = "absent", "constraint member");
        return Ok(node);
    };
    node.presence_mut().set_exists(true);

    match value {
        Value::Null => {
            trace!(key = label, state = "null", "constraint member");
            node.presence_mut().set_null(true);
        },
        Value::Object(object) => {
            trace!(key = label, state = "object", members = object.len(), "constraint member");
            node.fill(object).map_err(|e| e.nested_in(label))?;
        },
        other => {
            debug!(key = label, found = json_type(other), "constraint member is not an object");
            return Err(ConstraintError::not_an_object(label));
        },
    }

    Ok(node)
}

/// Extracts every element of an array member, labelling each `key[index]`.
///
/// Stops at the first element that does not conform.
pub(crate) fn extract_elements<T: ConstraintNode>(
    items: &[Value],
    key: &str,
) -> Result<Vec<T>, ConstraintError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| extract_entry(Some(item), &format!("{key}[{index}]")))
        .collect()
}

/// A schema member whose value is an array of constraint objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct ArrayConstraint<T> {
    presence: Presence,
    elements: Vec<T>,
}

impl<T> Default for ArrayConstraint<T> {
    fn default() -> Self {
        Self { presence: Presence::default(), elements: Vec::new() }
    }
}

impl<T: ConstraintNode> ArrayConstraint<T> {
    /// Extracts the array stored under `key`.
    ///
    /// Every element goes through [`extract_entry`] labelled `key[index]`, so a
    /// `null` element is kept as a null node and a scalar element is rejected.
    ///
    /// # Errors
    /// Returns [`ConstraintError::Shape`] if the member is neither `null` nor an
    /// array, or if any element fails to conform.
    pub fn extract(parent: &Map<String, Value>, key: &str) -> Result<Self, ConstraintError> {
        let mut array = Self::default();

        let Some(value) = parent.get(key) else {
            trace!(key, state = "absent", "constraint array");
            return Ok(array);
        };
        array.presence.set_exists(true);

        match value {
            Value::Null => array.presence.set_null(true),
            Value::Array(items) => {
                trace!(key, state = "array", len = items.len(), "constraint array");
                array.elements = extract_elements(items, key)?;
            },
            other => {
                debug!(key, found = json_type(other), "constraint member is not an array");
                return Err(ConstraintError::not_a(key, "an array"));
            },
        }

        Ok(array)
    }
}

impl<T> ArrayConstraint<T> {
    #[must_use]
    pub const fn presence(&self) -> &Presence {
        &self.presence
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.presence.exists()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.presence.is_null()
    }

    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayConstraint<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Short JSON type name for diagnostics.
pub(crate) const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
