//! Tri-state presence of a schema member.
//!
//! A member can be absent from its parent object, present with an explicit
//! `null`, or present with a real value. Keeping the two bits separate is what
//! lets "omitted" and "null" mean the same thing where the schema says so
//! (e.g. `claims`) without losing the distinction elsewhere.

use bitflags::bitflags;
use serde::{Serialize, Serializer};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct PresenceFlags: u8 {
        const EXISTS = 1 << 0;
        const NULL = 1 << 1;
    }
}

/// The three distinguishable conditions of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    Absent,
    Null,
    Present,
}

/// Presence flags embedded in every constraint node.
///
/// Both flags start cleared and are set once while the owning node is
/// extracted. `is_null` is only reported when the member also exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Presence {
    flags: PresenceFlags,
}

impl Default for Presence {
    fn default() -> Self {
        Self { flags: PresenceFlags::empty() }
    }
}

impl Presence {
    /// `true` if the member was found in its parent object.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.flags.contains(PresenceFlags::EXISTS)
    }

    pub(crate) fn set_exists(&mut self, exists: bool) {
        self.flags.set(PresenceFlags::EXISTS, exists);
    }

    /// `true` if the member exists and its value is `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.flags.contains(PresenceFlags::EXISTS | PresenceFlags::NULL)
    }

    pub(crate) fn set_null(&mut self, null: bool) {
        self.flags.set(PresenceFlags::NULL, null);
    }

    /// `true` if the member exists with a non-null value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.exists() && !self.is_null()
    }

    #[must_use]
    pub fn state(&self) -> PresenceState {
        if !self.exists() {
            PresenceState::Absent
        } else if self.is_null() {
            PresenceState::Null
        } else {
            PresenceState::Present
        }
    }
}

impl Serialize for Presence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.state().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let presence = Presence::default();
        assert!(!presence.exists());
        assert!(!presence.is_null());
        assert_eq!(presence.state(), PresenceState::Absent);
    }

    #[test]
    fn null_requires_existence() {
        let mut presence = Presence::default();
        presence.set_null(true);
        assert!(!presence.is_null(), "a missing member is never explicitly null");
        assert_eq!(presence.state(), PresenceState::Absent);

        presence.set_exists(true);
        assert!(presence.is_null());
        assert!(!presence.has_value());
        assert_eq!(presence.state(), PresenceState::Null);
    }

    #[test]
    fn present_value() {
        let mut presence = Presence::default();
        presence.set_exists(true);
        assert!(presence.has_value());
        assert_eq!(presence.state(), PresenceState::Present);
    }

    #[test]
    fn serializes_as_state_name() {
        let mut presence = Presence::default();
        assert_eq!(serde_json::to_string(&presence).unwrap(), "\"absent\"");
        presence.set_exists(true);
        presence.set_null(true);
        assert_eq!(serde_json::to_string(&presence).unwrap(), "\"null\"");
    }
}
