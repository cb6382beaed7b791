//! Flash messages: one-time messages grouped by severity level.
//!
//! The alert widget only needs to read every pending level and to remove the
//! levels it has rendered, which is what [`FlashStore`] describes. Session
//! layers implement it over whatever they persist; [`MemoryFlash`] is the
//! in-process bag used when the messages are kept alongside the request (and
//! which can be serialised into a session payload with
//! [`MemoryFlash::to_json`]).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FlashError;

/// The named fields of a single flash message, e.g. `header` and `body`.
pub type FlashFields = IndexMap<String, String>;

pub trait FlashStore {
    /// Every pending message, keyed by level, in the order they were added.
    fn get_all(&self) -> IndexMap<String, FlashFields>;

    /// Drops the message stored for `level`, if there is one.
    fn remove(&mut self, level: &str);
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryFlash {
    messages: IndexMap<String, FlashFields>,
}

impl MemoryFlash {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds fields to the message for `level`. Fields which are already
    /// present are overwritten, the rest are kept.
    pub fn add<L, I, K, V>(&mut self, level: L, fields: I)
    where
        L: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self.messages.entry(level.into()).or_default();
        for (key, value) in fields {
            entry.insert(key.into(), value.into());
        }
    }

    /// Replaces the message for `level` outright.
    pub fn set<L, I, K, V>(&mut self, level: L, fields: I)
    where
        L: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.messages.insert(level.into(), fields);
    }

    pub fn get(&self, level: &str) -> Option<&FlashFields> {
        self.messages.get(level)
    }

    pub fn has(&self, level: &str) -> bool {
        self.messages.contains_key(level)
    }

    pub fn remove_all(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn to_json(&self) -> Result<String, FlashError> {
        serde_json::to_string(self).map_err(FlashError::Encode)
    }

    pub fn from_json(payload: &str) -> Result<Self, FlashError> {
        serde_json::from_str(payload).map_err(FlashError::Decode)
    }
}

impl FlashStore for MemoryFlash {
    fn get_all(&self) -> IndexMap<String, FlashFields> {
        self.messages.clone()
    }

    fn remove(&mut self, level: &str) {
        // `shift_remove` keeps the remaining levels in insertion order.
        self.messages.shift_remove(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_fields() {
        let mut flash = MemoryFlash::new();
        flash.add("danger", [("header", "Oops")]);
        flash.add("danger", [("body", "Something broke."), ("header", "Err")]);

        let fields = flash.get("danger").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["header"], "Err");
        assert_eq!(fields["body"], "Something broke.");
    }

    #[test]
    fn set_replaces_fields() {
        let mut flash = MemoryFlash::new();
        flash.add("info", [("header", "Note"), ("body", "First")]);
        flash.set("info", [("body", "Second")]);

        let fields = flash.get("info").unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["body"], "Second");
    }

    #[test]
    fn remove_keeps_order_of_other_levels() {
        let mut flash = MemoryFlash::new();
        flash.add("danger", [("body", "a")]);
        flash.add("info", [("body", "b")]);
        flash.add("success", [("body", "c")]);

        FlashStore::remove(&mut flash, "info");

        assert!(!flash.has("info"));
        let levels: Vec<_> = flash.get_all().into_keys().collect();
        assert_eq!(levels, ["danger", "success"]);
    }

    #[test]
    fn remove_all_empties_the_bag() {
        let mut flash = MemoryFlash::new();
        flash.add("warning", [("body", "Careful")]);
        flash.remove_all();
        assert!(flash.is_empty());
        assert_eq!(flash.len(), 0);
    }

    #[test]
    fn survives_a_session_payload() {
        let mut flash = MemoryFlash::new();
        flash.add("warning", [("header", "Heads up"), ("body", "<b>x</b>")]);

        let payload = flash.to_json().unwrap();
        assert_eq!(
            payload,
            r#"{"warning":{"header":"Heads up","body":"<b>x</b>"}}"#
        );
        assert_eq!(MemoryFlash::from_json(&payload).unwrap(), flash);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = MemoryFlash::from_json(r#"{"danger": 3}"#).unwrap_err();
        assert!(matches!(err, FlashError::Decode(_)));
    }
}
