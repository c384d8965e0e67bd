//! The alias document: groups of name/value entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AliasValue;

/// One group of aliases: name to value.
pub type Group = BTreeMap<String, AliasValue>;

/// The whole persisted document: group name to group.
///
/// Serialized transparently, so the on-disk shape is
/// `{ "<group>": { "<alias>": <string | number> } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasDocument {
    groups: BTreeMap<String, Group>,
}

impl AliasDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries of `group`, if the group exists.
    #[must_use]
    pub fn group(&self, group: &str) -> Option<&Group> {
        self.groups.get(group)
    }

    /// The value of `alias` in `group`.
    #[must_use]
    pub fn get(&self, group: &str, alias: &str) -> Option<&AliasValue> {
        self.groups.get(group).and_then(|entries| entries.get(alias))
    }

    /// Set or unset one alias.
    ///
    /// A missing group is created first. `None` removes `alias` from the
    /// group. Otherwise, if any entry in the group already carries `value`,
    /// that entry is removed before `alias` is inserted - within a group a
    /// value belongs to at most one name, and the displaced entry may have a
    /// different name than the one being set.
    pub fn set(&mut self, group: &str, alias: &str, value: Option<AliasValue>) {
        let entries = self.groups.entry(group.to_string()).or_default();

        match value {
            None => {
                entries.remove(alias);
            }
            Some(value) => {
                let displaced = entries
                    .iter()
                    .find(|(_, existing)| **existing == value)
                    .map(|(name, _)| name.clone());
                if let Some(name) = displaced {
                    entries.remove(&name);
                }
                entries.insert(alias.to_string(), value);
            }
        }
    }

    /// Remove every listed alias from `group` in one pass.
    ///
    /// A raw delete: no uniqueness scan runs. A missing group is created
    /// empty, matching [`set`](Self::set).
    pub fn unset_many<I, N>(&mut self, group: &str, aliases: I)
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let entries = self.groups.entry(group.to_string()).or_default();
        for alias in aliases {
            entries.remove(alias.as_ref());
        }
    }

    /// The first alias name in `group` carrying `value`, by the group's
    /// iteration order.
    #[must_use]
    pub fn name_of(&self, group: &str, value: &AliasValue) -> Option<&str> {
        self.groups.get(group).and_then(|entries| {
            entries
                .iter()
                .find(|(_, existing)| *existing == value)
                .map(|(name, _)| name.as_str())
        })
    }
}
