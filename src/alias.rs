//! Alias registry operations over a document store.

use tracing::debug;

use crate::domain::{AliasValue, Group};
use crate::error::Result;
use crate::store::DocumentStore;

/// Group used when neither the caller nor the store configuration names one.
pub const DEFAULT_GROUP: &str = "default";

/// Alias registry backed by a [`DocumentStore`].
///
/// Aliases are name/value pairs partitioned into groups. Within a group a
/// value belongs to at most one name: setting an alias to a value another
/// alias already carries removes the other alias, even when the two names
/// differ. Callers that treat aliases as independent should keep values
/// distinct.
///
/// Every operation fetches the whole document from the backend, applies the
/// change in memory and (for writes) saves the whole document back. The store
/// holds no state between calls and provides no mutual exclusion: concurrent
/// writers race and the last save wins. Callers needing stronger guarantees
/// must serialize access themselves.
///
/// Operations that take `group: Option<&str>` fall back to the store's
/// configured default group ([`DEFAULT_GROUP`] unless overridden with
/// [`with_default_group`](Self::with_default_group)).
pub struct AliasStore<S> {
    backend: S,
    store_name: String,
    default_group: String,
}

impl<S: DocumentStore> AliasStore<S> {
    /// Registry over `backend`, reading and writing the document named
    /// `store_name`.
    pub fn new(backend: S, store_name: impl Into<String>) -> Self {
        Self {
            backend,
            store_name: store_name.into(),
            default_group: DEFAULT_GROUP.to_string(),
        }
    }

    /// Use `group` for operations that do not name one.
    #[must_use]
    pub fn with_default_group(mut self, group: impl Into<String>) -> Self {
        self.default_group = group.into();
        self
    }

    /// The store name this registry operates on.
    #[must_use]
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    fn group<'a>(&'a self, group: Option<&'a str>) -> &'a str {
        group.unwrap_or(&self.default_group)
    }

    /// Set several aliases in one fetch/save cycle.
    ///
    /// Pairs apply in iteration order, so a later pair can displace an
    /// earlier one that carries the same value. Returns the applied pairs.
    pub async fn update_values<I, K, V>(&self, aliases: I, group: Option<&str>) -> Result<Group>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AliasValue>,
    {
        let group = self.group(group);
        let pairs: Vec<(String, AliasValue)> = aliases
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();

        let mut document = self.backend.fetch_document(&self.store_name).await?;
        let mut applied = Group::new();
        for (name, value) in pairs {
            document.set(group, &name, Some(value.clone()));
            applied.insert(name, value);
        }
        self.backend.save_document(&self.store_name, &document).await?;

        debug!(
            store = %self.store_name,
            group,
            count = applied.len(),
            "aliases updated"
        );
        Ok(applied)
    }

    /// Set a single alias.
    ///
    /// If another alias in the group already carries `value`, that alias is
    /// removed as a side effect.
    pub async fn update(
        &self,
        alias: &str,
        value: impl Into<AliasValue>,
        group: Option<&str>,
    ) -> Result<()> {
        self.write_one(alias, Some(value.into()), group).await
    }

    /// Delete `alias` from the group. Deleting a missing alias is not an
    /// error.
    pub async fn remove(&self, alias: &str, group: Option<&str>) -> Result<()> {
        self.write_one(alias, None, group).await
    }

    async fn write_one(
        &self,
        alias: &str,
        value: Option<AliasValue>,
        group: Option<&str>,
    ) -> Result<()> {
        let group = self.group(group);
        let mut document = self.backend.fetch_document(&self.store_name).await?;
        document.set(group, alias, value);
        self.backend.save_document(&self.store_name, &document).await?;

        debug!(store = %self.store_name, group, alias, "alias written");
        Ok(())
    }

    /// Delete every listed alias from the group in one fetch/save cycle.
    ///
    /// Unlike [`remove`](Self::remove) this is a raw bulk delete: no
    /// uniqueness scan runs.
    pub async fn unset<I, N>(&self, aliases: I, group: Option<&str>) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let group = self.group(group);
        let names: Vec<String> = aliases
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        let mut document = self.backend.fetch_document(&self.store_name).await?;
        document.unset_many(group, &names);
        self.backend.save_document(&self.store_name, &document).await?;

        debug!(
            store = %self.store_name,
            group,
            count = names.len(),
            "aliases unset"
        );
        Ok(())
    }

    /// Look up the value of `alias`.
    pub async fn fetch(&self, alias: &str, group: Option<&str>) -> Result<Option<AliasValue>> {
        let group = self.group(group);
        let document = self.backend.fetch_document(&self.store_name).await?;
        Ok(document.get(group, alias).cloned())
    }

    /// All aliases in the group. A never-written group lists as empty.
    pub async fn list(&self, group: Option<&str>) -> Result<Group> {
        let group = self.group(group);
        let document = self.backend.fetch_document(&self.store_name).await?;
        Ok(document.group(group).cloned().unwrap_or_default())
    }

    /// The first alias name carrying `value`, by the group's iteration order.
    pub async fn by_value(
        &self,
        value: impl Into<AliasValue>,
        group: Option<&str>,
    ) -> Result<Option<String>> {
        let group = self.group(group);
        let value = value.into();
        let document = self.backend.fetch_document(&self.store_name).await?;
        Ok(document.name_of(group, &value).map(String::from))
    }
}
