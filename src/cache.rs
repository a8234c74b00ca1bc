// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Credential cache.
//!
//! Holds the session token and the group listing between runs so a new
//! session can skip authentication and device discovery. What gets written
//! to disk is selected by a [`CachingScope`].
//!
//! # Examples
//!
//! ```
//! use comfortcloud_lib::cache::{CachingScope, CredentialCache};
//!
//! let cache = CredentialCache::new(CachingScope::All)
//!     .replace_token(Some("token-1".to_string()));
//! assert!(cache.is_valid());
//! assert!(cache.is_dirty());
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, ValueError};

/// Selects which cache fields are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CachingScope {
    /// Nothing is written.
    None,
    /// Only the session token is written.
    #[default]
    Token,
    /// The session token and the group listing are written.
    All,
}

impl CachingScope {
    /// Returns the configuration string for this scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Token => "token",
            Self::All => "all",
        }
    }

    const fn includes_token(self) -> bool {
        matches!(self, Self::Token | Self::All)
    }

    const fn includes_groups(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CachingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CachingScope {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "token" => Ok(Self::Token),
            "all" => Ok(Self::All),
            _ => Err(ValueError::UnknownName {
                kind: "caching scope",
                name: s.to_string(),
            }),
        }
    }
}

/// On-disk layout of the cache file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    groups: Option<serde_json::Value>,
}

/// Session token and group listing, with dirty tracking.
///
/// `dirty` is set whenever the in-memory content diverges from what was
/// last persisted. A new token always drops the group listing, since the
/// device topology belongs to the session that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialCache {
    scope: CachingScope,
    token: Option<String>,
    groups: Option<serde_json::Value>,
    dirty: bool,
}

impl CredentialCache {
    /// Creates an empty cache with the given scope.
    #[must_use]
    pub fn new(scope: CachingScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Returns which fields are persisted.
    #[must_use]
    pub fn scope(&self) -> CachingScope {
        self.scope
    }

    /// Returns the session token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the cached group listing, left unvalidated.
    #[must_use]
    pub fn groups(&self) -> Option<&serde_json::Value> {
        self.groups.as_ref()
    }

    /// Returns `true` if a token is present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.token.is_some()
    }

    /// Returns `true` if there are unpersisted changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Resets token, groups and the dirty flag.
    pub fn clear(&mut self) {
        self.token = None;
        self.groups = None;
        self.dirty = false;
    }

    /// Returns the cache state after installing `token`.
    ///
    /// A `None` token, or one that differs from the current token, yields a
    /// fresh dirty cache holding only that token. The same token leaves the
    /// cache untouched.
    #[must_use]
    pub fn replace_token(self, token: Option<String>) -> Self {
        if token.is_some() && token == self.token {
            return self;
        }

        tracing::debug!("New token differs from cached value, resetting cache");
        Self {
            scope: self.scope,
            token,
            groups: None,
            dirty: true,
        }
    }

    /// In-place form of [`replace_token`](Self::replace_token).
    pub fn set_token(&mut self, token: Option<String>) {
        *self = std::mem::take(self).replace_token(token);
    }

    /// Stores a group listing and marks the cache dirty.
    pub fn set_groups(&mut self, groups: serde_json::Value) {
        self.groups = Some(groups);
        self.dirty = true;
    }

    /// Writes the fields included by the caching scope to `path`.
    ///
    /// With [`CachingScope::None`] nothing is written. The dirty flag is
    /// cleared after a successful write.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] if the file or its parent directory cannot
    /// be written.
    pub fn persist(&mut self, path: &Path) -> Result<(), CacheError> {
        let document = CacheDocument {
            token: self.token.clone().filter(|_| self.scope.includes_token()),
            groups: self.groups.clone().filter(|_| self.scope.includes_groups()),
        };

        if document.token.is_some() || document.groups.is_some() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }

            let contents = serde_json::to_string_pretty(&document)?;
            fs::write(path, contents)?;

            tracing::info!(
                scope = %self.scope,
                path = %path.display(),
                "Credential cache written"
            );
        }

        self.dirty = false;
        Ok(())
    }

    /// Replaces the cache content with what `path` holds.
    ///
    /// Only fields included by the caching scope are taken. A missing,
    /// unreadable or malformed file leaves the cache empty.
    pub fn load(&mut self, path: &Path) {
        self.clear();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No credential cache file");
            return;
        }

        tracing::debug!(path = %path.display(), "Reading credential cache");
        let document = match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<CacheDocument>(&contents) {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Invalid credential cache file: {e}");
                    return;
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to read credential cache: {e}");
                return;
            }
        };

        if self.scope.includes_token() {
            self.token = document.token;
        }
        if self.scope.includes_groups() {
            self.groups = document.groups;
        }

        tracing::info!(
            token = self.token.is_some(),
            groups = self.groups.is_some(),
            path = %path.display(),
            "Credential cache read"
        );
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn populated(scope: CachingScope) -> CredentialCache {
        let mut cache = CredentialCache::new(scope);
        cache.set_token(Some("abc".to_string()));
        cache.set_groups(json!({ "groupList": [] }));
        cache
    }

    #[test]
    fn scope_from_str() {
        assert_eq!("none".parse::<CachingScope>().unwrap(), CachingScope::None);
        assert_eq!("Token".parse::<CachingScope>().unwrap(), CachingScope::Token);
        assert_eq!("ALL".parse::<CachingScope>().unwrap(), CachingScope::All);
        assert!("everything".parse::<CachingScope>().is_err());
        assert!("off".parse::<CachingScope>().is_err());
    }

    #[test]
    fn scope_names_round_trip() {
        for scope in [CachingScope::None, CachingScope::Token, CachingScope::All] {
            assert_eq!(scope.as_str().parse::<CachingScope>().unwrap(), scope);
            assert_eq!(scope.to_string(), scope.as_str());
        }
    }

    #[test]
    fn default_scope_is_token() {
        assert_eq!(CachingScope::default(), CachingScope::Token);
    }

    #[test]
    fn new_cache_is_invalid_and_clean() {
        let cache = CredentialCache::new(CachingScope::All);
        assert!(!cache.is_valid());
        assert!(!cache.is_dirty());
        assert!(cache.groups().is_none());
    }

    #[test]
    fn new_token_clears_groups() {
        let cache = populated(CachingScope::All);
        assert!(cache.groups().is_some());

        let cache = cache.replace_token(Some("def".to_string()));
        assert_eq!(cache.token(), Some("def"));
        assert!(cache.groups().is_none());
        assert!(cache.is_dirty());
    }

    #[test]
    fn same_token_keeps_groups() {
        let cache = populated(CachingScope::All);
        let before = cache.clone();

        let after = cache.replace_token(Some("abc".to_string()));
        assert_eq!(after, before);
    }

    #[test]
    fn none_token_resets_and_marks_dirty() {
        let cache = populated(CachingScope::Token).replace_token(None);
        assert!(!cache.is_valid());
        assert!(cache.groups().is_none());
        assert!(cache.is_dirty());
    }

    #[test]
    fn clear_resets_everything_but_scope() {
        let mut cache = populated(CachingScope::All);
        cache.clear();
        assert_eq!(cache, CredentialCache::new(CachingScope::All));
    }

    #[test]
    fn persist_then_load_respects_scope() {
        let dir = tempfile::tempdir().unwrap();

        for scope in [CachingScope::None, CachingScope::Token, CachingScope::All] {
            let path = dir.path().join(format!("{scope}.json"));
            let mut cache = populated(scope);
            cache.persist(&path).unwrap();
            assert!(!cache.is_dirty());

            let mut loaded = CredentialCache::new(scope);
            loaded.load(&path);

            match scope {
                CachingScope::None => {
                    assert!(!path.exists());
                    assert_eq!(loaded.token(), None);
                    assert_eq!(loaded.groups(), None);
                }
                CachingScope::Token => {
                    assert_eq!(loaded.token(), Some("abc"));
                    assert_eq!(loaded.groups(), None);
                }
                CachingScope::All => {
                    assert_eq!(loaded.token(), Some("abc"));
                    assert_eq!(loaded.groups(), Some(&json!({ "groupList": [] })));
                }
            }
            assert!(!loaded.is_dirty());
        }
    }

    #[test]
    fn load_ignores_fields_outside_scope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        populated(CachingScope::All).persist(&path).unwrap();

        let mut loaded = CredentialCache::new(CachingScope::Token);
        loaded.load(&path);
        assert_eq!(loaded.token(), Some("abc"));
        assert!(loaded.groups().is_none());
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = populated(CachingScope::All);
        cache.load(&dir.path().join("missing.json"));
        assert_eq!(cache, CredentialCache::new(CachingScope::All));
    }

    #[test]
    fn load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "{ not json").unwrap();

        let mut cache = populated(CachingScope::All);
        cache.load(&path);
        assert!(!cache.is_valid());
        assert!(cache.groups().is_none());
    }

    #[test]
    fn persist_writes_token_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.json");
        populated(CachingScope::Token).persist(&path).unwrap();

        let contents: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(contents, json!({ "token": "abc" }));
    }

    #[test]
    fn persist_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let mut cache = populated(CachingScope::Token);
        let result = cache.persist(&blocker.join("cache.json"));
        assert!(matches!(result, Err(CacheError::Io(_))));
        assert!(cache.is_dirty());
    }
}
