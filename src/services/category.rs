//! Category service
//!
//! Manages the per-type category lists. Categories can only be added.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{normalize_name, TransactionType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Categories for a type, in insertion order
    pub fn list(&self, kind: TransactionType) -> &[String] {
        self.storage.state().categories.list(kind)
    }

    /// Categories for a type given by name; unknown types give an empty list
    pub fn list_named(&self, kind: &str) -> &[String] {
        self.storage.state().categories.list_named(kind)
    }

    /// Add a category, returning the normalized name that was stored
    ///
    /// The name is trimmed and title-cased first, so "  eating out" and
    /// "EATING OUT" both collide with an existing "Eating Out".
    pub fn add(&mut self, name: &str, kind: TransactionType) -> LedgerResult<String> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }

        let exists = self
            .list(kind)
            .iter()
            .any(|existing| normalize_name(existing) == name);
        if exists {
            return Err(LedgerError::DuplicateCategory(name));
        }

        self.storage
            .state_mut()
            .categories
            .insert(kind, name.clone());
        self.storage.persist();
        debug!(category = %name, kind = %kind, "Added category");

        Ok(name)
    }
}
