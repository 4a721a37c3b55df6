//! Storage layer for Pocket Ledger
//!
//! The whole ledger is one JSON document. A [`StateStore`] loads and saves
//! that document; [`Storage`] owns the in-memory [`LedgerState`] together
//! with its store and is what the services operate on.
//!
//! Persistence is best effort. A missing or unreadable file loads as the
//! default state (and is rewritten), and a failed save is logged while the
//! in-memory state stays authoritative for the rest of the session.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::LedgerResult;
use crate::models::LedgerState;

/// Loads and saves the complete ledger document
pub trait StateStore {
    /// Load the state, falling back to defaults when nothing usable exists
    fn load(&self) -> LedgerState;

    /// Overwrite the persisted copy with `state`
    fn save(&self, state: &LedgerState) -> LedgerResult<()>;
}

/// JSON file backed store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn reset_to_defaults(&self) -> LedgerState {
        let state = LedgerState::default();
        if let Err(e) = self.save(&state) {
            warn!(path = %self.path.display(), error = %e, "Failed to write fresh data file");
        }
        state
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> LedgerState {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No data file found, creating a new one");
            return self.reset_to_defaults();
        }

        match read_json::<LedgerState, _>(&self.path) {
            Ok(state) => {
                debug!(
                    path = %self.path.display(),
                    transactions = state.transactions.len(),
                    "Loaded ledger"
                );
                state
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Data file corrupted or unreadable, starting clean"
                );
                self.reset_to_defaults()
            }
        }
    }

    fn save(&self, state: &LedgerState) -> LedgerResult<()> {
        write_json_atomic(&self.path, state)?;
        debug!(path = %self.path.display(), "Saved ledger");
        Ok(())
    }
}

/// In-memory store, for tests and embedding without a file
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<LedgerState>>,
    saves: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing persisted state
    pub fn with_state(state: LedgerState) -> Self {
        let store = Self::new();
        store.saved.replace(Some(state));
        store
    }

    /// Make every subsequent save fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// The last successfully saved state
    pub fn saved(&self) -> Option<LedgerState> {
        self.saved.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> LedgerState {
        self.saved.borrow().clone().unwrap_or_default()
    }

    fn save(&self, state: &LedgerState) -> LedgerResult<()> {
        if self.fail_writes.get() {
            return Err(crate::error::LedgerError::PersistenceWriteFailed(
                "memory store is read-only".into(),
            ));
        }
        self.saved.replace(Some(state.clone()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<S: StateStore + ?Sized> StateStore for std::rc::Rc<S> {
    fn load(&self) -> LedgerState {
        (**self).load()
    }

    fn save(&self, state: &LedgerState) -> LedgerResult<()> {
        (**self).save(state)
    }
}

/// The loaded ledger plus the store it persists to
pub struct Storage {
    state: LedgerState,
    store: Box<dyn StateStore>,
}

impl Storage {
    /// Load state from `store` and take ownership of both
    pub fn open(store: impl StateStore + 'static) -> Self {
        let state = store.load();
        Self {
            state,
            store: Box::new(store),
        }
    }

    /// Open the JSON ledger file at `path`
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::open(JsonFileStore::new(path))
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut LedgerState {
        &mut self.state
    }

    /// Save the current state. A failure is logged, not returned.
    ///
    /// Returns whether the write succeeded.
    pub fn persist(&self) -> bool {
        match self.store.save(&self.state) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Could not save data; changes are kept in memory only");
                false
            }
        }
    }
}
