//! In-memory persistence adapters. Clones share storage, so a test (or an
//! ephemeral session) can hand one handle to the store and keep another to
//! observe what was written.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::io::local::LocalStore;
use crate::io::remote::{RemoteError, RemoteStore};
use crate::model::AppState;

#[derive(Default)]
struct MemoryLocalInner {
    snapshot: Option<AppState>,
    saves: usize,
}

/// In-memory local adapter; counts saves so debounce coalescing is
/// observable.
#[derive(Clone, Default)]
pub struct MemoryLocal {
    inner: Rc<RefCell<MemoryLocalInner>>,
}

impl MemoryLocal {
    pub fn new() -> Self {
        MemoryLocal::default()
    }

    /// Pre-seeded with a saved snapshot
    pub fn with_state(state: AppState) -> Self {
        let local = MemoryLocal::new();
        local.inner.borrow_mut().snapshot = Some(state);
        local
    }

    /// The last snapshot written, if any
    pub fn snapshot(&self) -> Option<AppState> {
        self.inner.borrow().snapshot.clone()
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> usize {
        self.inner.borrow().saves
    }
}

impl LocalStore for MemoryLocal {
    fn load(&self) -> Option<AppState> {
        self.inner.borrow().snapshot.clone()
    }

    fn save(&self, state: &AppState) {
        let mut inner = self.inner.borrow_mut();
        inner.snapshot = Some(state.clone());
        inner.saves += 1;
    }
}

/// In-memory remote adapter: one row per user id
#[derive(Clone, Default)]
pub struct MemoryRemote {
    rows: Rc<RefCell<HashMap<String, AppState>>>,
}

impl MemoryRemote {
    pub fn new() -> Self {
        MemoryRemote::default()
    }

    pub fn insert(&self, user_id: &str, state: AppState) {
        self.rows.borrow_mut().insert(user_id.into(), state);
    }

    pub fn row(&self, user_id: &str) -> Option<AppState> {
        self.rows.borrow().get(user_id).cloned()
    }
}

impl RemoteStore for MemoryRemote {
    fn load(&self, user_id: &str) -> Result<Option<AppState>, RemoteError> {
        Ok(self.rows.borrow().get(user_id).cloned())
    }

    fn save(&self, user_id: &str, state: &AppState) -> Result<(), RemoteError> {
        self.rows.borrow_mut().insert(user_id.into(), state.clone());
        Ok(())
    }
}
