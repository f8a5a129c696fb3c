//! Thread-safe handle around an edit session.

use std::sync::{Arc, Mutex, PoisonError};

use crate::design::DesignSnapshot;
use crate::session::EditSession;

/// An [`EditSession`] behind a single lock.
///
/// Every operation takes the lock for its whole duration, so gesture events from several
/// threads are applied one at a time, in lock order, and readers never observe a half
/// applied result.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<EditSession>>,
}

impl SharedSession {
    pub fn new(session: EditSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut EditSession) -> R) -> R {
        let mut session = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    pub fn snapshot(&self) -> DesignSnapshot {
        self.with(|session| session.snapshot())
    }
}
