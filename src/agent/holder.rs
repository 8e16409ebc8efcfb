use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::capability::{ObjectRef, SizeCapability};
use crate::error::AgentError;

/// Lifecycle of the holder. There is no way back to `Uninitialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    Uninitialized,
    Initialized,
}

/// Holds the capability handed over at bootstrap and answers size queries
/// against it.
///
/// # Publication
/// The handle lives behind an `RwLock`. `bootstrap` takes the write side, so
/// every query that acquires the read side afterwards sees the installed
/// handle, whichever thread it runs on. Queries only hold the read side long
/// enough to clone the `Arc`; the capability itself runs unlocked.
///
/// # Re-bootstrap
/// Installing a second capability replaces the first (last write wins). A
/// concurrent query sees either the old or the new handle, never neither.
pub struct InstrumentationAgent {
    capability: RwLock<Option<Arc<dyn SizeCapability>>>,
}

impl Default for InstrumentationAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl InstrumentationAgent {
    pub const fn new() -> Self {
        Self {
            capability: RwLock::new(None),
        }
    }

    /// Install the host capability. Moves the holder to `Initialized`.
    pub fn bootstrap<C>(&self, capability: C)
    where
        C: SizeCapability + 'static,
    {
        self.install(Arc::new(capability));
    }

    /// Same as [`bootstrap`](Self::bootstrap) for a handle the caller keeps sharing.
    pub fn bootstrap_shared(&self, capability: Arc<dyn SizeCapability>) {
        self.install(capability);
    }

    fn install(&self, capability: Arc<dyn SizeCapability>) {
        // A panic elsewhere can't leave an Option<Arc<_>> half-written
        let mut slot = self
            .capability
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = slot.replace(capability);
        drop(slot);

        // The old handle's Drop and the subscriber may both call back into the agent
        match previous {
            Some(previous) => {
                warn!("Capability already installed; replacing it (last write wins)");
                drop(previous);
            }
            None => debug!("Capability installed; agent initialized"),
        }
    }

    /// Shallow size of `object` as reported by the installed capability.
    ///
    /// Fails with [`AgentError::UninitializedCapability`] before bootstrap.
    /// Errors raised by the capability are returned unchanged.
    pub fn object_size(&self, object: Option<ObjectRef<'_>>) -> Result<u64, AgentError> {
        let capability = self.current().ok_or_else(|| {
            debug!("Size query rejected: agent not initialized");
            AgentError::UninitializedCapability
        })?;

        let size = capability.object_size(object)?;
        trace!("Size query: {} bytes", size);
        Ok(size)
    }

    pub fn state(&self) -> AgentState {
        if self.is_initialized() {
            AgentState::Initialized
        } else {
            AgentState::Uninitialized
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.capability
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn current(&self) -> Option<Arc<dyn SizeCapability>> {
        self.capability
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for InstrumentationAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstrumentationAgent")
            .field("state", &self.state())
            .finish()
    }
}
