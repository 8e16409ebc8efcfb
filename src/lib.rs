//! Memory-profiling agent: a process-wide handle to a host-supplied
//! object-size capability, installed once at startup and queried from
//! anywhere afterwards.

pub mod agent;
pub mod capability;
pub mod error;

// Re-export specific items for convenient access
pub use agent::{global, object_size, premain, AgentState, InstrumentationAgent};
pub use capability::{ObjectRef, ShallowSizer, SizeCapability};
pub use error::{AgentError, CapabilityError};
