use thiserror::Error;

/// Failures raised by a size capability itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("cannot measure a null reference")]
    NullReference,

    #[error("unsupported reference kind: {type_name}")]
    Unsupported { type_name: String },

    #[error("capability failure: {0}")]
    Other(String),
}

/// Errors surfaced by the agent to its callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// Queried before the bootstrap callback installed a capability.
    #[error("agent not initialized")]
    UninitializedCapability,

    // Passed through untouched
    #[error(transparent)]
    Capability(#[from] CapabilityError),
}
