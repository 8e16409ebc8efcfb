//! Process-wide agent.
//!
//! The host calls [`premain`] once during startup with a fixed signature, so
//! the holder it fills has to be a `static`. Code that can be handed an
//! [`InstrumentationAgent`] directly should prefer that.

use tracing::debug;

use super::holder::InstrumentationAgent;
use crate::capability::{ObjectRef, SizeCapability};
use crate::error::AgentError;

static AGENT: InstrumentationAgent = InstrumentationAgent::new();

/// Bootstrap callback. `agent_args` is whatever the host was configured to
/// pass; the agent does not interpret it.
pub fn premain<C>(agent_args: Option<&str>, capability: C)
where
    C: SizeCapability + 'static,
{
    debug!("Agent premain invoked (args: {:?})", agent_args);
    AGENT.bootstrap(capability);
}

/// Shallow size of `object` via the process-wide agent.
pub fn object_size(object: Option<ObjectRef<'_>>) -> Result<u64, AgentError> {
    AGENT.object_size(object)
}

/// The process-wide holder behind [`premain`] and [`object_size`].
pub fn global() -> &'static InstrumentationAgent {
    &AGENT
}
