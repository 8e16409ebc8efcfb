//! Object-introspection capabilities.
//!
//! A capability is the host-supplied service that measures objects. The agent
//! never measures anything itself; it only holds whichever capability the
//! bootstrap callback hands it.

pub mod object;
pub mod shallow;
pub mod traits;

pub use object::*;
pub use shallow::*;
pub use traits::*;
