pub mod global;
pub mod holder;

pub use global::*;
pub use holder::*;
