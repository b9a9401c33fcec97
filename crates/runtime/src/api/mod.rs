//! Public runtime API surface.

pub mod errors;
pub mod handle;
pub mod registry;

pub use errors::{Result, RuntimeError};
pub use handle::SessionHandle;
pub use registry::SessionRegistry;
