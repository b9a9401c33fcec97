//! Session orchestration for the shared game table.
//!
//! Each session is owned by one background worker that applies commands in
//! arrival order, so connections never interleave mutations. Consumers hold a
//! cloneable [`SessionHandle`] and look sessions up through the
//! [`SessionRegistry`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the handle, registry, and error types
//! - [`config`] reads runtime settings from the environment
//! - [`events`] defines what subscribers receive after each command
//! - [`protocol`] maps wire messages to [`game_core::Action`] and back
//! - `workers` keeps the single-writer task internal to the crate
pub mod api;
pub mod config;
pub mod events;
pub mod protocol;

mod workers;

pub use api::{Result, RuntimeError, SessionHandle, SessionRegistry};
pub use config::RuntimeConfig;
pub use events::SessionEvent;
pub use protocol::{ClientMessage, HandlerResult, ProtocolError, ServerMessage};
