//! Composition root for the game server.
//!
//! The binary loads configuration, installs logging, opens the session and
//! hands each TCP connection to [`connection::serve`]. Frames are one JSON
//! object per line in both directions.

pub mod config;
pub mod connection;
pub mod logging;

pub use config::ServerConfig;
