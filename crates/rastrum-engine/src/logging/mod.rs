//! Logging utilities.
//!
//! The engine only emits through the `log` facade. Hosts that want output
//! without wiring their own backend can call [`init_logging`] once.

mod init;

pub use init::{LoggingConfig, init_logging};
