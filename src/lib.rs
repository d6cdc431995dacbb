//! viewdock - view placement for IDE-style workbenches
//!
//! This crate decides where views live (Side Bar, Panel and secondary side
//! bar containers), lets users move them and reset them to their defaults,
//! and resizes layout parts relative to focus. It follows the Elm
//! Architecture: state in [`AppModel`], changes as [`Msg`], side effects as
//! [`Cmd`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod picker;
pub mod placement;
pub mod registry;
pub mod report;
pub mod resize;
pub mod state;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WorkbenchConfig;
pub use messages::Msg;
pub use model::AppModel;
