//! # Command System
//!
//! Prefixed text command handling (`!register`, `!list`).
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Modular handler infrastructure (handler trait, context, registry)
//! - 1.0.0: Initial monolithic command parsing

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod router;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::ChatCommandHandler;
pub use registry::CommandRegistry;
pub use router::CommandRouter;
