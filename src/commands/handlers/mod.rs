//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.5.0
//!
//! ## Changelog
//! - 1.0.0: Initial extraction from the monolithic router

pub mod list;
pub mod register;

use std::sync::Arc;

use super::handler::ChatCommandHandler;

/// Create all registered command handlers.
pub fn create_all_handlers() -> Vec<Arc<dyn ChatCommandHandler>> {
    vec![
        Arc::new(register::RegisterHandler),
        Arc::new(list::ListHandler),
    ]
}
