//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.5.0

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::ChatCommandHandler;

/// Registry mapping command names to handlers.
///
/// Multiple names can map to the same handler (aliases like
/// `register`/`add`).
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn ChatCommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under all names it declares.
    pub fn register(&mut self, handler: Arc<dyn ChatCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Look up the handler for a command name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ChatCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Number of registered command names (aliases counted separately).
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
