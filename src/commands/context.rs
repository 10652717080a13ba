//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.5.0

use crate::features::accounts::AccountStore;

/// Shared state injected into every command handler.
///
/// The account store is owned here and passed down explicitly; there is
/// no process-wide global.
#[derive(Clone)]
pub struct CommandContext {
    pub store: AccountStore,
    pub command_prefix: String,
}

impl CommandContext {
    pub fn new(store: AccountStore, command_prefix: String) -> Self {
        Self {
            store,
            command_prefix,
        }
    }
}
