//! Display implementation for timer application messages.
//!
//! All user-facing text lives here, so commands and errors only refer to
//! [`Message`] variants and never format text themselves.
//!
//! ```rust
//! use timer::libs::messages::Message;
//!
//! let message = Message::SessionStarted("write-report".to_string());
//! assert_eq!(message.to_string(), "Started work on 'write-report'");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SessionStarted(name) => format!("Started work on '{}'", name),
            Message::SessionsPaused(count, selector) => format!("Paused {} session(s) for {}", count, selector),
            Message::SessionsResumed(count, selector) => format!("Resumed {} session(s) for {}", count, selector),
            Message::SessionStopped(selector) => format!("Stopped a session for {}", selector),
            Message::NoSessionsToPause(selector) => format!("No running sessions to pause for {}", selector),
            Message::NoSessionsToResume(selector) => format!("No paused sessions to resume for {}", selector),
            Message::NoSessionToStop(selector) => format!("No open session to stop for {}", selector),
            Message::EmptyTaskName => "Cannot add an empty task".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageUnavailable => "Failed to connect to storage".to_string(),
            Message::StorageOperationFailed => "Storage operation failed".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "Configuration file not found, nothing to remove".to_string(),
            Message::ConfigUnreadable(error) => {
                format!("Existing configuration could not be read, starting from defaults: {}", error)
            }
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::PromptDatabaseName => "Enter the database name".to_string(),
            Message::PromptCollectionName => "Enter the collection name".to_string(),

            // === ERROR MESSAGES ===
            Message::CommandFailed(error) => error.clone(),
        };
        write!(f, "{}", text)
    }
}
