#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionStarted(String),        // task name
    SessionsPaused(usize, String), // count, selector
    SessionsResumed(usize, String),
    SessionStopped(String), // selector
    NoSessionsToPause(String),
    NoSessionsToResume(String),
    NoSessionToStop(String),
    EmptyTaskName,

    // === STORAGE MESSAGES ===
    StorageUnavailable,
    StorageOperationFailed,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigUnreadable(String), // parse error
    ConfigModuleStorage,
    PromptDatabaseName,
    PromptCollectionName,

    // === ERROR MESSAGES ===
    CommandFailed(String),
}
