//! Error types raised by the tracker and its storage layer.

use crate::libs::messages::Message;
use thiserror::Error;

/// Failure of a single collection call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// A stored document could not be encoded or decoded.
    #[error("malformed time-log document: {0}")]
    Document(#[from] serde_json::Error),

    /// The database location could not be prepared.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum TimerError {
    /// Rejected user input, such as an empty task name on `add`.
    #[error("{0}")]
    InvalidArgument(Message),

    /// Connection or ping failure while opening storage.
    #[error("{msg}: {0}", msg = Message::StorageUnavailable)]
    StorageUnavailable(#[source] StoreError),

    /// An insert or update call returned an error.
    #[error("{msg}: {0}", msg = Message::StorageOperationFailed)]
    StorageOperationFailed(#[from] StoreError),
}
