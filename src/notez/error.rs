use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotezError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Stored notes in slot '{key}' are malformed: {source}")]
    MalformedState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not generate a unique note id after {0} attempts")]
    IdSpaceExhausted(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NotezError>;
