use std::path::PathBuf;

use thiserror::Error;

pub type SeedResult<T> = Result<T, SeedError>;

/// Failures of the seed generators. Every variant aborts the current run.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize records: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("atomic rename failed from {from} to {to}: {source}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("user {user_id}: cannot sample {requested} skills from a pool of {available}")]
    InsufficientSkills {
        user_id: u64,
        requested: usize,
        available: usize,
    },

    #[error("invalid configuration: {field}: {message}")]
    InvalidConfig { field: String, message: String },

    #[error("timestamp out of range: {source}")]
    Timestamp {
        #[from]
        source: time::error::ComponentRange,
    },
}

impl SeedError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseJson {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename { from, to, source }
    }

    pub fn insufficient_skills(user_id: u64, requested: usize, available: usize) -> Self {
        Self::InsufficientSkills {
            user_id,
            requested,
            available,
        }
    }

    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}
