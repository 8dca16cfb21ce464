use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("character with name '{0}' already exists in game")]
    DuplicateName(String),

    #[error("character with player name '{0}' already exists in game")]
    DuplicatePlayer(String),

    #[error("character not found")]
    NotFound,

    #[error("'{0}' is not a proficiency rank (expected U, T, E, M or L)")]
    InvalidProficiency(String),

    #[error("'{0}' is not a rollable statistic")]
    InvalidStatistic(String),

    #[error("reading roster file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing roster file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing roster file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("encoding roster: {0}")]
    Encode(#[source] serde_yaml::Error),
}
