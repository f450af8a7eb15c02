use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read vocabulary from {}: {source}", .path.display())]
    ReadVocabulary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server stopped unexpectedly: {}", .0)]
    Serve(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
