use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("failed to spawn renderer {command:?}: {source}")]
    RendererSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to renderer stdin: {0}")]
    RendererPipe(#[from] std::io::Error),

    #[error("renderer {command:?} exited with {status}: {stderr}")]
    RendererFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("invalid trace event on line {line}: {source}")]
    TraceParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
