use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("No link opener is available on this platform")]
    Unsupported,
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' exited with status {status}")]
    ExitStatus { program: String, status: i32 },
}
