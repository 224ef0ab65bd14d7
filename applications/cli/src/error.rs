/// CLI error types and exit code policy
use thiserror::Error;

/// Exit code for invalid or missing arguments
pub const EXIT_ARGUMENTS: u8 = 1;

/// Exit code for every other failure
pub const EXIT_UNHANDLED: u8 = 255;

/// Errors caused by how tagsort was invoked
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line
    #[error("ArgumentsError: {0}")]
    Arguments(String),

    /// Bad configuration file or environment
    #[error("ConfigError: {0}")]
    Config(String),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Arguments(_) | CliError::Config(_) => EXIT_ARGUMENTS,
        }
    }
}

/// Process exit code for any error returned by `run`
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map_or(EXIT_UNHANDLED, CliError::exit_code)
}
