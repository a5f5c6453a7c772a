use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, with or without new keys
/// - `Failure` (1): Precondition not met (e.g. no frontend directory)
/// - `Error` (2): Command failed (unreadable store, parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command could not start because a precondition was not met.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
