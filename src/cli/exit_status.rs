use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, translation found
/// - `Failure` (1): Command completed but no translation was found
/// - `Error` (2): Command failed (missing directory, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, translation found.
    Success,
    /// Command completed but no translation was found.
    Failure,
    /// Command failed due to an error (missing directory, bad config, etc.).
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
