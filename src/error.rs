use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No game found for \"{0}\"")]
    NoGameFound(String),
    #[error("Must select a category")]
    NoCategorySelected,
    #[error("Must select a value for variable {0}")]
    NoVariableSelected(String),
    #[error("No (verified) runs on this leaderboard")]
    EmptyLeaderboard,
    #[error("Could not find a time for run {run_id}")]
    MissingRunTime { run_id: String },
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Malformed {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not encode {endpoint} parameters: {source}")]
    Encode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("Prompt failed: {0}")]
    Prompt(dialoguer::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    BadInput(String),
    #[error("Cancelled")]
    Cancelled,
}

impl AppError {
    /// User interruption ends the session but is not a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                AppError::Cancelled
            }
            other => AppError::Prompt(other),
        }
    }
}
