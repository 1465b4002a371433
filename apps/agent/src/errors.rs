use thiserror::Error;

/// Application-level error type.
///
/// Every variant except `Io`/`Json` is recoverable: the command loop reports
/// a one-line message, leaves session state untouched, and re-prompts.
/// Store I/O failures are the only fatal kind.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Query too vague: {0}")]
    Criteria(String),

    #[error("No results yet — run a find command first")]
    EmptyResultList,

    #[error("Position #{position} is out of range (results have {len} entries)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Unknown shortlist: \"{0}\"")]
    UnknownShortlist(String),

    #[error("Unknown job: \"{0}\"")]
    UnknownJob(String),

    #[error("Shortlist \"{shortlist}\" references a candidate that no longer exists: {candidate_id}")]
    DanglingCandidate {
        shortlist: String,
        candidate_id: String,
    },

    #[error("Nothing to preview — draft an email first")]
    NothingToPreview,

    #[error("I didn't understand that. {0}")]
    UnknownCommand(String),

    #[error("Data store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data store format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Store failures abort the session; everything else recovers at the prompt.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Json(_))
    }
}
