#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid drug name: {0}")]
    InvalidName(String),
    #[error("missing API credential (set PKPD_API_KEY)")]
    MissingApiKey,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type CoreResult<T> = std::result::Result<T, AnalysisError>;
