use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("Riot API still failing after {attempts} attempts (last status: {status})")]
    RetriesExhausted { status: u16, attempts: u32 },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Player not found: {game_name}#{tag_line}")]
    PlayerNotFound { game_name: String, tag_line: String },

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid match type: {0}")]
    InvalidMatchType(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
