use thiserror::Error;

/// Errors surfaced by [`crate::AnswerClient`]. None of these are retried
/// internally; resilience policy belongs to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote source answered with a non-200 status.
    #[error("HTTP response status code {status}")]
    Http { status: u16 },

    /// The request itself failed (connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not valid JSON even after trailing-comma cleanup,
    /// or did not have the expected data/answers/utterances shape.
    #[error("invalid answer document: {0}")]
    Parse(#[from] serde_json::Error),
}
