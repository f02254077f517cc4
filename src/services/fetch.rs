use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::ClientError;

const TIMEOUT_SECS: u64 = 30;

/// Status code plus UTF-8 body of one GET. The client decides what a
/// non-200 status means; the fetcher only reports it.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// Transport seam for the answer client. The reqwest implementation below
/// is the real one; tests substitute canned responses.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<FetchResponse, ClientError>;
}

/// reqwest-backed transport with the two session ownership modes.
pub enum HttpFetcher {
    /// Open a fresh session per call and drop it when the call returns,
    /// on every exit path.
    Transient,
    /// Caller-supplied session; the caller keeps its lifecycle.
    Shared(Client),
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, ClientError> {
        match self {
            HttpFetcher::Shared(client) => get_text(client, url),
            HttpFetcher::Transient => {
                let client = Client::builder()
                    .timeout(Duration::from_secs(TIMEOUT_SECS))
                    .build()?;
                get_text(&client, url)
            }
        }
    }
}

fn get_text(client: &Client, url: &str) -> Result<FetchResponse, ClientError> {
    let response = client.get(url).send()?;
    let status = response.status().as_u16();
    let body = response.text()?;

    Ok(FetchResponse { status, body })
}
