use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use reqwest::blocking::Client;

use crate::error::ClientError;
use crate::model::document::AnswerDocument;
use crate::services::cleanup;
use crate::services::fetch::{Fetcher, HttpFetcher};
use crate::services::lookup::LookupTable;

pub const JSON_URL: &str =
    "https://raw.githubusercontent.com/PeterTADev/Elaina_ChatBot_API/main/main.json";

struct State {
    table: LookupTable,
    ready: bool,
}

/// Client that fetches utterance/answer data from the remote answer
/// document and serves a random answer per known utterance.
///
/// The table is populated lazily: the first `get_answer` call fetches the
/// data if no refresh has happened yet. If the remote document changes
/// during the client's lifetime, call [`AnswerClient::refresh`] to pick up
/// the changes; nothing refreshes on its own after that first load.
pub struct AnswerClient {
    fetcher: Box<dyn Fetcher>,
    session: Option<Client>,
    state: Mutex<State>,
}

impl AnswerClient {
    /// Client that opens a transient session per refresh and drops it when
    /// the refresh returns.
    pub fn new() -> Self {
        Self::build(Box::new(HttpFetcher::Transient), None)
    }

    /// Client backed by a caller-supplied session. The caller keeps the
    /// session's lifecycle; refreshes never close it.
    pub fn with_session(session: Client) -> Self {
        let fetcher = Box::new(HttpFetcher::Shared(session.clone()));
        Self::build(fetcher, Some(session))
    }

    /// Client over an arbitrary transport. This is the seam tests use to
    /// substitute canned responses for the network.
    pub fn with_fetcher(fetcher: Box<dyn Fetcher>) -> Self {
        Self::build(fetcher, None)
    }

    fn build(fetcher: Box<dyn Fetcher>, session: Option<Client>) -> Self {
        AnswerClient {
            fetcher,
            session,
            state: Mutex::new(State {
                table: LookupTable::default(),
                ready: false,
            }),
        }
    }

    /// The caller-supplied session, if one was given at construction.
    pub fn session(&self) -> Option<&Client> {
        self.session.as_ref()
    }

    /// Whether at least one refresh has completed successfully.
    pub fn is_ready(&self) -> bool {
        self.state.lock().ready
    }

    /// Fetches the remote document and rebuilds the lookup table from it.
    ///
    /// The new table fully replaces the previous one; an utterance removed
    /// from the source is gone after this returns. On any failure (bad
    /// status, transport, parse) the previous table and the readiness flag
    /// stay untouched.
    pub fn refresh(&self) -> Result<(), ClientError> {
        let response = self.fetcher.fetch(JSON_URL)?;

        if response.status != 200 {
            return Err(ClientError::Http {
                status: response.status,
            });
        }

        let cleaned = cleanup::strip_trailing_commas(&response.body);
        let doc: AnswerDocument = serde_json::from_str(&cleaned)?;
        let table = LookupTable::from_document(&doc);

        // Built fully above; one assignment under the lock, so readers
        // never see a partial table.
        let mut state = self.state.lock();
        state.table = table;
        state.ready = true;

        Ok(())
    }

    /// Refreshes once if no refresh has succeeded yet, otherwise a no-op.
    pub fn ensure_ready(&self) -> Result<(), ClientError> {
        if self.state.lock().ready {
            return Ok(());
        }
        self.refresh()
    }

    /// Random answer for an utterance, `None` if the utterance is unknown
    /// or its answer list is empty. Matching is case-insensitive. May
    /// refresh first (and propagate that failure) if the table was never
    /// populated.
    pub fn get_answer(&self, utterance: &str) -> Result<Option<String>, ClientError> {
        self.get_answer_with(utterance, &mut thread_rng())
    }

    /// Same as [`AnswerClient::get_answer`] with the selection RNG
    /// supplied by the caller.
    pub fn get_answer_with<R: Rng>(
        &self,
        utterance: &str,
        rng: &mut R,
    ) -> Result<Option<String>, ClientError> {
        self.ensure_ready()?;

        let state = self.state.lock();
        let answer = state
            .table
            .get(utterance)
            .and_then(|answers| answers.choose(rng).cloned());

        Ok(answer)
    }
}

impl Default for AnswerClient {
    fn default() -> Self {
        AnswerClient::new()
    }
}
