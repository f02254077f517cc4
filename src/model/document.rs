use serde::Deserialize;

/// Top-level shape of the remote answer document.
#[derive(Debug, Deserialize)]
pub struct AnswerDocument {
    pub data: Vec<Category>,
}

/// One grouping in the source document: every utterance listed here is
/// answered by a random pick from `answers`.
#[derive(Debug, Deserialize)]
pub struct Category {
    pub answers: Vec<String>,
    pub utterances: Vec<String>,
}
