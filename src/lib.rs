pub mod error;
pub mod model;
pub mod protocol;
pub mod services;

pub use error::ClientError;
pub use services::client::AnswerClient;
pub use services::fetch::{FetchResponse, Fetcher};
