pub mod cleanup;
pub mod client;
pub mod fetch;
pub mod lookup;
