pub mod aggregate;
pub mod compare;
pub mod extraction;
pub mod locate;
pub mod openai;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod units;

pub use aggregate::*;
pub use compare::*;
pub use extraction::*;
pub use locate::*;
pub use openai::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use units::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Model endpoint unreachable at {0}")]
    Connection(String),

    #[error("Model API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Model response contained no choices")]
    EmptyResponse,

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}
