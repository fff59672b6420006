pub mod euler_client;
pub mod llm_client;

pub use euler_client::{EulerClient, ProblemFetcher};
pub use llm_client::{LanguageModel, LlmClient};
