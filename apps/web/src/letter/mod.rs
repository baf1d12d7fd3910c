// Cover letter generation: prompt construction, the completion seam, and the
// page handlers. All provider calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
