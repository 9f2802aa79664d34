// Draft generation: prompt assembly, tone selection and the single generator call.
// All LLM calls go through the TextGenerator trait in llm_client; nothing here talks HTTP.

pub mod drafter;
pub mod prompts;
pub mod tone;
