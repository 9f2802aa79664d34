// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Persona line that opens every drafting prompt.
pub const WRITER_PERSONA: &str =
    "You are a senior hiring manager and expert cover-letter writer.";

/// Grounding rule: the resume is the only source of factual experience.
pub const TRUTH_INSTRUCTION: &str = "\
CRITICAL TRUTH RULE (NON-NEGOTIABLE):
- Do NOT invent experience.
- Do NOT claim leadership or implementation unless clearly supported by resume.
- If JD skills are not directly present in resume:
  - Use derived learning from audit, reconciliations, controls, systems exposure
  - Or frame as readiness / strong foundation
- Selling is required, exaggeration is forbidden.";
