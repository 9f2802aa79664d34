// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Literal placed in the JOB DESCRIPTION section when no JD text is available.
pub const JD_NOT_PROVIDED: &str = "Not provided";

/// Fixed structural contract: one page, five paragraphs, fixed roles.
pub const STRUCTURE_INSTRUCTION: &str = "\
STRUCTURE & LENGTH:
- STRICT one A4 page
- EXACTLY 5 paragraphs
- Each paragraph ~5 lines
- No fluff, no generic phrases

PARAGRAPH ROLES:
1. Why this role at this company (contextual, specific)
2. Core CA foundation and accounting credibility (resume-backed)
3. Operational / role alignment using direct or derived experience
4. Governance, controls, cross-functional maturity
5. Forward-looking close with ownership tone";

/// Cover letter drafting prompt template.
/// Placeholders: {persona}, {truth_instruction}, {structure_instruction}, {tone},
///               {name}, {company}, {role}, {resume_text}, {jd_text}
pub const DRAFT_PROMPT_TEMPLATE: &str = "{persona}

{truth_instruction}

{structure_instruction}

TONE:
Company type is: {tone}
Adapt language accordingly (do not mention tone explicitly).

CANDIDATE:
Name: {name}
Company: {company}
Role: {role}

RESUME (ONLY SOURCE OF FACTUAL EXPERIENCE):
{resume_text}

JOB DESCRIPTION:
{jd_text}

OUTPUT:
Only the 5 body paragraphs, separated by a single blank line.
No date. No salutation. No signature.";
