// Cross-cutting prompt fragments. Each component that calls the LLM keeps its own
// prompts.rs alongside it and appends these where needed.

/// Appended to every prompt whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return only valid JSON, no other text. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to prompts whose reply is shown to the user as prose.
pub const GROUNDED_ANSWER_INSTRUCTION: &str = "Answer using only the data provided. \
    If the data does not contain the answer, say so plainly instead of guessing.";
