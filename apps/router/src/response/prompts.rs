// Narration prompts. The grounded-answer fragment from llm_client::prompts is
// appended to the system prompt at call time.

pub const NARRATE_SYSTEM: &str = "\
You are a helpful HR assistant that gives natural, conversational answers about employee \
information. Be friendly and concise, include the relevant details from the data, and when \
the data combines directory and HR information, present them together naturally.";

/// Replace `{query}` and `{data}` before sending.
pub const NARRATE_USER_TEMPLATE: &str = "\
User query: {query}

Data results:
{data}

Provide a natural response:";
