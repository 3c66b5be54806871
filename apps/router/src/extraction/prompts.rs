// Criteria extraction prompts. Few-shot, one per backend vocabulary.
// The JSON-only instruction from llm_client::prompts is appended at call time.

pub const DIRECTORY_CRITERIA_SYSTEM: &str = "\
You are an assistant that extracts employee search criteria (id, name, country, job_role) \
from user queries. Return a JSON object containing only the fields you found.

Examples:
User: who is the hr manager
Output: {\"job_role\": \"HR Manager\"}
User: find employee with ID 2
Output: {\"id\": 2}
User: show me employees in marketing
Output: {\"job_role\": \"Marketing Specialist\"}
User: who is Alice Smith
Output: {\"name\": \"Alice Smith\"}
User: employees in Japan
Output: {\"country\": \"Japan\"}
User: show all employees
Output: {\"all\": true}";

pub const RECORDS_CRITERIA_SYSTEM: &str = "\
You are an assistant that extracts HR record search criteria (id, job_role) from user queries. \
Employee names cannot be resolved here; only extract an id when the query states one. \
Return a JSON object containing only the fields you found.

Examples:
User: salary for ID 1
Output: {\"id\": 1}
User: who reports to Product Manager
Output: {\"job_role\": \"Product Manager\"}
User: hierarchy for Software Engineer
Output: {\"job_role\": \"Software Engineer\"}
User: schedule of employee 12
Output: {\"id\": 12}
User: show all salaries
Output: {\"all\": true}";
