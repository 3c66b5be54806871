use serde::{Deserialize, Serialize};

/// One entry of the employee directory. Seeded at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub id: u32,
    pub name: String,
    pub country: String,
    #[serde(alias = "role")]
    pub job_role: String,
}

impl DirectoryRecord {
    pub fn new(id: u32, name: &str, country: &str, job_role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            country: country.to_string(),
            job_role: job_role.to_string(),
        }
    }
}
