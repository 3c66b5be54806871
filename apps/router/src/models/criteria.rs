use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::employee::DirectoryRecord;

/// Sparse search filter derived from free text. Absent fields are not filtered on.
///
/// `all` marks an explicit request for the whole table. It never widens a filter that
/// other fields already narrow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, alias = "role", skip_serializing_if = "Option::is_none")]
    pub job_role: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "is_false")]
    pub all: bool,
}

impl Criteria {
    /// Requests every row of a table.
    pub fn everything() -> Self {
        Self {
            all: true,
            ..Self::default()
        }
    }

    /// Keys the records backend needs to find one employee's rows.
    pub fn for_employee(employee: &DirectoryRecord) -> Self {
        Self {
            id: Some(employee.id),
            job_role: Some(employee.job_role.clone()),
            ..Self::default()
        }
    }

    /// True when nothing was understood: no field set and no request for everything.
    pub fn is_empty(&self) -> bool {
        !self.all && !self.has_filters()
    }

    pub fn has_filters(&self) -> bool {
        self.id.is_some() || self.name.is_some() || self.country.is_some() || self.job_role.is_some()
    }

    /// The criteria as a backend `query` string.
    pub fn to_query(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Accepts `2`, `"2"` or `" 2 "`. Anything else is treated as no id.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}
