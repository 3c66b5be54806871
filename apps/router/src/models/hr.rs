use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub employee_id: u32,
    pub base_salary: f64,
    pub currency: String,
    #[serde(alias = "bonus_eligibility")]
    pub bonus_eligible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyRecord {
    #[serde(alias = "role")]
    pub job_role: String,
    pub level: u8,
    pub reports_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub employee_id: u32,
    pub work_days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
    pub shift_type: String,
}

/// Any row the records backend can return. Untagged: the variant is picked by the
/// distinguishing field (`base_salary`, `work_days`, or `level`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HrRecord {
    Salary(SalaryRecord),
    Schedule(ScheduleRecord),
    Hierarchy(HierarchyRecord),
}

impl HrRecord {
    pub fn as_salary(&self) -> Option<&SalaryRecord> {
        match self {
            HrRecord::Salary(s) => Some(s),
            _ => None,
        }
    }
}

/// Organisation chart: (role, level, reports_to). Lower level = more senior.
///
/// Seeds the records backend's hierarchy table and ranks roles for comparisons.
pub const ROLE_LEVELS: &[(&str, u8, Option<&str>)] = &[
    ("CEO", 1, None),
    ("CTO", 2, Some("CEO")),
    ("CFO", 2, Some("CEO")),
    ("COO", 2, Some("CEO")),
    ("CMO", 2, Some("CEO")),
    ("VP Engineering", 3, Some("CTO")),
    ("VP Sales", 3, Some("COO")),
    ("VP Marketing", 3, Some("CMO")),
    ("Director IT", 4, Some("CTO")),
    ("Director HR", 4, Some("COO")),
    ("Product Manager", 5, Some("VP Engineering")),
    ("HR Manager", 5, Some("Director HR")),
    ("Operations Manager", 5, Some("COO")),
    ("Cloud Architect", 5, Some("VP Engineering")),
    ("Legal Counsel", 6, Some("CFO")),
    ("Scrum Master", 6, Some("Product Manager")),
    ("Cybersecurity Analyst", 6, Some("Director IT")),
    ("Research Scientist", 6, Some("VP Engineering")),
    ("Data Scientist", 7, Some("VP Engineering")),
    ("Machine Learning Engineer", 7, Some("VP Engineering")),
    ("Financial Analyst", 7, Some("CFO")),
    ("Accountant", 7, Some("CFO")),
    ("Business Analyst", 7, Some("Product Manager")),
    ("Product Designer", 7, Some("Product Manager")),
    ("UX Designer", 7, Some("Product Manager")),
    ("Marketing Specialist", 7, Some("VP Marketing")),
    ("Sales Representative", 7, Some("VP Sales")),
    ("Project Coordinator", 7, Some("Operations Manager")),
    ("Network Engineer", 7, Some("Director IT")),
    ("Software Engineer", 8, Some("VP Engineering")),
    ("DevOps Engineer", 8, Some("Director IT")),
    ("QA Engineer", 8, Some("VP Engineering")),
    ("Data Engineer", 8, Some("VP Engineering")),
    ("Technical Writer", 8, Some("Product Manager")),
    ("Content Creator", 8, Some("VP Marketing")),
    ("Customer Support", 8, Some("Operations Manager")),
];

/// Level given to roles missing from [`ROLE_LEVELS`]: one below the most junior listed level.
pub fn unranked_level() -> u8 {
    ROLE_LEVELS.iter().map(|(_, level, _)| *level).max().unwrap_or(0) + 1
}

/// Case-insensitive role lookup, falling back to [`unranked_level`].
pub fn role_level(role: &str) -> u8 {
    let role = role.trim();
    ROLE_LEVELS
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(role))
        .map(|(_, level, _)| *level)
        .unwrap_or_else(unranked_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_level_known_roles() {
        assert_eq!(role_level("CEO"), 1);
        assert_eq!(role_level("software engineer"), 8);
        assert_eq!(role_level("  VP Sales "), 3);
    }

    #[test]
    fn test_unknown_role_ranks_below_everything() {
        assert_eq!(unranked_level(), 9);
        assert_eq!(role_level("Chief Vibes Officer"), 9);
    }

    #[test]
    fn test_hr_record_picks_variant_by_shape() {
        let salary: HrRecord = serde_json::from_str(
            r#"{"employee_id": 1, "base_salary": 95000, "currency": "USD", "bonus_eligibility": true}"#,
        )
        .unwrap();
        assert!(matches!(salary, HrRecord::Salary(ref s) if s.bonus_eligible));

        let schedule: HrRecord = serde_json::from_str(
            r#"{"employee_id": 2, "work_days": ["Monday"], "start_time": "09:00",
                "end_time": "17:00", "timezone": "EST", "shift_type": "Day"}"#,
        )
        .unwrap();
        assert!(matches!(schedule, HrRecord::Schedule(_)));

        let hierarchy: HrRecord =
            serde_json::from_str(r#"{"job_role": "CTO", "level": 2, "reports_to": "CEO"}"#)
                .unwrap();
        assert!(matches!(hierarchy, HrRecord::Hierarchy(ref h) if h.level == 2));
    }

    #[test]
    fn test_hr_record_serializes_flat() {
        let record = HrRecord::Hierarchy(HierarchyRecord {
            job_role: "CEO".to_string(),
            level: 1,
            reports_to: None,
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["job_role"], "CEO");
        assert!(json["reports_to"].is_null());
    }
}
