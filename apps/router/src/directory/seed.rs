use crate::models::employee::DirectoryRecord;

const EMPLOYEES: &[(u32, &str, &str, &str)] = &[
    (1, "Alice Smith", "USA", "Software Engineer"),
    (2, "Bob Johnson", "Canada", "Data Scientist"),
    (3, "Charlie Brown", "UK", "Product Manager"),
    (4, "Diana Miller", "Australia", "UX Designer"),
    (5, "Ethan Davis", "Germany", "DevOps Engineer"),
    (6, "Fiona White", "France", "Marketing Specialist"),
    (7, "George Green", "Japan", "HR Manager"),
    (8, "Hannah Black", "Brazil", "Financial Analyst"),
    (9, "Ivy King", "India", "Technical Writer"),
    (10, "Jack Lee", "South Korea", "Sales Representative"),
    (11, "Karen Hall", "Mexico", "Customer Support"),
    (12, "Liam Scott", "Spain", "Business Analyst"),
    (13, "Mia Adams", "Italy", "Legal Counsel"),
    (14, "Noah Baker", "Netherlands", "Research Scientist"),
    (15, "Olivia Wright", "Sweden", "Project Coordinator"),
    (16, "Peter Clark", "Ireland", "Network Engineer"),
    (17, "Quinn Lewis", "New Zealand", "Content Creator"),
    (18, "Rachel Young", "Singapore", "Operations Manager"),
    (19, "Sam Harris", "Argentina", "Data Engineer"),
    (20, "Tina Walker", "Switzerland", "Accountant"),
    (21, "Uma Garcia", "Portugal", "QA Engineer"),
    (22, "Victor Rodriguez", "Chile", "Cloud Architect"),
    (23, "Wendy Martinez", "Belgium", "Scrum Master"),
    (24, "Xavier Perez", "Norway", "Cybersecurity Analyst"),
    (25, "Yara Sanchez", "Denmark", "Product Designer"),
    (26, "Zack Kim", "Finland", "Machine Learning Engineer"),
    (27, "Anna Chen", "China", "Software Engineer"),
    (28, "Ben Taylor", "Russia", "Data Scientist"),
    (29, "Chloe Moore", "Egypt", "Marketing Specialist"),
    (30, "David Wilson", "South Africa", "Financial Analyst"),
    (31, "Sarah CEO", "USA", "CEO"),
    (32, "Mike CTO", "Canada", "CTO"),
    (33, "Lisa CFO", "UK", "CFO"),
    (34, "Tom COO", "Germany", "COO"),
    (35, "Emma CMO", "France", "CMO"),
    (36, "Alex VP Engineering", "Japan", "VP Engineering"),
    (37, "Jordan VP Sales", "Brazil", "VP Sales"),
    (38, "Casey VP Marketing", "India", "VP Marketing"),
    (39, "Riley Director IT", "South Korea", "Director IT"),
    (40, "Taylor Director HR", "Spain", "Director HR"),
];

/// The directory table served by the directory backend.
pub fn seed_directory() -> Vec<DirectoryRecord> {
    EMPLOYEES
        .iter()
        .map(|&(id, name, country, role)| DirectoryRecord::new(id, name, country, role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_contiguous() {
        let records = seed_directory();
        let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records.len());
        assert_eq!(ids, (1..=records.len() as u32).collect());
    }
}
