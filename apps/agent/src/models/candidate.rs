use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A candidate record. Immutable once loaded; owned by the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub location: String,
    pub experience_years: u32,
    pub availability_date: NaiveDate,
}

impl Candidate {
    /// First name for greeting personalization — everything before the first space.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Case-insensitive skill possession check.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }

    /// One-line summary used in result listings.
    pub fn summary(&self) -> String {
        format!(
            "{} — {} — {}y — skills: {}",
            self.name,
            self.location,
            self.experience_years,
            self.skills.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amina() -> Candidate {
        Candidate {
            id: "c-001".to_string(),
            name: "Amina El Fassi".to_string(),
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            location: "Casablanca".to_string(),
            experience_years: 1,
            availability_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        }
    }

    #[test]
    fn test_candidate_wire_format_is_camel_case() {
        let json = r#"{
            "id": "c-001",
            "name": "Amina El Fassi",
            "skills": ["React", "TypeScript"],
            "location": "Casablanca",
            "experienceYears": 1,
            "availabilityDate": "2026-09-01"
        }"#;
        let parsed: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, amina());
    }

    #[test]
    fn test_first_name_is_leading_token() {
        assert_eq!(amina().first_name(), "Amina");
    }

    #[test]
    fn test_has_skill_ignores_case() {
        assert!(amina().has_skill("react"));
        assert!(!amina().has_skill("Python"));
    }

    #[test]
    fn test_summary_mentions_location_and_experience() {
        let line = amina().summary();
        assert!(line.contains("Casablanca"));
        assert!(line.contains("1y"));
    }
}
