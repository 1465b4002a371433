//! Analytics Reporter — read-only aggregate counts over the loaded data.

use std::collections::HashMap;

use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total_candidates: usize,
    pub total_jobs: usize,
    pub total_shortlists: usize,
    /// `None` when there are no candidates — not 0.0, there is no average.
    pub avg_experience: Option<f64>,
    /// skill → number of candidates possessing it, sorted by count
    /// descending then name ascending for a stable display order.
    pub skill_frequency: Vec<(String, usize)>,
}

pub fn report(store: &dyn DataStore) -> Report {
    let candidates = store.candidates();

    let avg_experience = if candidates.is_empty() {
        None
    } else {
        let total: u32 = candidates.iter().map(|c| c.experience_years).sum();
        Some(total as f64 / candidates.len() as f64)
    };

    // Count candidates per skill, case-insensitively, keeping the first
    // casing seen as the display name. Each candidate counts once per skill
    // even if their record lists it twice.
    let mut counts: HashMap<String, (String, usize)> = HashMap::new();
    for candidate in candidates {
        let mut seen: Vec<String> = Vec::new();
        for skill in &candidate.skills {
            let key = skill.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key.clone());
            counts
                .entry(key)
                .and_modify(|(_, n)| *n += 1)
                .or_insert((skill.clone(), 1));
        }
    }
    let mut skill_frequency: Vec<(String, usize)> = counts.into_values().collect();
    skill_frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Report {
        total_candidates: candidates.len(),
        total_jobs: store.jobs().len(),
        total_shortlists: store.shortlists().len(),
        avg_experience,
        skill_frequency,
    }
}

impl Report {
    pub fn render(&self) -> String {
        let avg = match self.avg_experience {
            Some(avg) => format!("{avg:.1}y"),
            None => "n/a".to_string(),
        };
        let skills = if self.skill_frequency.is_empty() {
            "none".to_string()
        } else {
            self.skill_frequency
                .iter()
                .map(|(skill, count)| format!("{skill}({count})"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "Candidates: {} | Jobs: {} | Shortlists: {}\nAverage experience: {avg}\nSkills: {skills}",
            self.total_candidates, self.total_jobs, self.total_shortlists
        )
    }
}
