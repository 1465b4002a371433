//! Scoring Engine — fixed, deterministic, additive match score for a
//! (candidate, criteria) pair, plus the total ranking order.
//!
//! Rule: +2 per required skill possessed, +1 exact location match, +1
//! experience within the specified range, +1 availability inside the
//! window. The experience point is conditioned on a *specified* range — an
//! unconstrained criteria never awards it.

use std::cmp::Ordering;

use crate::models::Candidate;
use crate::query::criteria::Criteria;

/// Per-criterion contribution breakdown, kept for transparency in result
/// listings ("Why:" lines).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Skills from the criteria the candidate actually has (canonical casing).
    pub matched_skills: Vec<String>,
    pub skill_points: u32,
    pub location_point: u32,
    pub experience_point: u32,
    pub availability_point: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.skill_points + self.location_point + self.experience_point + self.availability_point
    }

    /// Human-readable reasons line, e.g.
    /// `React+CSS match (+4), Casablanca (+1), 1y fits (+1), available in window (+1)`.
    pub fn reasons(&self, candidate: &Candidate, criteria: &Criteria) -> String {
        let mut parts = Vec::new();
        if self.skill_points > 0 {
            parts.push(format!(
                "{} match (+{})",
                self.matched_skills.join("+"),
                self.skill_points
            ));
        }
        if self.location_point > 0 {
            if let Some(loc) = &criteria.location {
                parts.push(format!("{loc} (+1)"));
            }
        }
        if self.experience_point > 0 {
            parts.push(format!("{}y fits (+1)", candidate.experience_years));
        }
        if self.availability_point > 0 {
            parts.push("available in window (+1)".to_string());
        }
        if parts.is_empty() {
            "no criteria matched".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// A candidate paired with its computed score. Transient — recomputed per
/// query, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Scores a single candidate against the criteria.
pub fn score_candidate(candidate: &Candidate, criteria: &Criteria) -> ScoredCandidate {
    let mut breakdown = ScoreBreakdown::default();

    // +2 per required skill present. The criteria skill list is already
    // deduplicated, so duplicates cannot double-count.
    for skill in &criteria.skills {
        if candidate.has_skill(skill) {
            breakdown.matched_skills.push(skill.clone());
            breakdown.skill_points += 2;
        }
    }

    // +1 exact location match (case-insensitive); absent criterion scores 0.
    if let Some(location) = &criteria.location {
        if candidate.location.eq_ignore_ascii_case(location) {
            breakdown.location_point = 1;
        }
    }

    // +1 only when a range was specified — the unconstrained default is a
    // neutral "always satisfied", not a free point.
    if let Some(range) = &criteria.experience {
        if range.contains(candidate.experience_years) {
            breakdown.experience_point = 1;
        }
    }

    // +1 availability within the window, inclusive of both bounds. The
    // default 45-day window counts: it has concrete bounds like any other.
    if criteria.window.contains(candidate.availability_date) {
        breakdown.availability_point = 1;
    }

    ScoredCandidate {
        candidate: candidate.clone(),
        score: breakdown.total(),
        breakdown,
    }
}

/// Ranks all candidates: score descending, ties broken by closeness of
/// experience to the requested range midpoint, then candidate id ascending.
/// Zero-score candidates are retained; the list is truncated to the
/// requested count when one was given.
pub fn rank(candidates: &[Candidate], criteria: &Criteria) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|c| score_candidate(c, criteria))
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| compare_midpoint_distance(a, b, criteria))
            .then_with(|| a.candidate.id.cmp(&b.candidate.id))
    });

    if let Some(limit) = criteria.limit {
        scored.truncate(limit);
    }
    scored
}

fn compare_midpoint_distance(
    a: &ScoredCandidate,
    b: &ScoredCandidate,
    criteria: &Criteria,
) -> Ordering {
    let Some(range) = &criteria.experience else {
        return Ordering::Equal;
    };
    let mid = range.midpoint();
    let da = (a.candidate.experience_years as f64 - mid).abs();
    let db = (b.candidate.experience_years as f64 - mid).abs();
    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
}
