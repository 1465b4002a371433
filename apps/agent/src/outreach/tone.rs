//! Tone calibration — maps a requested tone (or a job's tone hint) to the
//! phrasing used in outreach emails. The set is enumerated but extensible;
//! an unrecognized tone falls back to `Neutral` rather than failing.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    Friendly,
    Formal,
    Concise,
    #[default]
    Neutral,
}

impl Tone {
    /// Parses a tone word case-insensitively. Unknown words map to `Neutral`.
    pub fn parse(raw: &str) -> Tone {
        match raw.trim().to_lowercase().as_str() {
            "friendly" => Tone::Friendly,
            "formal" => Tone::Formal,
            "concise" => Tone::Concise,
            _ => Tone::Neutral,
        }
    }

    /// Resolves the effective tone: an explicit request wins, then the job's
    /// tone hint, then neutral.
    pub fn resolve(requested: Option<&str>, job_hint: Option<&str>) -> Tone {
        match (requested, job_hint) {
            (Some(r), _) => Tone::parse(r),
            (None, Some(h)) => Tone::parse(h),
            (None, None) => Tone::Neutral,
        }
    }

    /// Sign-off block appended to every body.
    pub fn closing(&self) -> &'static str {
        match self {
            Tone::Friendly => "Cheers,\nThe Talent Team",
            Tone::Formal => "Kind regards,\nTalent Acquisition",
            Tone::Concise => "Thanks,\nTalent Team",
            Tone::Neutral => "Best regards,\nThe Talent Team",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Concise => "concise",
            Tone::Neutral => "neutral",
        };
        f.write_str(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tones_parse_case_insensitively() {
        assert_eq!(Tone::parse("Friendly"), Tone::Friendly);
        assert_eq!(Tone::parse("FORMAL"), Tone::Formal);
        assert_eq!(Tone::parse(" concise "), Tone::Concise);
    }

    #[test]
    fn test_unrecognized_tone_falls_back_to_neutral() {
        assert_eq!(Tone::parse("sarcastic"), Tone::Neutral);
        assert_eq!(Tone::parse(""), Tone::Neutral);
    }

    #[test]
    fn test_resolve_prefers_explicit_request_over_job_hint() {
        assert_eq!(Tone::resolve(Some("formal"), Some("friendly")), Tone::Formal);
        assert_eq!(Tone::resolve(None, Some("friendly")), Tone::Friendly);
        assert_eq!(Tone::resolve(None, None), Tone::Neutral);
    }

    #[test]
    fn test_each_tone_has_a_distinct_closing() {
        let closings = [
            Tone::Friendly.closing(),
            Tone::Formal.closing(),
            Tone::Concise.closing(),
            Tone::Neutral.closing(),
        ];
        for (i, a) in closings.iter().enumerate() {
            for b in &closings[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
