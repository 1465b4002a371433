//! Command surface — free-text, case-insensitive verbs parsed into a
//! `Command` value. Anything unrecognized becomes `UnknownCommand` with a
//! usage hint; the loop reports it and re-prompts.

use regex::Regex;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The full query text is kept — the criteria extractor works on it.
    Find(String),
    Save {
        positions: Vec<usize>,
        name: String,
    },
    Draft {
        target: DraftTarget,
        job_title: String,
        tone: Option<String>,
    },
    SetSubject {
        text: String,
        re_preview: bool,
    },
    SetBody {
        text: String,
        re_preview: bool,
    },
    Preview,
    Analytics,
    Quit,
}

/// Who a draft command addresses: a saved shortlist by name, or positions
/// straight from the current result list.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftTarget {
    Shortlist(String),
    Positions(Vec<usize>),
}

pub fn parse(input: &str) -> Result<Command, AppError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if lower == "quit" || lower == "exit" {
        return Ok(Command::Quit);
    }
    if lower == "preview" || lower == "re-preview" {
        return Ok(Command::Preview);
    }
    if lower.starts_with("find") || lower.starts_with("search") || lower.starts_with("look for") {
        return Ok(Command::Find(trimmed.to_string()));
    }
    if lower.starts_with("save") {
        return parse_save(trimmed);
    }
    if lower.starts_with("draft") || lower.starts_with("email") {
        return parse_draft(trimmed);
    }
    if lower.starts_with("change") || lower.starts_with("edit") || lower.starts_with("set") {
        return parse_edit(trimmed, &lower);
    }
    // Checked after the verb-prefixed commands so a find query mentioning
    // analytics skills is still a find.
    if lower.contains("analytics") {
        return Ok(Command::Analytics);
    }

    Err(AppError::UnknownCommand(
        "Try: Find React interns in Casablanca, 0-2 years, available this month".to_string(),
    ))
}

/// `save #1 #3 as "FE-Intern-A"`
fn parse_save(input: &str) -> Result<Command, AppError> {
    let name_re = Regex::new(r#"(?i)as\s+"([^"]+)""#).expect("valid regex");
    let pos_re = Regex::new(r"#(\d+)").expect("valid regex");

    let name = name_re.captures(input).map(|c| c[1].to_string());
    let positions: Vec<usize> = pos_re
        .captures_iter(input)
        .filter_map(|c| c[1].parse().ok())
        .collect();

    match (name, positions.is_empty()) {
        (Some(name), false) => Ok(Command::Save { positions, name }),
        _ => Err(AppError::UnknownCommand(
            r#"Usage: Save #1 #3 as "Shortlist-Name" (use # from the last find)"#.to_string(),
        )),
    }
}

/// `draft an outreach email for "FE-Intern-A" using job "Frontend Intern" in
/// friendly tone`, or `draft email for #1 #3 using job "Frontend Intern"` to
/// address result positions directly without saving a shortlist first.
fn parse_draft(input: &str) -> Result<Command, AppError> {
    let list_re = Regex::new(r#"(?i)for\s+"([^"]+)""#).expect("valid regex");
    let job_re = Regex::new(r#"(?i)job\s+"([^"]+)""#).expect("valid regex");
    let tone_re = Regex::new(r"(?i)in\s+([a-z]+)\s+tone").expect("valid regex");
    let pos_re = Regex::new(r"#(\d+)").expect("valid regex");

    let target = if let Some(caps) = list_re.captures(input) {
        Some(DraftTarget::Shortlist(caps[1].to_string()))
    } else {
        let positions: Vec<usize> = pos_re
            .captures_iter(input)
            .filter_map(|c| c[1].parse().ok())
            .collect();
        (!positions.is_empty()).then_some(DraftTarget::Positions(positions))
    };
    let job_title = job_re.captures(input).map(|c| c[1].to_string());

    match (target, job_title) {
        (Some(target), Some(job_title)) => Ok(Command::Draft {
            target,
            job_title,
            tone: tone_re.captures(input).map(|c| c[1].to_lowercase()),
        }),
        _ => Err(AppError::UnknownCommand(
            r#"Usage: Draft an outreach email for "Shortlist" (or for #1 #3) using job "Job Title" in friendly tone"#
                .to_string(),
        )),
    }
}

/// `change the subject to "..."` / `change the body to "..."`, with an
/// optional `and re-preview` suffix.
fn parse_edit(input: &str, lower: &str) -> Result<Command, AppError> {
    let subject_re = Regex::new(r#"(?i)subject\s+to\s+"([^"]+)""#).expect("valid regex");
    let body_re = Regex::new(r#"(?i)body\s+to\s+"([^"]+)""#).expect("valid regex");
    let re_preview = lower.contains("preview");

    if let Some(caps) = subject_re.captures(input) {
        return Ok(Command::SetSubject {
            text: caps[1].to_string(),
            re_preview,
        });
    }
    if let Some(caps) = body_re.captures(input) {
        return Ok(Command::SetBody {
            text: caps[1].to_string(),
            re_preview,
        });
    }
    Err(AppError::UnknownCommand(
        r#"Usage: Change the subject to "New subject" and re-preview"#.to_string(),
    ))
}
