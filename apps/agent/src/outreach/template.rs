//! Subject/body templating and the HTML preview rendering.
//!
//! Personalization policy: single-recipient shortlists greet the candidate
//! by first name and carry it in the subject; anything larger gets a
//! generic greeting.

use crate::models::{Candidate, Job};
use crate::outreach::tone::Tone;

/// Composes the initial subject and body for an outreach email.
pub fn compose(recipients: &[Candidate], job: &Job, tone: Tone) -> (String, String) {
    let (subject, greeting) = match recipients {
        [only] => (
            format!(
                "{}, quick chat about a {} opportunity?",
                only.first_name(),
                job.title
            ),
            format!("Hi {},", only.first_name()),
        ),
        _ => (
            format!("Quick chat about a {} opportunity?", job.title),
            "Hi there,".to_string(),
        ),
    };

    let team = job.location.as_deref().unwrap_or("our team");
    let mut lines = vec![
        greeting,
        String::new(),
        format!("I'm reaching out about a {} role in {}.", job.title, team),
    ];
    if let Some(snippet) = &job.jd_snippet {
        lines.push(snippet.clone());
    }
    if !job.required_skills.is_empty() {
        lines.push(format!("Nice-to-have: {}.", job.required_skills.join(", ")));
    }
    lines.push(String::new());
    lines.push(
        "Would you be open to a quick chat this week? I'd love to learn more about your interests."
            .to_string(),
    );
    lines.push(String::new());
    lines.push(tone.closing().to_string());

    (subject, lines.join("\n"))
}

/// Renders the plain-text body as a simple HTML card. Blank lines become
/// `<br/>`, everything else a paragraph.
pub fn render_html(subject: &str, body: &str) -> String {
    let paragraphs: String = body
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                "<br/>".to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8"/>
    <title>{subject}</title>
  </head>
  <body>
    <div class="card">
      <div class="subject">{subject}</div>
      <div class="meta">Preview only</div>
      <div class="content">{paragraphs}</div>
    </div>
  </body>
</html>"#
    )
}
