//! Outreach email generation: tone calibration, subject/body templating,
//! and the draft-session state machine.

pub mod draft;
pub mod template;
pub mod tone;

pub use draft::{DraftState, EmailDraft};
pub use tone::Tone;
