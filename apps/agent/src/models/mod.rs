pub mod candidate;
pub mod job;
pub mod shortlist;

pub use candidate::Candidate;
pub use job::Job;
pub use shortlist::Shortlist;
