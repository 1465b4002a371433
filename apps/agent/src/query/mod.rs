pub mod criteria;
pub mod scoring;
