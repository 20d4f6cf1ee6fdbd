pub mod coach;
pub mod problem;
pub mod scoring;
pub mod selector;
