//! Application layer: the service orchestrating validation and scoring.

pub mod assessment;

pub use assessment::AssessmentService;
