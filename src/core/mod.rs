pub mod advance;
pub mod allocator;
pub mod analytics;
pub mod green;
pub mod history;
pub mod import;
pub mod log;
pub mod normalizer;
pub mod report;
pub mod rotation;
pub mod rules;
