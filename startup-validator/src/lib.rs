// Configuration loading
pub mod config;

// Completion service client
pub mod client;

// Six-step analysis workflow
pub mod analysis;

// Saved report handling
pub mod report;
