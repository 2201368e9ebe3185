pub mod fallback;
pub mod metrics;
pub mod parser;
pub mod plan_generation;
pub mod prompt;
