pub mod page;
pub mod plan;
