pub mod capabilities;
pub mod types;
pub mod visitor;
