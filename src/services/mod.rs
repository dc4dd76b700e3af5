pub mod dataset;
pub mod location;
