pub mod file;
pub mod logger;
