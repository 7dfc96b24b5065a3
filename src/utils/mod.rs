pub mod geo;
pub mod logger;
