// Responsive image variant generator library

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod variants;
