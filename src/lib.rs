pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod normalizer;
pub mod observability;
pub mod pipeline;
pub mod render;
pub mod severity;
pub mod source;
pub mod timestamp;
pub mod types;
