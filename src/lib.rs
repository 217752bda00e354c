pub mod cli;
pub mod code;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod source;
pub mod transform;
pub mod ui;

pub use error::{NextSemverError, Result};
