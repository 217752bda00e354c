//! Command-line surface: clap definitions and the workflow they drive

pub mod args;
pub mod orchestration;

pub use args::{Args, Command, NextCommand};
pub use orchestration::{run_next, NextArgs, NextVersion};
