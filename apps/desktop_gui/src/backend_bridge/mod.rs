//! Backend worker: owns the tokio runtime and runs network commands on it.

pub mod commands;
pub mod runtime;
pub mod view;
