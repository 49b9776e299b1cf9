// src/core/mod.rs
//! Service plumbing: configuration, storage and file system access

pub mod config_manager;
pub mod database;
pub mod fs_ops;

pub use config_manager::ConfigManager;
pub use database::{Database, TestResultRecord, TestResultRepository};
pub use fs_ops::FsOps;
