pub mod advance;
pub mod config;
pub mod db;
pub mod export;
pub mod green;
pub mod import;
pub mod init;
pub mod log;
pub mod queue;
pub mod stats;
