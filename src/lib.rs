pub mod config;
pub mod report;
pub mod server;
pub mod system;
