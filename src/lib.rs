pub mod cli;
pub mod config;
pub mod init;
pub mod list;
pub mod logging;
pub mod reporter;
pub mod resolve;
pub mod show;
