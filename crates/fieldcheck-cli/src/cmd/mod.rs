pub mod config;
pub mod init;
pub mod resolve;
pub mod serve;
pub mod validate;
