//! CLI command implementations

pub mod export;
pub mod init;
pub mod masks;
pub mod validate;
