pub mod build;
pub mod init;
pub mod preview;
pub mod schedule;
pub mod validate;
