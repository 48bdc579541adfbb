pub mod client;
pub mod export;
pub mod init;
pub mod link;
