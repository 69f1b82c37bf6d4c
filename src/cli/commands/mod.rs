mod command_result;
pub mod extract;
pub mod init;
pub mod status;
pub mod transfer;
pub mod translation;

pub use command_result::*;
