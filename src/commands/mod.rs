pub mod form;
pub mod init;
pub mod list;
pub mod search;
