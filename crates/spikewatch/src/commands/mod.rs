pub mod detect;
pub mod history;
pub mod init;
pub mod version;
pub mod watchlist;
