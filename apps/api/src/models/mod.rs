pub mod chat;
pub mod listing;
pub mod profile;
