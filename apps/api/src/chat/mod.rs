// Canned chat assistant: trigger lookup plus the session-facing handlers.

pub mod handlers;
pub mod responder;

pub use responder::{quick_replies, respond};
