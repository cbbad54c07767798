pub mod auth;
pub mod token_ack;
