pub mod message;
pub mod movie;
pub mod user;
