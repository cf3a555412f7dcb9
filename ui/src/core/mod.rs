pub mod chat;
pub mod platform;
pub mod session;
pub mod timing;
