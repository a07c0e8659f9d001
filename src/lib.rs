pub mod config;
pub mod conversation;
pub mod error;
pub mod responder;
pub mod server;

pub use error::{Error, Result};
