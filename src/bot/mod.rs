//! Telegram command channel.

pub mod commands;
pub mod handler;
pub mod poller;

pub use commands::Command;
pub use handler::QueryHandler;
pub use poller::CommandListener;
