pub mod signal;
pub mod telegram;

pub use signal::*;
pub use telegram::*;
