pub mod format;
pub mod notifier;
pub mod signal_cache;

pub use notifier::Notifier;
pub use signal_cache::SignalCache;
