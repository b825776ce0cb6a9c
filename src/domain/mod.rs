// Domain types and value objects
pub mod bar_store;
pub mod candle;

// Re-export commonly used types
pub use bar_store::{BarStore, BarUpdate};
pub use candle::Bar;
