// Bar file input
pub mod bar_file;

// Re-export commonly used items
pub use bar_file::{load_bars, parse_bars};
