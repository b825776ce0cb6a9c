// Domain models for zone detection output

pub mod zone;

// Re-export key types for convenience
pub use zone::{Direction, Zone, ZoneKind};
