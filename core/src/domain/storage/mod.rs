pub mod ports;

pub use ports::*;

/// Logical keys of the persisted collections.
pub mod keys {
    pub const PANTRY: &str = "pantry";
    pub const FAVORITES: &str = "favorites";
    pub const HISTORY: &str = "history";
}
