pub mod entities;
pub mod fallback;
pub mod pipeline;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod sort;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use sort::{SortMode, sort_recipes};
pub use value_objects::*;
