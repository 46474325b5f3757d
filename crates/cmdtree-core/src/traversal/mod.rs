pub mod walk;

pub use walk::{walk, walk_value};
