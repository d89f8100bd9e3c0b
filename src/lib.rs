pub mod catalog;
pub mod game;

pub use catalog::{Catalog, PuzzleMeta};
