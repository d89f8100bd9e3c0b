pub mod arrangement;
pub mod error;
pub mod layout;
pub mod progress;
pub mod session;
pub mod shuffle;

pub use arrangement::Arrangement;
pub use error::PuzzleError;
pub use layout::{GridSpec, Rect, SourceImage};
pub use progress::ProgressStore;
pub use session::{puzzle_key, BlankPosition, MoveResult, PuzzleSession};
pub use shuffle::{ShuffleConfig, Shuffler};
