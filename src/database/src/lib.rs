pub mod generators;
pub mod storage;

pub use generators::{PlayerGenerator, TeamGenerator};
pub use storage::{load_game, save_game, SaveGame, StorageError};
