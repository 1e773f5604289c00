pub mod error;
pub mod ids;
pub mod notebook;
pub mod preprocess;
pub mod storage;
pub mod study;

pub use error::StorageError;
pub use ids::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidIds, materialize};
pub use notebook::NotebookStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use study::StudySequencer;
