//! Infrastructure layer - Storage, time, ids and workspace I/O

pub mod clock;
pub mod config;
pub mod ids;
pub mod store;
pub mod workspace;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use ids::{IdGenerator, RandomIdGenerator};
pub use store::{FileStore, MemoryStore, PostStore, STORAGE_KEY};
pub use workspace::Workspace;
