// src/utils/mod.rs
// ============================================================================
// UNLOCKFI UTILITIES MODULE
// ============================================================================
// 1. Logging setup
// 2. JSON snapshot serialization
// 3. Key-value persistence of the configuration
// ============================================================================

pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig, LoggingError};
pub use serialization::{JsonSnapshot, SerializeError};
pub use storage::{load_snapshot, save_snapshot, FileStore, KeyValueStore, MemoryStore, StorageError};

pub mod logging;
pub mod serialization;
pub mod storage;
