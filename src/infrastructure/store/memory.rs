//! Volatile backend: committed state lives only as long as the process

use super::{StorageBackend, Tables};
use crate::domain::ports::StoreResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryBackend;

impl MemoryBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> StoreResult<Tables> {
        Ok(Tables::new())
    }

    fn save(&self, _tables: &Tables) -> StoreResult<()> {
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
