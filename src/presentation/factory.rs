//! Dispatcher Factory
//!
//! Builds the store and the services from configuration.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::Services;
use crate::config::{BackendKind, Config};
use crate::domain::ports::StoreResult;
use crate::infrastructure::{Store, SystemClock, TomlBackend};

use super::dispatcher::Dispatcher;

/// Type alias for the dispatcher the binary runs
pub type ConcreteDispatcher = Dispatcher<Store>;

/// Open the store the configuration points at
pub fn open_store(config: &Config) -> StoreResult<Store> {
    match config.store.backend {
        BackendKind::Memory => Ok(Store::in_memory()),
        BackendKind::Toml => Store::open(Box::new(TomlBackend::new(config.store_path()))),
    }
}

/// Services reading the system clock
pub fn create_services() -> Services {
    Services::new(Arc::new(SystemClock::new()))
}

/// Create a dispatcher with all dependencies wired up
pub fn create_dispatcher(store: Store) -> ConcreteDispatcher {
    Dispatcher::new(store, create_services())
}
