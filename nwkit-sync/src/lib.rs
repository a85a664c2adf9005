//! # nwkit-sync
//!
//! Runtime asset synchronization and the project lifecycle built on it.
//!
//! Call [`Lifecycle::create`] to scaffold a new project, or
//! [`lifecycle::update`] to refresh an existing project's `cordova.js` from
//! a [`RuntimeLibrary`].

pub mod error;
pub mod lifecycle;
pub mod runtime;
pub mod writer;

pub use error::{LifecycleError, SyncError};
pub use lifecycle::{CreateOutcome, Lifecycle};
pub use runtime::{DirRuntimeLibrary, EmbeddedRuntimeLibrary, InMemoryRuntimeLibrary, RuntimeLibrary};
pub use writer::{RuntimeSynchronizer, WriteResult};
