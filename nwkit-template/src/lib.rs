//! # nwkit-template
//!
//! Tera-rendered project skeleton and the staged materializer that moves it
//! into place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use nwkit_core::ProjectDescriptor;
//! use nwkit_template::{Materializer, SkeletonEngine};
//!
//! fn scaffold(target: &Path, descriptor: &ProjectDescriptor) {
//!     if let Ok(engine) = SkeletonEngine::embedded() {
//!         let _ = Materializer::new(engine).materialize(target, descriptor);
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod materialize;

pub use context::TemplateContext;
pub use engine::{RenderedFile, SkeletonEngine};
pub use error::TemplateError;
pub use materialize::{Materializer, StagedTree};
