//! vocab-core — Word list store, definition resolver, and quiz engine.
//!
//! This crate defines the data model, the definition source trait, and the
//! list/resolve/quiz logic that the vocab CLI builds on.

pub mod error;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod resolver;
pub mod store;
pub mod traits;

pub use error::{SourceError, VocabError};
pub use model::{Definition, DefinitionKind, MeaningGroup};
pub use resolver::{NoopReporter, ResolveReporter, Resolver};
pub use store::ListStore;
