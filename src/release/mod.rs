//! Upstream release discovery
//!
//! This module answers two questions: which GILDAS/PIIC releases exist on the
//! IRAM distribution server, and which image tags are already on Docker Hub.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Catalog   │◀────│  Registry   │
//! │ (listings)  │     │ (this run)  │     │   (tags)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │ Classifier  │
//!                     │(main/arch.) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Release lists and published tags, loaded once per run
//! - [`classifier`]: Main/archive lookup and archive build arguments
//! - [`error`]: Error types for fetch and classification
//! - [`ordering`]: Chronological sort key for release identifiers
//! - [`registry`]: Trait for listing published image tags
//! - [`registries`]: Docker Hub implementation
//! - [`source`]: Trait for listing upstream releases
//! - [`sources`]: IRAM directory listing implementation
//! - [`types`]: Package kinds and release trees

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod ordering;
pub mod registries;
pub mod registry;
pub mod source;
pub mod sources;
pub mod types;
