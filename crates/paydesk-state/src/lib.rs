//! # paydesk-state: Platform Registry
//!
//! Holds the one piece of process-wide state the console has: which
//! operator platform is currently active.
//!
//! ## Components
//!
//! - **Store** (`store.rs`): the [`PlatformStore`] key-value seam, with an
//!   in-memory [`MemoryStore`] and a JSON-file [`FileStore`].
//!
//! - **Registry** (`registry.rs`): [`PlatformRegistry`], a two-tier lookup
//!   (cached field first, durable store second) over the active platform.
//!
//! - **Config** (`config.rs`): [`RegistryConfig`], the YAML-loadable
//!   description of the platform set, storage key, and state file.
//!
//! ## Failure Model
//!
//! Storage failures never leave this crate. A failed read is a cache miss;
//! a failed write loses durability across restarts but not the in-memory
//! value. Both are logged through `tracing`.

pub mod config;
pub mod registry;
pub mod store;

pub use config::{ConfigError, RegistryConfig};
pub use registry::{PlatformRegistry, STORAGE_KEY};
pub use store::{FileStore, MemoryStore, PlatformStore, StoreError};
