//! Field-type plugin registry for FormGrid.
//!
//! `formgrid-plugins` lets new field kinds be registered at runtime without
//! touching the compiler: a [`FieldPlugin`] descriptor names the kind it
//! handles, and the [`PluginRegistry`] owns the set of registered plugins
//! with explicit lifecycle operations (`register`, `unregister`,
//! `set_status`).
//!
//! # Architecture
//!
//! - **Process-scoped state**: one registry value, initialized empty,
//!   mutated only through its methods; nothing iterates or edits the map
//!   directly
//! - **Snapshot reads**: compile passes resolve against an owned
//!   [`RegistrySnapshot`], so concurrent registration never tears a pass
//! - **Last-registered-wins**: several plugins may handle the same kind;
//!   the most recently registered active one resolves

pub mod error;
pub mod registry;
pub mod types;

pub use error::{PluginError, Result};
pub use registry::{PluginRegistry, RegistrySnapshot};
pub use types::{FieldPlugin, PluginSchema, PluginStatus};
