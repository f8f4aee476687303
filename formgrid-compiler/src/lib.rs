//! Schema-to-configuration compilation for FormGrid.
//!
//! `formgrid-compiler` is the pipeline head. It takes the schema trees
//! ingested by `formgrid-schema`, resolves each field's raw kind through the
//! built-in mapping and the plugin registry, compiles every field into a
//! renderer-ready column, and overlays an optional hand-authored base
//! configuration on the result.
//!
//! # Architecture
//!
//! - **Snapshot isolation**: each pass resolves against one registry
//!   snapshot; concurrent plugin changes only affect later passes
//! - **Fail fast on identity, degrade on kind**: a field without an
//!   identifier aborts the pass, while an unknown kind warns and passes
//!   through verbatim
//! - **Base wins**: hand-authored settings outrank compiled ones key by
//!   key; arrays replace wholesale
//!
//! ```
//! use std::sync::Arc;
//!
//! use formgrid_compiler::{PluginRegistry, SchemaCompiler};
//!
//! let compiler = SchemaCompiler::new(Arc::new(PluginRegistry::new()));
//! let config =
//!     compiler.compile_str(r#"{"field": "name", "label": "Name", "type": "input"}"#)?;
//! assert_eq!(config.len(), 1);
//! # Ok::<(), formgrid_compiler::CompileError>(())
//! ```

pub mod column;
pub mod compile;
pub mod error;
pub mod merge;
pub mod render_type;
pub mod resolver;

pub use column::{
    ColumnOptions, CompiledColumn, CompiledConfiguration, ComponentOptions, DictBinding,
    SearchOptions, AUTO_COLOR,
};
pub use compile::{compile_field, SchemaCompiler};
pub use error::{CompileError, Result};
pub use merge::{merge_column, merge_config, merge_value};
pub use render_type::{static_render_type, RenderType};
pub use resolver::{ResolutionOrigin, TypeResolver};

// Pipeline inputs, re-exported so most callers need only this crate.
pub use formgrid_plugins::{FieldPlugin, PluginRegistry, PluginStatus, RegistrySnapshot};
pub use formgrid_schema::{FieldDefinition, SelectOption};
