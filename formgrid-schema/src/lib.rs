//! Schema tree ingestion for FormGrid.
//!
//! `formgrid-schema` turns the arbitrary nested form descriptions produced
//! by an external form designer into an ordered sequence of
//! [`FieldDefinition`]s. It owns no rendering, transport, or persistence
//! concerns: input arrives as a `serde_json::Value` (or a serialized JSON
//! string) and extraction is a pure tree walk.
//!
//! # Architecture
//!
//! - **Opaque input**: no fixed schema shape is assumed; any object carrying
//!   the reserved `field` key is a field definition
//! - **Pre-order discovery**: a field is reported before the fields nested
//!   inside it, and matching never stops the descent
//! - **Lenient by contract**: malformed corners of a node degrade to empty
//!   defaults; only an unparseable document is an error

pub mod error;
pub mod extract;
pub mod types;

pub use error::{Result, SchemaError};
pub use extract::{extract_fields, extract_fields_from_str};
pub use types::{FieldDefinition, SelectOption, FIELD_KEY};
