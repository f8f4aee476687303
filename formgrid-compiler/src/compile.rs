//! Field compilation and the end-to-end compile pipeline.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use formgrid_plugins::PluginRegistry;
use formgrid_schema::{extract_fields, extract_fields_from_str, FieldDefinition};

use crate::column::{
    CompiledColumn, CompiledConfiguration, ComponentOptions, DictBinding, AUTO_COLOR,
};
use crate::error::{CompileError, Result};
use crate::merge::merge_config;
use crate::resolver::{ResolutionOrigin, TypeResolver};

/// Compile one field definition into its column descriptor.
///
/// Fails with [`CompileError::MissingFieldIdentifier`] when the definition
/// carries no identifier. An unknown kind is not an error: it passes through
/// with a warning, so one unrecognized control cannot take down a whole page
/// model.
pub fn compile_field(
    def: &FieldDefinition,
    resolver: &TypeResolver<'_>,
) -> Result<CompiledColumn> {
    let Some(identifier) = def.identifier() else {
        return Err(CompileError::MissingFieldIdentifier {
            label: def.label.clone(),
        });
    };

    let (render_type, origin) = resolver.resolve_with_origin(&def.kind);
    if origin == ResolutionOrigin::Passthrough {
        warn!(
            field = identifier,
            kind = %def.kind,
            "unknown field kind, passing through verbatim"
        );
    }

    let mut column = CompiledColumn::new()
        .with_title(def.label.clone())
        .with_render_type(render_type)
        .with_search_shown(true)
        .with_column_shown(true);

    // Inline options take precedence over a dictionary code when the schema
    // carries both.
    let dict = match def.options() {
        Some(options) => Some(DictBinding::Options(options)),
        None => def
            .dict_code()
            .map(|code| DictBinding::Code(code.to_string())),
    };
    if let Some(dict) = dict {
        column.dict = Some(dict);
        column.column.component = Some(ComponentOptions {
            color: Some(AUTO_COLOR.to_string()),
        });
    }

    Ok(column)
}

/// Compiles schema documents into renderer-ready grid configurations.
///
/// Holds a shared plugin registry handle and an optional hand-authored base
/// configuration overlaid on every result. Each pass resolves against one
/// registry snapshot taken up front, so registry mutations landing mid-pass
/// never produce a half-old, half-new configuration.
#[derive(Debug)]
pub struct SchemaCompiler {
    registry: Arc<PluginRegistry>,
    base: Option<CompiledConfiguration>,
}

impl SchemaCompiler {
    /// Create a compiler over a shared plugin registry.
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            registry,
            base: None,
        }
    }

    /// Overlay a hand-authored base configuration on every compile result.
    pub fn with_base(mut self, base: CompiledConfiguration) -> Self {
        self.base = Some(base);
        self
    }

    /// Compile a parsed schema document.
    pub fn compile(&self, schema: &Value) -> Result<CompiledConfiguration> {
        self.compile_definitions(extract_fields(schema))
    }

    /// Compile a serialized schema document.
    ///
    /// Blank input compiles like a schema with no fields; anything non-blank
    /// must parse as JSON.
    pub fn compile_str(&self, text: &str) -> Result<CompiledConfiguration> {
        let definitions = extract_fields_from_str(text)?;
        self.compile_definitions(definitions)
    }

    fn compile_definitions(
        &self,
        definitions: Vec<FieldDefinition>,
    ) -> Result<CompiledConfiguration> {
        let snapshot = self.registry.snapshot();
        let resolver = TypeResolver::new(&snapshot);

        let mut remote = CompiledConfiguration::new();
        for def in &definitions {
            let column = compile_field(def, &resolver)?;
            // Duplicate identifiers: the later definition wins the slot, the
            // column keeps its first position.
            remote.columns.insert(def.field.clone(), column);
        }
        debug!(
            definitions = definitions.len(),
            columns = remote.len(),
            plugins = snapshot.len(),
            "schema compiled"
        );

        Ok(match &self.base {
            Some(base) => merge_config(base, &remote),
            None => remote,
        })
    }
}
