//! Kind resolution against the built-in mapping and the plugin registry.

use formgrid_plugins::RegistrySnapshot;

use crate::render_type::{static_render_type, RenderType};

/// Which tier produced a resolved rendering tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOrigin {
    /// The built-in mapping.
    Static,
    /// A registered plugin claimed the kind.
    Plugin {
        /// Registry id of the claiming plugin.
        id: String,
    },
    /// No tier claimed the kind; it passed through unchanged.
    Passthrough,
}

/// Resolves raw kind strings for one compile pass.
///
/// Borrows a registry snapshot, so every resolution within a pass sees the
/// same plugin state no matter what concurrent registrations do.
#[derive(Debug)]
pub struct TypeResolver<'a> {
    snapshot: &'a RegistrySnapshot,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver over a registry snapshot.
    pub fn new(snapshot: &'a RegistrySnapshot) -> Self {
        Self { snapshot }
    }

    /// Resolve a raw kind to its rendering tag.
    pub fn resolve(&self, kind: &str) -> RenderType {
        self.resolve_with_origin(kind).0
    }

    /// Resolve a raw kind, reporting which tier produced the tag.
    ///
    /// Tiers in order: built-in mapping, active plugins (latest registration
    /// wins), identity passthrough. Passthrough keeps the raw kind verbatim
    /// so renderer-side handlers the compiler never heard of keep working.
    pub fn resolve_with_origin(&self, kind: &str) -> (RenderType, ResolutionOrigin) {
        if let Some(render_type) = static_render_type(kind) {
            return (render_type, ResolutionOrigin::Static);
        }
        if let Some(plugin) = self.snapshot.match_kind(kind) {
            return (
                RenderType::Custom(plugin.kind.clone()),
                ResolutionOrigin::Plugin {
                    id: plugin.id.clone(),
                },
            );
        }
        (
            RenderType::Custom(kind.to_string()),
            ResolutionOrigin::Passthrough,
        )
    }
}
