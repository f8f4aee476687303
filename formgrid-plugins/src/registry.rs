//! Process-scoped registry of field-type plugins.
//!
//! The registry is the one piece of shared mutable state in the compile
//! path: registration sources (dynamically loaded plugin bundles, admin
//! actions) mutate it concurrently while compile passes resolve against it.
//! All mutation goes through the lock; resolution goes through an owned
//! [`RegistrySnapshot`], so a pass in flight never observes a
//! partially-applied mutation.

use std::sync::RwLock;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{PluginError, Result};
use crate::types::{FieldPlugin, PluginStatus};

/// Registry of field-type plugins, keyed by plugin id.
///
/// Registration order is semantic: when several plugins handle the same
/// kind, the last registered active one wins resolution. Plugin upgrades
/// rely on that tie-break to register a replacement for a kind before the
/// old bundle is retired.
#[derive(Debug)]
pub struct PluginRegistry {
    plugins: RwLock<IndexMap<String, FieldPlugin>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(IndexMap::new()),
        }
    }

    /// Register a plugin.
    ///
    /// Fails with [`PluginError::DuplicateId`] when the id is already taken;
    /// registering a second plugin for the same *kind* under a fresh id is
    /// allowed.
    pub fn register(&self, plugin: FieldPlugin) -> Result<()> {
        let mut plugins = self.write();
        if plugins.contains_key(&plugin.id) {
            return Err(PluginError::DuplicateId {
                id: plugin.id.clone(),
            });
        }
        debug!(id = %plugin.id, kind = %plugin.kind, version = %plugin.version, "plugin registered");
        plugins.insert(plugin.id.clone(), plugin);
        Ok(())
    }

    /// Remove a plugin by id, returning its descriptor.
    ///
    /// Fails with [`PluginError::UnknownPlugin`] when nothing carries the
    /// id. Removal keeps the registration order of the remaining plugins.
    pub fn unregister(&self, id: &str) -> Result<FieldPlugin> {
        let mut plugins = self.write();
        let plugin = plugins
            .shift_remove(id)
            .ok_or_else(|| PluginError::UnknownPlugin { id: id.to_string() })?;
        debug!(id = %plugin.id, kind = %plugin.kind, "plugin unregistered");
        Ok(plugin)
    }

    /// Set the administrative status of a registered plugin.
    pub fn set_status(&self, id: &str, status: PluginStatus) -> Result<()> {
        let mut plugins = self.write();
        let plugin = plugins
            .get_mut(id)
            .ok_or_else(|| PluginError::UnknownPlugin { id: id.to_string() })?;
        plugin.status = Some(status);
        debug!(id = %id, ?status, "plugin status changed");
        Ok(())
    }

    /// Look up a plugin by id.
    pub fn get(&self, id: &str) -> Option<FieldPlugin> {
        self.read().get(id).cloned()
    }

    /// Whether a plugin with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All registered plugins, in registration order.
    pub fn plugins(&self) -> Vec<FieldPlugin> {
        self.read().values().cloned().collect()
    }

    /// Take an immutable copy of the current registry state.
    ///
    /// A compile pass takes exactly one snapshot and resolves every field
    /// against it, so concurrent registry mutation cannot tear a pass.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            plugins: self.read().clone(),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, IndexMap<String, FieldPlugin>> {
        self.plugins.read().expect("plugin registry lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, IndexMap<String, FieldPlugin>> {
        self.plugins.write().expect("plugin registry lock poisoned")
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable view of the registry taken at one instant.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    plugins: IndexMap<String, FieldPlugin>,
}

impl RegistrySnapshot {
    /// A snapshot with no plugins, for resolving without a registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The plugin that handles `kind`, if any.
    ///
    /// Scans in reverse registration order and skips plugins whose status is
    /// explicitly `Disabled`, so the last registered active plugin wins.
    pub fn match_kind(&self, kind: &str) -> Option<&FieldPlugin> {
        self.plugins
            .values()
            .rev()
            .find(|plugin| plugin.kind == kind && plugin.is_active())
    }

    /// Look up a plugin by id.
    pub fn get(&self, id: &str) -> Option<&FieldPlugin> {
        self.plugins.get(id)
    }

    /// Plugins in registration order.
    pub fn plugins(&self) -> impl Iterator<Item = &FieldPlugin> {
        self.plugins.values()
    }

    /// Number of plugins in the snapshot.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the snapshot holds no plugins.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
