//! Theme Registry
//!
//! Binds display names to theme definitions. Built once, read-only after.
//! Lookup is exact string equality; an unknown name is an error and the
//! registry never substitutes a default. Picking a fallback is up to the
//! caller (see `edtheme-config`).

use crate::builtin::ThemeId;
use crate::error::ThemeError;
use crate::theme::ThemeDefinition;
use std::collections::HashMap;
use std::sync::Arc;

/// One display name bound to a definition
#[derive(Debug, Clone)]
pub struct ThemeRegistryEntry {
    name: String,
    definition: Arc<ThemeDefinition>,
    alias_of: Option<String>,
}

impl ThemeRegistryEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &Arc<ThemeDefinition> {
        &self.definition
    }

    /// The name this entry shares its definition with, when it is an alias
    pub fn alias_of(&self) -> Option<&str> {
        self.alias_of.as_deref()
    }
}

/// Immutable name -> theme registry
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    entries: Vec<ThemeRegistryEntry>,
    index: HashMap<String, usize>,
}

impl ThemeRegistry {
    pub fn builder() -> ThemeRegistryBuilder {
        ThemeRegistryBuilder::default()
    }

    /// Registry of all built-in themes, in declared order
    pub fn builtin() -> Result<Self, ThemeError> {
        let mut builder = Self::builder();
        for id in ThemeId::ALL {
            builder = match id.alias_of() {
                Some(target) => builder.alias(id.as_str(), target.as_str()),
                None => {
                    let definition = id.source().to_definition(id.as_str()).map_err(|errors| {
                        ThemeError::InvalidTheme {
                            name: id.as_str().to_string(),
                            errors,
                        }
                    })?;
                    builder.register(id.as_str(), definition)
                }
            };
        }
        builder.build()
    }

    /// Entries exactly as declared. Order is stable across calls.
    pub fn list(&self) -> &[ThemeRegistryEntry] {
        &self.entries
    }

    /// Definition bound to `name`
    pub fn resolve(&self, name: &str) -> Result<&Arc<ThemeDefinition>, ThemeError> {
        if name.is_empty() {
            return Err(ThemeError::EmptyName);
        }
        self.index
            .get(name)
            .map(|&i| &self.entries[i].definition)
            .ok_or_else(|| ThemeError::NotFound { name: name.to_string() })
    }

    /// Typed lookup for built-in ids
    pub fn resolve_id(&self, id: ThemeId) -> Result<&Arc<ThemeDefinition>, ThemeError> {
        self.resolve(id.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

enum Pending {
    Theme(ThemeDefinition),
    Alias(String),
}

/// Collects declarations; all checks happen in [`ThemeRegistryBuilder::build`]
#[derive(Default)]
pub struct ThemeRegistryBuilder {
    pending: Vec<(String, Pending)>,
}

impl ThemeRegistryBuilder {
    pub fn register(mut self, name: impl Into<String>, definition: ThemeDefinition) -> Self {
        self.pending.push((name.into(), Pending::Theme(definition)));
        self
    }

    /// Bind `name` to the same definition instance as `target`.
    /// `target` must be registered earlier and must not itself be an alias.
    pub fn alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.pending.push((name.into(), Pending::Alias(target.into())));
        self
    }

    pub fn build(self) -> Result<ThemeRegistry, ThemeError> {
        let mut entries: Vec<ThemeRegistryEntry> = Vec::with_capacity(self.pending.len());
        let mut index = HashMap::with_capacity(self.pending.len());

        for (name, pending) in self.pending {
            if name.is_empty() {
                return Err(ThemeError::EmptyName);
            }
            if index.contains_key(&name) {
                return Err(ThemeError::DuplicateName { name });
            }

            let entry = match pending {
                Pending::Theme(definition) => {
                    let errors = definition.validate(&name);
                    if !errors.is_empty() {
                        return Err(ThemeError::InvalidTheme { name, errors });
                    }
                    ThemeRegistryEntry {
                        name,
                        definition: Arc::new(definition),
                        alias_of: None,
                    }
                }
                Pending::Alias(target) => {
                    let source = index
                        .get(&target)
                        .map(|&i: &usize| &entries[i])
                        .filter(|e| e.alias_of.is_none());
                    let Some(source) = source else {
                        return Err(ThemeError::UnknownAliasTarget { alias: name, target });
                    };
                    ThemeRegistryEntry {
                        definition: Arc::clone(&source.definition),
                        name,
                        alias_of: Some(target),
                    }
                }
            };

            log::debug!(
                "registered theme '{}'{}",
                entry.name,
                entry.alias_of.as_deref().map(|t| format!(" (alias of '{t}')")).unwrap_or_default()
            );
            index.insert(entry.name.clone(), entries.len());
            entries.push(entry);
        }

        Ok(ThemeRegistry { entries, index })
    }
}
