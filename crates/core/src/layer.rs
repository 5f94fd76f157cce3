//! In-memory layered store
//!
//! `SettingsLayer` is the reference `SettingsSource`: a map of this
//! layer's own overrides over an optional parent layer. Effective reads
//! resolve own-then-parent; raw reads see only the own map.
//!
//! Merge rule: own override > parent effective value.

use std::collections::BTreeMap;

use crate::source::{SettingsScope, SettingsSource};
use crate::value::SettingValue;

/// One layer of the configuration stack.
#[derive(Debug, Clone, Default)]
pub struct SettingsLayer {
    values: BTreeMap<String, SettingValue>,
    parent: Option<Box<SettingsLayer>>,
}

impl SettingsLayer {
    /// An empty base layer with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A layer whose effective reads fall through to `parent`.
    pub fn over(parent: SettingsLayer) -> Self {
        Self {
            values: BTreeMap::new(),
            parent: Some(Box::new(parent)),
        }
    }

    /// A base layer seeded from a map of values.
    pub fn from_values(values: BTreeMap<String, SettingValue>) -> Self {
        Self {
            values,
            parent: None,
        }
    }

    /// Insert an override into this layer.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove this layer's override, if any.
    pub fn remove(&mut self, name: &str) -> Option<SettingValue> {
        self.values.remove(name)
    }

    /// This layer's own overrides, without the parent chain.
    pub fn own_values(&self) -> &BTreeMap<String, SettingValue> {
        &self.values
    }

    pub fn parent(&self) -> Option<&SettingsLayer> {
        self.parent.as_deref()
    }

    /// Number of overrides held by this layer itself.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsSource for SettingsLayer {
    fn get(&self, name: &str, scope: SettingsScope) -> Option<SettingValue> {
        let own = self.values.get(name).cloned();
        match scope {
            SettingsScope::Raw => own,
            SettingsScope::Effective => own.or_else(|| {
                self.parent
                    .as_ref()
                    .and_then(|p| p.get(name, SettingsScope::Effective))
            }),
        }
    }

    fn set(&mut self, name: &str, _scope: SettingsScope, value: Option<SettingValue>) {
        match value {
            Some(v) => {
                self.values.insert(name.to_string(), v);
            }
            None => {
                self.values.remove(name);
            }
        }
    }
}
