//! The store contract
//!
//! A settings editor talks to its backing store through `SettingsSource`,
//! one instance per configuration layer. The same key can be read in two
//! scopes: the fully resolved value, or only what this layer overrides.

use crate::value::SettingValue;

/// Which view of a settings source a read or write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsScope {
    /// The fully resolved value, inherited layers included.
    Effective,
    /// Only this layer's own override, which may be absent.
    Raw,
}

impl SettingsScope {
    pub fn is_effective(self) -> bool {
        matches!(self, SettingsScope::Effective)
    }
}

/// Abstract key-value store behind a settings editor.
///
/// Implementations represent one layer of a configuration stack and may
/// delegate effective reads to a parent layer.
pub trait SettingsSource {
    /// Read the value stored under `name`.
    ///
    /// Raw scope returns `None` when this layer holds no override of its
    /// own; effective scope returns `None` only when no layer holds the
    /// key at all.
    fn get(&self, name: &str, scope: SettingsScope) -> Option<SettingValue>;

    /// Write `value` under `name`, or clear this layer's override when
    /// `value` is `None`.
    ///
    /// Writes land in the receiving layer regardless of scope; the scope
    /// tells the store which view the editor was showing when it
    /// committed.
    fn set(&mut self, name: &str, scope: SettingsScope, value: Option<SettingValue>);
}
