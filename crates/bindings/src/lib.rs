//! Control bindings for a settings editor
//!
//! This crate connects application settings to editable controls:
//! - `Setting`: identity + caption for one configuration value
//! - `ControlBinding`: per-setting adapter the host dialog drives
//! - `SettingBinding`: the one generic adapter behind every kind
//! - `SettingsPanel`: the bindings of one editing session
//!
//! Key design decisions:
//! - One control per binding, created on first access and never replaced
//! - Setting kinds supply typed hooks; the adapter owns the skeleton
//! - Absent raw-scope values display as inherited, never as errors

pub mod binding;
pub mod controls;
pub mod error;
pub mod panel;
pub mod setting;

pub use binding::{ControlBinding, SettingBinding};
pub use controls::{CheckBox, Control, ControlValue, DropDown, NumberBox, TextBox};
pub use error::BindingError;
pub use panel::SettingsPanel;
pub use setting::{
    BoolSetting, ChoiceSetting, EditableSetting, NumberSetting, Setting, SettingInfo, TextSetting,
};
