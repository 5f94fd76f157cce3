//! Setting identities and the typed hook contract
//!
//! A setting kind implements [`EditableSetting`]: it names its control
//! type and supplies the three typed hooks (`create_control`,
//! `load_control`, `save_control`). Everything else - lazy construction,
//! caching, host-facing dispatch - lives in the generic adapter, and a
//! blanket impl makes every kind a [`Setting`] the catalog can hand out.
//!
//! The kinds here are the closed set this editor actually supports:
//! bool, text (optionally masked), number, and choice.

use std::sync::Arc;

use setform_core::{SettingValue, SettingsScope, SettingsSource};

use crate::binding::{ControlBinding, SettingBinding};
use crate::controls::{CheckBox, Control, ControlValue, DropDown, NumberBox, TextBox};
use crate::error::BindingError;

/// One named, captioned configuration item, as seen by the host.
pub trait Setting {
    /// Stable identifier, used as the key into the settings source.
    fn name(&self) -> &str;

    /// Human-readable display label.
    fn caption(&self) -> &str;

    /// A new binding bound to this setting.
    fn create_binding(self: Arc<Self>) -> Box<dyn ControlBinding>;
}

/// Identity shared by every setting kind.
#[derive(Debug, Clone)]
pub struct SettingInfo {
    name: String,
    caption: String,
}

impl SettingInfo {
    pub fn new(name: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caption: caption.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Typed hooks a setting kind supplies to the generic binding adapter.
///
/// Implementing this is all a new kind needs; [`SettingBinding`] fixes the
/// lazy-construction and dispatch skeleton around it.
pub trait EditableSetting: 'static {
    type Control: Control;

    fn info(&self) -> &SettingInfo;

    /// Construct the editor control. Called at most once per binding.
    fn create_control(&self) -> Self::Control;

    /// Read this setting from `source` in `scope` and show it in
    /// `control`. An absent raw-scope value shows as inherited.
    fn load_control(
        &self,
        source: &dyn SettingsSource,
        scope: SettingsScope,
        control: &mut Self::Control,
    ) -> Result<(), BindingError>;

    /// Commit the value shown in `control` to `source` in `scope`.
    fn save_control(
        &self,
        control: &Self::Control,
        source: &mut dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError>;

    /// Row label for the host layout; None when the control renders its
    /// own label.
    fn row_caption(&self) -> Option<&str> {
        Some(self.info().caption())
    }
}

impl<E: EditableSetting> Setting for E {
    fn name(&self) -> &str {
        self.info().name()
    }

    fn caption(&self) -> &str {
        self.info().caption()
    }

    fn create_binding(self: Arc<Self>) -> Box<dyn ControlBinding> {
        Box::new(SettingBinding::new(self))
    }
}

// ============================================================================
// Bool setting - check box
// ============================================================================

/// On/off setting edited with a check box.
#[derive(Debug, Clone)]
pub struct BoolSetting {
    info: SettingInfo,
    default: bool,
}

impl BoolSetting {
    pub fn new(name: impl Into<String>, caption: impl Into<String>, default: bool) -> Self {
        Self {
            info: SettingInfo::new(name, caption),
            default,
        }
    }

    pub fn default_value(&self) -> bool {
        self.default
    }
}

impl EditableSetting for BoolSetting {
    type Control = CheckBox;

    fn info(&self) -> &SettingInfo {
        &self.info
    }

    fn create_control(&self) -> CheckBox {
        CheckBox::new(self.info.caption())
    }

    fn load_control(
        &self,
        source: &dyn SettingsSource,
        scope: SettingsScope,
        control: &mut CheckBox,
    ) -> Result<(), BindingError> {
        match source.get(self.info.name(), scope) {
            Some(v) => {
                let checked = v.as_bool().ok_or_else(|| BindingError::TypeMismatch {
                    setting: self.info.name().to_string(),
                    expected: "bool",
                    found: v.kind(),
                })?;
                control.set_checked(checked);
            }
            None if scope.is_effective() => control.set_checked(self.default),
            None => control.clear(),
        }
        Ok(())
    }

    fn save_control(
        &self,
        control: &CheckBox,
        source: &mut dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError> {
        match control.state() {
            ControlValue::Value(checked) => {
                source.set(self.info.name(), scope, Some(SettingValue::Bool(checked)));
            }
            ControlValue::Inherited if !scope.is_effective() => {
                source.set(self.info.name(), scope, None);
            }
            // Indeterminate display in effective scope: nothing to commit
            ControlValue::Inherited => {}
        }
        Ok(())
    }

    /// The check box draws the caption itself.
    fn row_caption(&self) -> Option<&str> {
        None
    }
}

// ============================================================================
// Text setting - text box
// ============================================================================

/// Free-text setting edited with a text box.
#[derive(Debug, Clone)]
pub struct TextSetting {
    info: SettingInfo,
    default: String,
    masked: bool,
}

impl TextSetting {
    pub fn new(
        name: impl Into<String>,
        caption: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            info: SettingInfo::new(name, caption),
            default: default.into(),
            masked: false,
        }
    }

    /// Secret entry (passwords, tokens): the control displays obscured.
    pub fn masked(name: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            info: SettingInfo::new(name, caption),
            default: String::new(),
            masked: true,
        }
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }
}

impl EditableSetting for TextSetting {
    type Control = TextBox;

    fn info(&self) -> &SettingInfo {
        &self.info
    }

    fn create_control(&self) -> TextBox {
        if self.masked {
            TextBox::masked()
        } else {
            TextBox::new()
        }
    }

    fn load_control(
        &self,
        source: &dyn SettingsSource,
        scope: SettingsScope,
        control: &mut TextBox,
    ) -> Result<(), BindingError> {
        match source.get(self.info.name(), scope) {
            Some(v) => {
                let text = v.as_text().ok_or_else(|| BindingError::TypeMismatch {
                    setting: self.info.name().to_string(),
                    expected: "text",
                    found: v.kind(),
                })?;
                control.set_text(text);
            }
            None if scope.is_effective() => control.set_text(self.default.clone()),
            None => control.clear(),
        }
        Ok(())
    }

    fn save_control(
        &self,
        control: &TextBox,
        source: &mut dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError> {
        match control.text() {
            ControlValue::Value(text) => {
                source.set(
                    self.info.name(),
                    scope,
                    Some(SettingValue::Text(text.clone())),
                );
            }
            ControlValue::Inherited if !scope.is_effective() => {
                source.set(self.info.name(), scope, None);
            }
            ControlValue::Inherited => {}
        }
        Ok(())
    }
}

// ============================================================================
// Number setting - number box
// ============================================================================

/// Numeric setting edited as free text and parsed on save.
#[derive(Debug, Clone)]
pub struct NumberSetting {
    info: SettingInfo,
    default: f64,
}

impl NumberSetting {
    pub fn new(name: impl Into<String>, caption: impl Into<String>, default: f64) -> Self {
        Self {
            info: SettingInfo::new(name, caption),
            default,
        }
    }

    pub fn default_value(&self) -> f64 {
        self.default
    }
}

impl EditableSetting for NumberSetting {
    type Control = NumberBox;

    fn info(&self) -> &SettingInfo {
        &self.info
    }

    fn create_control(&self) -> NumberBox {
        NumberBox::new()
    }

    fn load_control(
        &self,
        source: &dyn SettingsSource,
        scope: SettingsScope,
        control: &mut NumberBox,
    ) -> Result<(), BindingError> {
        match source.get(self.info.name(), scope) {
            Some(v) => {
                let n = v.as_number().ok_or_else(|| BindingError::TypeMismatch {
                    setting: self.info.name().to_string(),
                    expected: "number",
                    found: v.kind(),
                })?;
                control.set_text(SettingValue::format_number(n));
            }
            None if scope.is_effective() => {
                control.set_text(SettingValue::format_number(self.default));
            }
            None => control.clear(),
        }
        Ok(())
    }

    fn save_control(
        &self,
        control: &NumberBox,
        source: &mut dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError> {
        match control.text() {
            ControlValue::Value(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    // A blanked-out field reads as unset
                    if !scope.is_effective() {
                        source.set(self.info.name(), scope, None);
                    }
                    return Ok(());
                }
                let n: f64 = trimmed.parse().map_err(|_| BindingError::InvalidNumber {
                    setting: self.info.name().to_string(),
                    text: text.clone(),
                })?;
                source.set(self.info.name(), scope, Some(SettingValue::Number(n)));
            }
            ControlValue::Inherited if !scope.is_effective() => {
                source.set(self.info.name(), scope, None);
            }
            ControlValue::Inherited => {}
        }
        Ok(())
    }
}

// ============================================================================
// Choice setting - drop-down
// ============================================================================

/// Setting restricted to a fixed list of text values.
#[derive(Debug, Clone)]
pub struct ChoiceSetting {
    info: SettingInfo,
    choices: Vec<String>,
    default: String,
}

impl ChoiceSetting {
    pub fn new(
        name: impl Into<String>,
        caption: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            info: SettingInfo::new(name, caption),
            choices: choices.into_iter().map(Into::into).collect(),
            default: default.into(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }
}

impl EditableSetting for ChoiceSetting {
    type Control = DropDown;

    fn info(&self) -> &SettingInfo {
        &self.info
    }

    fn create_control(&self) -> DropDown {
        DropDown::new(self.choices.clone())
    }

    fn load_control(
        &self,
        source: &dyn SettingsSource,
        scope: SettingsScope,
        control: &mut DropDown,
    ) -> Result<(), BindingError> {
        let stored = match source.get(self.info.name(), scope) {
            Some(v) => {
                let text = v.as_text().ok_or_else(|| BindingError::TypeMismatch {
                    setting: self.info.name().to_string(),
                    expected: "text",
                    found: v.kind(),
                })?;
                text.to_string()
            }
            None if scope.is_effective() => self.default.clone(),
            None => {
                control.clear();
                return Ok(());
            }
        };

        if !control.select_item(&stored) {
            return Err(BindingError::UnknownChoice {
                setting: self.info.name().to_string(),
                value: stored,
            });
        }
        Ok(())
    }

    fn save_control(
        &self,
        control: &DropDown,
        source: &mut dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError> {
        match control.selected_item() {
            Some(value) => {
                source.set(self.info.name(), scope, Some(SettingValue::Text(value.to_string())));
            }
            None if !scope.is_effective() => {
                source.set(self.info.name(), scope, None);
            }
            None => {}
        }
        Ok(())
    }
}
