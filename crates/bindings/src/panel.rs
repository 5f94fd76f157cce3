//! Settings panel
//!
//! Owns the bindings of one editing session. The host adds settings (or
//! pre-built bindings), lays out the rows, and drives bulk load/save at
//! dialog open and confirm. Panel and bindings are discarded together
//! when the session closes.

use std::sync::Arc;

use setform_core::{SettingsScope, SettingsSource};

use crate::binding::ControlBinding;
use crate::controls::Control;
use crate::error::BindingError;
use crate::setting::Setting;

#[derive(Default)]
pub struct SettingsPanel {
    bindings: Vec<Box<dyn ControlBinding>>,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting; it contributes one row through its own binding.
    pub fn add(&mut self, setting: Arc<dyn Setting>) {
        self.bindings.push(setting.create_binding());
    }

    /// Add a pre-built binding, e.g. one wrapping an injected control.
    pub fn push(&mut self, binding: Box<dyn ControlBinding>) {
        self.bindings.push(binding);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The binding for `name`, if this panel holds it.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut (dyn ControlBinding + 'static)> {
        self.bindings
            .iter_mut()
            .find(|b| b.setting().name() == name)
            .map(|b| b.as_mut())
    }

    /// Rows for layout: the caption to render (if any) and the control to
    /// place next to it.
    pub fn rows(&mut self) -> impl Iterator<Item = (Option<String>, &mut dyn Control)> {
        self.bindings.iter_mut().map(|b| {
            let caption = b.caption().map(str::to_owned);
            (caption, b.control())
        })
    }

    /// Populate every row from `source`. Stops at the first failing row.
    pub fn load_all(
        &mut self,
        source: &dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError> {
        for binding in &mut self.bindings {
            binding.load(source, scope)?;
        }
        log::debug!("loaded {} settings rows ({:?})", self.bindings.len(), scope);
        Ok(())
    }

    /// Commit every row to `source`. Stops at the first failing row;
    /// earlier rows stay committed.
    pub fn save_all(
        &mut self,
        source: &mut dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError> {
        for binding in &mut self.bindings {
            binding.save(source, scope)?;
        }
        log::debug!("saved {} settings rows ({:?})", self.bindings.len(), scope);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{CheckBox, NumberBox};
    use crate::setting::{BoolSetting, NumberSetting};
    use setform_core::SettingsLayer;

    fn panel() -> SettingsPanel {
        let mut panel = SettingsPanel::new();
        panel.add(Arc::new(NumberSetting::new("editor.fontSize", "Font Size", 12.0)));
        panel.add(Arc::new(BoolSetting::new("editor.vimMode", "Vim mode", false)));
        panel
    }

    #[test]
    fn rows_carry_captions_except_for_self_labelled_controls() {
        let mut panel = panel();
        let rows: Vec<_> = panel.rows().map(|(caption, _)| caption).collect();
        assert_eq!(rows, vec![Some("Font Size".to_string()), None]);
    }

    #[test]
    fn load_all_populates_every_control() {
        let mut panel = panel();
        let mut source = SettingsLayer::new();
        source.insert("editor.fontSize", 14.0);
        source.insert("editor.vimMode", true);

        panel.load_all(&source, SettingsScope::Effective).unwrap();

        let font = panel.find_mut("editor.fontSize").unwrap();
        let font_box = font.control().as_any().downcast_ref::<NumberBox>().unwrap();
        assert_eq!(font_box.text().as_value().map(String::as_str), Some("14"));

        let vim = panel.find_mut("editor.vimMode").unwrap();
        let vim_box = vim.control().as_any().downcast_ref::<CheckBox>().unwrap();
        assert_eq!(vim_box.state().as_value(), Some(&true));
    }

    #[test]
    fn save_all_stops_at_the_first_failure() {
        let mut panel = panel();
        let mut source = SettingsLayer::new();

        panel
            .find_mut("editor.fontSize")
            .unwrap()
            .control()
            .as_any_mut()
            .downcast_mut::<NumberBox>()
            .unwrap()
            .set_text("garbage");
        panel
            .find_mut("editor.vimMode")
            .unwrap()
            .control()
            .as_any_mut()
            .downcast_mut::<CheckBox>()
            .unwrap()
            .set_checked(true);

        let err = panel.save_all(&mut source, SettingsScope::Raw).unwrap_err();
        assert!(matches!(err, BindingError::InvalidNumber { .. }));
        // The failing row blocked the rest
        assert_eq!(source.get("editor.vimMode", SettingsScope::Raw), None);
    }

    #[test]
    fn find_mut_misses_unknown_names() {
        let mut panel = panel();
        assert!(panel.find_mut("no.such.setting").is_none());
        assert_eq!(panel.len(), 2);
    }
}
