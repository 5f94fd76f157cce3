//! Headless editor controls
//!
//! These widgets hold displayed state only; a toolkit integration wraps
//! them (or supplies its own types through [`Control`]) for actual
//! rendering. Every control distinguishes a concrete displayed value from
//! the inherited/unset placeholder with [`ControlValue`].

use std::any::Any;

/// A control's displayed state.
///
/// This distinguishes between:
/// - `Inherited`: show the "inherited" placeholder; nothing to commit
/// - `Value(T)`: show this value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue<T> {
    /// Show the inherited/unset placeholder.
    Inherited,
    /// Show this value.
    Value(T),
}

impl<T> ControlValue<T> {
    /// Returns true if the control shows a concrete value.
    pub fn is_set(&self) -> bool {
        matches!(self, ControlValue::Value(_))
    }

    /// Returns true if the control shows the inherited placeholder.
    pub fn is_inherited(&self) -> bool {
        matches!(self, ControlValue::Inherited)
    }

    /// The shown value, or None when inherited.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            ControlValue::Value(v) => Some(v),
            ControlValue::Inherited => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            ControlValue::Value(v) => Some(v),
            ControlValue::Inherited => None,
        }
    }

    /// Resolves the shown state against a fallback value.
    pub fn resolve(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self {
            ControlValue::Value(v) => v.clone(),
            ControlValue::Inherited => fallback,
        }
    }
}

impl<T> Default for ControlValue<T> {
    fn default() -> Self {
        ControlValue::Inherited
    }
}

impl<T> From<Option<T>> for ControlValue<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => ControlValue::Value(v),
            None => ControlValue::Inherited,
        }
    }
}

/// Minimum contract a widget must satisfy to sit in a settings row.
///
/// The host only needs to move the control into its layout; typed access
/// goes through downcast. A real toolkit's widget type implements this the
/// same way the built-in headless ones do.
pub trait Control: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ============================================================================
// Built-in headless widgets
// ============================================================================

/// Check box that renders its own label text.
///
/// Raw-scope editing uses the third, indeterminate display for "no
/// override here".
#[derive(Debug, Clone, Default)]
pub struct CheckBox {
    label: String,
    state: ControlValue<bool>,
}

impl CheckBox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: ControlValue::Inherited,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> ControlValue<bool> {
        self.state.clone()
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.state = ControlValue::Value(checked);
    }

    /// Back to the indeterminate display.
    pub fn clear(&mut self) {
        self.state = ControlValue::Inherited;
    }
}

impl Control for CheckBox {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Single-line text entry.
#[derive(Debug, Clone, Default)]
pub struct TextBox {
    text: ControlValue<String>,
    masked: bool,
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Password-style entry: displays obscured, state is unaffected.
    pub fn masked() -> Self {
        Self {
            text: ControlValue::Inherited,
            masked: true,
        }
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn text(&self) -> &ControlValue<String> {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = ControlValue::Value(text.into());
    }

    /// Back to the inherited placeholder.
    pub fn clear(&mut self) {
        self.text = ControlValue::Inherited;
    }
}

impl Control for TextBox {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Free-text number entry; parsing happens when the binding saves.
#[derive(Debug, Clone, Default)]
pub struct NumberBox {
    text: ControlValue<String>,
}

impl NumberBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &ControlValue<String> {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = ControlValue::Value(text.into());
    }

    /// Back to the inherited placeholder.
    pub fn clear(&mut self) {
        self.text = ControlValue::Inherited;
    }
}

impl Control for NumberBox {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Drop-down over a fixed list of items.
#[derive(Debug, Clone, Default)]
pub struct DropDown {
    items: Vec<String>,
    selected: ControlValue<usize>,
}

impl DropDown {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            selected: ControlValue::Inherited,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> ControlValue<usize> {
        self.selected.clone()
    }

    /// The selected item's text, or None when nothing is selected.
    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .as_value()
            .and_then(|&i| self.items.get(i))
            .map(String::as_str)
    }

    /// Select by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = ControlValue::Value(index);
        }
    }

    /// Select the item matching `value`. Returns false when absent.
    pub fn select_item(&mut self, value: &str) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(i) => {
                self.selected = ControlValue::Value(i);
                true
            }
            None => false,
        }
    }

    /// Back to the no-selection display.
    pub fn clear(&mut self) {
        self.selected = ControlValue::Inherited;
    }
}

impl Control for DropDown {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_value_resolves_against_fallback() {
        assert_eq!(ControlValue::Value(14).resolve(12), 14);
        assert_eq!(ControlValue::<i32>::Inherited.resolve(12), 12);
        assert!(ControlValue::<bool>::default().is_inherited());
    }

    #[test]
    fn checkbox_roundtrip() {
        let mut cb = CheckBox::new("Vim mode");
        assert!(cb.state().is_inherited());

        cb.set_checked(true);
        assert_eq!(cb.state(), ControlValue::Value(true));

        cb.clear();
        assert!(cb.state().is_inherited());
        assert_eq!(cb.label(), "Vim mode");
    }

    #[test]
    fn dropdown_selection() {
        let mut dd = DropDown::new(vec!["auto".into(), "light".into(), "dark".into()]);
        assert_eq!(dd.selected_item(), None);

        assert!(dd.select_item("dark"));
        assert_eq!(dd.selected_item(), Some("dark"));
        assert_eq!(dd.selected(), ControlValue::Value(2));

        assert!(!dd.select_item("solarized"));
        // Failed selection leaves the current one alone
        assert_eq!(dd.selected_item(), Some("dark"));

        dd.select(99);
        assert_eq!(dd.selected_item(), Some("dark"));

        dd.clear();
        assert_eq!(dd.selected_item(), None);
    }

    #[test]
    fn controls_downcast_through_the_trait() {
        let mut tb = TextBox::new();
        tb.set_text("hello");

        let control: &mut dyn Control = &mut tb;
        let tb = control.as_any_mut().downcast_mut::<TextBox>().unwrap();
        assert_eq!(tb.text().as_value().map(String::as_str), Some("hello"));
        assert!(control.as_any().downcast_ref::<CheckBox>().is_none());
    }
}
