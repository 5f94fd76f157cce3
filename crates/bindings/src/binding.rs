//! The generic control binding
//!
//! [`ControlBinding`] is the host-facing contract for one settings row;
//! [`SettingBinding`] is the single adapter implementing it for every
//! setting kind. The adapter owns the skeleton - lazy one-shot control
//! construction, caching, dispatch to the kind's typed hooks - so a kind
//! only supplies `create_control`/`load_control`/`save_control`.

use std::sync::Arc;

use setform_core::{SettingsScope, SettingsSource};

use crate::controls::Control;
use crate::error::BindingError;
use crate::setting::{EditableSetting, Setting};

/// Host-facing contract for one settings row.
///
/// The host obtains the control for layout, then drives load/save at the
/// points it owns (dialog open, OK click). The control is owned by the
/// binding: the host may render and reparent it, but must not construct
/// or destroy it out of band.
pub trait ControlBinding {
    /// The editor control, constructed on first call and cached for the
    /// binding's lifetime. Repeated calls return the identical instance.
    fn control(&mut self) -> &mut dyn Control;

    /// Populate the control from `source`. An absent raw-scope value
    /// shows as inherited, not an error.
    fn load(
        &mut self,
        source: &dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError>;

    /// Commit the control's current value to `source`.
    fn save(
        &mut self,
        source: &mut dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError>;

    /// Label for the row hosting this control; None when the control
    /// renders its own.
    fn caption(&self) -> Option<&str>;

    /// The bound setting.
    fn setting(&self) -> &dyn Setting;
}

/// The one generic adapter implementing [`ControlBinding`] for any
/// [`EditableSetting`].
pub struct SettingBinding<E: EditableSetting> {
    setting: Arc<E>,
    control: Option<E::Control>,
}

impl<E: EditableSetting> SettingBinding<E> {
    /// A binding that constructs its control on first access.
    pub fn new(setting: Arc<E>) -> Self {
        Self {
            setting,
            control: None,
        }
    }

    /// A binding around a pre-supplied control (a shared or customized
    /// widget); `create_control` will never run.
    pub fn with_control(setting: Arc<E>, control: E::Control) -> Self {
        Self {
            setting,
            control: Some(control),
        }
    }

    /// Typed access to the lazily-constructed control.
    pub fn control_mut(&mut self) -> &mut E::Control {
        let Self { setting, control } = self;
        control.get_or_insert_with(|| setting.create_control())
    }
}

impl<E: EditableSetting> ControlBinding for SettingBinding<E> {
    fn control(&mut self) -> &mut dyn Control {
        self.control_mut()
    }

    fn load(
        &mut self,
        source: &dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError> {
        let Self { setting, control } = self;
        let control = control.get_or_insert_with(|| setting.create_control());
        setting.load_control(source, scope, control)
    }

    fn save(
        &mut self,
        source: &mut dyn SettingsSource,
        scope: SettingsScope,
    ) -> Result<(), BindingError> {
        let Self { setting, control } = self;
        let control = control.get_or_insert_with(|| setting.create_control());
        setting.save_control(control, source, scope)
    }

    fn caption(&self) -> Option<&str> {
        self.setting.row_caption()
    }

    fn setting(&self) -> &dyn Setting {
        &*self.setting
    }
}
