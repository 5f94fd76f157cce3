// Settings model - values, scopes, layered sources

pub mod layer;
pub mod persistence;
pub mod source;
pub mod value;

pub use layer::SettingsLayer;
pub use persistence::{config_path, load_layer, save_layer};
pub use source::{SettingsScope, SettingsSource};
pub use value::SettingValue;
