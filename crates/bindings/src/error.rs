use std::fmt;

/// Failure raised by the typed load/save hooks of a setting kind.
///
/// Absent raw-scope values are not errors; these cover genuine conversion
/// failures between a control's representation and the setting's value
/// type.
#[derive(Debug)]
pub enum BindingError {
    /// Number field text that doesn't parse.
    InvalidNumber { setting: String, text: String },
    /// A value that isn't in the choice list.
    UnknownChoice { setting: String, value: String },
    /// Stored value has the wrong type for the setting.
    TypeMismatch {
        setting: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { setting, text } => {
                write!(f, "setting '{setting}': cannot parse number '{text}'")
            }
            Self::UnknownChoice { setting, value } => {
                write!(f, "setting '{setting}': '{value}' is not one of the choices")
            }
            Self::TypeMismatch {
                setting,
                expected,
                found,
            } => {
                write!(f, "setting '{setting}': expected {expected} value, found {found}")
            }
        }
    }
}

impl std::error::Error for BindingError {}
