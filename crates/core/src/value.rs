//! Stored setting values
//!
//! `SettingValue` is the scalar that crosses the store boundary. It is
//! serialized untagged so a layer file reads as plain JSON:
//! `{"editor.fontSize": 12, "editor.vimMode": true}`.

use serde::{Deserialize, Serialize};

/// A scalar setting value as held by a settings source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SettingValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Variant name, used in type-mismatch reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Number(_) => "number",
            SettingValue::Text(_) => "text",
        }
    }

    /// Display form for an edit field.
    pub fn display(&self) -> String {
        match self {
            SettingValue::Bool(b) => b.to_string(),
            SettingValue::Number(n) => Self::format_number(*n),
            SettingValue::Text(s) => s.clone(),
        }
    }

    /// Integral numbers drop the decimal point; everything else prints as-is.
    pub fn format_number(n: f64) -> String {
        if n.fract() == 0.0 && n.abs() < 1e15 {
            format!("{}", n as i64)
        } else {
            format!("{}", n)
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<f64> for SettingValue {
    fn from(n: f64) -> Self {
        SettingValue::Number(n)
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        SettingValue::Number(n as f64)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_reads_as_plain_scalars() {
        assert_eq!(serde_json::to_string(&SettingValue::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&SettingValue::Number(12.0)).unwrap(), "12.0");
        assert_eq!(
            serde_json::to_string(&SettingValue::Text("auto".into())).unwrap(),
            "\"auto\""
        );

        let v: SettingValue = serde_json::from_str("14").unwrap();
        assert_eq!(v, SettingValue::Number(14.0));
        let v: SettingValue = serde_json::from_str("false").unwrap();
        assert_eq!(v, SettingValue::Bool(false));
        let v: SettingValue = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(v, SettingValue::Text("dark".into()));
    }

    #[test]
    fn number_display_drops_trailing_point() {
        assert_eq!(SettingValue::Number(12.0).display(), "12");
        assert_eq!(SettingValue::Number(12.5).display(), "12.5");
        assert_eq!(SettingValue::Number(-3.0).display(), "-3");
    }

    #[test]
    fn accessors_reject_other_variants() {
        let v = SettingValue::Text("12".into());
        assert!(v.as_number().is_none());
        assert!(v.as_bool().is_none());
        assert_eq!(v.as_text(), Some("12"));
        assert_eq!(v.kind(), "text");
    }
}
