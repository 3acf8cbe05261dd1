//! Page wiring configuration: element ids, selectors, classes and delays.
//!
//! Every field has a default matching the stock page markup. A page can
//! override any subset with a JSON object in the `data-lantern-config`
//! attribute of `<body>`.

use crate::error::{UiError, UiResult};
use serde::Deserialize;

/// Attribute on `<body>` holding JSON overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-lantern-config";

/// Resolved page configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Theme section.
    pub theme: ThemeConfig,
    /// FAQ accordion section.
    pub faq: FaqConfig,
    /// Dropdown section.
    pub dropdown: DropdownConfig,
    /// Interaction demo section.
    pub demo: DemoConfig,
    /// Validation form section.
    pub form: FormConfig,
}

/// Theme toggle wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Id of the toggle button.
    pub toggle_id: String,
    /// Class applied to `<body>` in dark mode.
    pub dark_class: String,
    /// Preference store key.
    pub storage_key: String,
}

/// FAQ wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaqConfig {
    /// Selector matching every panel.
    pub item_selector: String,
    /// Selector of the clickable header inside a panel.
    pub question_selector: String,
    /// Selector of the disclosure icon inside a panel.
    pub icon_selector: String,
    /// Class marking the open panel.
    pub open_class: String,
}

/// Dropdown wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownConfig {
    /// Selector of the toggle control.
    pub toggle_selector: String,
    /// Selector of the menu.
    pub menu_selector: String,
    /// Class marking a visible menu.
    pub visible_class: String,
}

/// Interaction demo wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Id of the interactive box.
    pub box_id: String,
    /// Id of the key display line.
    pub key_display_id: String,
    /// Delay before the key display reverts, in milliseconds.
    pub key_revert_ms: u32,
}

/// Validation form wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Id of the `<form>`.
    pub form_id: String,
    /// Input ids in field order: name, email, password, phone.
    pub input_ids: [String; 4],
    /// Error message ids in field order.
    pub error_ids: [String; 4],
    /// Id of the success banner.
    pub success_id: String,
    /// Class for an invalid input.
    pub error_class: String,
    /// Class for a valid input.
    pub success_class: String,
    /// Class tagging an error message element.
    pub error_message_class: String,
    /// Delay before the form resets after a successful submit, in milliseconds.
    pub reset_delay_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "themeToggle".to_string(),
            dark_class: "dark-mode".to_string(),
            storage_key: "theme".to_string(),
        }
    }
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            item_selector: ".faq-item".to_string(),
            question_selector: ".faq-question".to_string(),
            icon_selector: ".faq-icon".to_string(),
            open_class: "active".to_string(),
        }
    }
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".dropdown-toggle".to_string(),
            menu_selector: ".dropdown-menu".to_string(),
            visible_class: "show".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            box_id: "interactiveBox".to_string(),
            key_display_id: "keypressDisplay".to_string(),
            key_revert_ms: 2_000,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "validationForm".to_string(),
            input_ids: ["name", "email", "password", "phone"].map(str::to_string),
            error_ids: ["nameError", "emailError", "passwordError", "phoneError"]
                .map(str::to_string),
            success_id: "successMessage".to_string(),
            error_class: "input-error".to_string(),
            success_class: "input-success".to_string(),
            error_message_class: "error-message".to_string(),
            reset_delay_ms: 2_000,
        }
    }
}

impl PageConfig {
    /// Parse overrides from the body attribute. `None` or blank input yields
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] when the JSON is malformed or names
    /// an unknown key.
    pub fn from_attribute(raw: Option<&str>) -> UiResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => {
                serde_json::from_str(json).map_err(|source| UiError::InvalidConfig { source })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_uses_page_defaults() -> UiResult<()> {
        let config = PageConfig::from_attribute(None)?;
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.form.input_ids[2], "password");
        assert_eq!(config.form.error_ids[3], "phoneError");
        assert_eq!(config.demo.key_revert_ms, 2_000);
        Ok(())
    }

    #[test]
    fn partial_override_keeps_other_defaults() -> UiResult<()> {
        let config = PageConfig::from_attribute(Some(
            r#"{"theme":{"storage_key":"site.theme"},"form":{"reset_delay_ms":500}}"#,
        ))?;
        assert_eq!(config.theme.storage_key, "site.theme");
        assert_eq!(config.theme.dark_class, "dark-mode");
        assert_eq!(config.form.reset_delay_ms, 500);
        assert_eq!(config.form.success_id, "successMessage");
        Ok(())
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = PageConfig::from_attribute(Some("{not json")).err();
        assert!(matches!(err, Some(UiError::InvalidConfig { .. })));
        let unknown = PageConfig::from_attribute(Some(r#"{"sidebar":{}}"#)).err();
        assert!(matches!(unknown, Some(UiError::InvalidConfig { .. })));
    }
}
