//! Light/dark theme resolution and toggle labelling.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier written to the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored identifier. Unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the dark class should be present on the page body.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label for the toggle control: the action a press would perform next.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

/// Resolve the effective theme at start-up.
///
/// A persisted `dark` wins; any other non-empty persisted value means light.
/// Without a persisted value the system colour-scheme preference decides.
#[must_use]
pub fn resolve(persisted: Option<&str>, prefers_dark: bool) -> ThemeMode {
    match persisted {
        Some(value) if !value.is_empty() => {
            ThemeMode::parse(value).unwrap_or(ThemeMode::Light)
        }
        _ if prefers_dark => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn persisted_value_beats_system_preference() {
        assert_eq!(resolve(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(resolve(Some("light"), true), ThemeMode::Light);
    }

    #[test]
    fn absent_value_falls_back_to_system_then_light() {
        assert_eq!(resolve(None, true), ThemeMode::Dark);
        assert_eq!(resolve(None, false), ThemeMode::Light);
        assert_eq!(resolve(Some(""), true), ThemeMode::Dark);
    }

    #[test]
    fn unknown_persisted_value_means_light() {
        assert_eq!(resolve(Some("solarized"), true), ThemeMode::Light);
    }

    #[test]
    fn label_names_the_next_action() {
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark Mode");
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light Mode");
        assert!(ThemeMode::Light.toggled().is_dark());
    }
}
