use leptos::*;

const STORAGE_KEY: &str = "theme";

/// Theme variants
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Convert to string for storage and data attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Toggle between light and dark
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Theme context containing the current theme and toggle function
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    /// Toggle between light and dark theme
    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggle());
    }
}

/// Read the persisted theme, defaulting to light
fn get_initial_theme() -> Theme {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        if let Ok(Some(saved)) = storage.get_item(STORAGE_KEY) {
            if let Some(theme) = Theme::from_str(&saved) {
                return theme;
            }
        }
    }

    Theme::Light
}

/// Persist the theme. Best effort: the UI stays usable without storage.
fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Apply theme to document root element
fn apply_theme(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Provide theme context to the application
/// Call this at the root of your app (e.g., in App component)
pub fn provide_theme_context() {
    let initial_theme = get_initial_theme();

    // Apply initial theme immediately
    apply_theme(initial_theme);

    let (theme, set_theme) = create_signal(initial_theme);

    // Effect to apply theme changes and save to localStorage
    create_effect(move |_| {
        let current_theme = theme.get();
        apply_theme(current_theme);
        save_theme(current_theme);
    });

    provide_context(ThemeContext { theme, set_theme });
}

/// Hook to access theme context
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_values_round_trip() {
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }
}
