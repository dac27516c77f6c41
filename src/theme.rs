#[cfg(any(feature = "ssr", feature = "hydrate"))]
use leptos::prelude::*;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
use codee::string::FromToStringCodec;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
use leptos_use::storage::use_local_storage;

/// localStorage key holding the theme preference. Persistence is
/// best-effort; losing it only costs the visitor one extra click.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    store: WriteSignal<String>,
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        self.store.set(next.as_str().to_string());
        apply(next);
    }
}

/// Set the `data-theme` attribute on the document element so the
/// stylesheet can switch palettes. No-op outside the browser.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
fn apply(theme: Theme) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = el.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub fn provide_theme() -> ThemeContext {
    let theme = RwSignal::new(Theme::default());
    let (stored, store, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);

    Effect::watch(
        || (),
        move |_, _, _| {
            if let Some(initial) = Theme::from_str(&stored.get_untracked()) {
                theme.set(initial);
            }
            apply(theme.get_untracked());
        },
        true,
    );

    let ctx = ThemeContext { theme, store };
    provide_context(ctx);
    ctx
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_two_values() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_round_trip_through_storage_string() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
