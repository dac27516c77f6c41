#[cfg(any(feature = "ssr", feature = "hydrate"))]
use leptos::prelude::*;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
use codee::string::FromToStringCodec;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
use leptos_use::storage::use_local_storage;

/// localStorage key holding the selected language code.
pub const LANG_STORAGE_KEY: &str = "lang";

/// Supported languages. English is the default and the fallback table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    De,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
        }
    }

    /// Short label shown on the language toggle.
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::De => "DE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "de" | "de-de" | "de-at" | "de-ch" => Some(Lang::De),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::De,
            Lang::De => Lang::En,
        }
    }
}

/// Language state shared through context. Reading goes through the signal
/// so every consumer re-renders on a switch; explicit sets persist the
/// code back to localStorage.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
#[derive(Clone, Copy)]
pub struct I18n {
    lang: RwSignal<Lang>,
    store: WriteSignal<String>,
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl I18n {
    pub fn lang(&self) -> Lang {
        self.lang.get()
    }

    pub fn set(&self, next: Lang) {
        self.lang.set(next);
        self.store.set(next.code().to_string());
    }

    pub fn toggle(&self) {
        self.set(self.lang.get_untracked().toggled());
    }

    pub fn t(&self, key: &str) -> String {
        t(self.lang.get(), key)
    }
}

/// Install the language context. The stored preference is only readable
/// once the client has mounted, so the initial read happens in a watch;
/// SSR renders with the default language.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub fn provide_i18n() -> I18n {
    let lang = RwSignal::new(Lang::default());
    let (stored, store, _) = use_local_storage::<String, FromToStringCodec>(LANG_STORAGE_KEY);

    Effect::watch(
        || (),
        move |_, _, _| {
            if let Some(initial) = Lang::from_code(&stored.get_untracked()) {
                lang.set(initial);
            }
        },
        true,
    );

    let ctx = I18n { lang, store };
    provide_context(ctx);
    ctx
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

/// Translate a key for a given language. A key missing from the active
/// table falls back to English; a key missing everywhere is returned
/// verbatim.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Navigation
        (Lang::En, "nav.about") => "About".to_string(),
        (Lang::De, "nav.about") => "Über mich".to_string(),
        (Lang::En, "nav.skills") => "Skills".to_string(),
        (Lang::De, "nav.skills") => "Kenntnisse".to_string(),
        (Lang::En, "nav.certificates") => "Certificates".to_string(),
        (Lang::De, "nav.certificates") => "Zertifikate".to_string(),
        (Lang::En, "nav.projects") => "Projects".to_string(),
        (Lang::De, "nav.projects") => "Projekte".to_string(),
        (Lang::En, "nav.contact") => "Contact".to_string(),
        (Lang::De, "nav.contact") => "Kontakt".to_string(),
        (Lang::En, "nav.download_cv") => "Download CV".to_string(),
        (Lang::De, "nav.download_cv") => "Lebenslauf herunterladen".to_string(),
        (Lang::En, "theme.toggle") => "Toggle theme".to_string(),
        (Lang::De, "theme.toggle") => "Design wechseln".to_string(),
        (Lang::En, "language.toggle") => "Switch language".to_string(),
        (Lang::De, "language.toggle") => "Sprache wechseln".to_string(),

        // Hero
        (Lang::En, "hero.greeting") => "Hello, I am".to_string(),
        (Lang::De, "hero.greeting") => "Hallo, ich bin".to_string(),
        (Lang::En, "hero.available") => "Available".to_string(),
        (Lang::De, "hero.available") => "Verfügbar".to_string(),
        (Lang::En, "hero.cta") => "Learn more".to_string(),
        (Lang::De, "hero.cta") => "Mehr erfahren".to_string(),
        (Lang::En, "hero.download_cv") => "Download CV".to_string(),
        (Lang::De, "hero.download_cv") => "Lebenslauf herunterladen".to_string(),
        (Lang::En, "hero.scroll_down") => "Scroll down".to_string(),
        (Lang::De, "hero.scroll_down") => "Nach unten scrollen".to_string(),
        (Lang::En, "hero.model_loading") => "Loading 3D model...".to_string(),
        (Lang::De, "hero.model_loading") => "3D-Modell wird geladen...".to_string(),

        // About
        (Lang::En, "about.title") => "About me".to_string(),
        (Lang::De, "about.title") => "Über mich".to_string(),
        (Lang::En, "about.watch_video") => "Watch my introduction video".to_string(),
        (Lang::De, "about.watch_video") => "Mein Vorstellungsvideo ansehen".to_string(),

        // Skills
        (Lang::En, "skills.title") => "Skills & Technologies".to_string(),
        (Lang::De, "skills.title") => "Kenntnisse & Technologien".to_string(),
        (Lang::En, "skills.subtitle") => "Tools I work with every day".to_string(),
        (Lang::De, "skills.subtitle") => "Werkzeuge, mit denen ich täglich arbeite".to_string(),

        // Certificates
        (Lang::En, "certificates.title") => "Certificates".to_string(),
        (Lang::De, "certificates.title") => "Zertifikate".to_string(),
        (Lang::En, "certificates.subtitle") => {
            "Qualifications and completed trainings".to_string()
        }
        (Lang::De, "certificates.subtitle") => {
            "Qualifikationen und abgeschlossene Weiterbildungen".to_string()
        }
        (Lang::En, "certificates.professional") => "Professional certificates".to_string(),
        (Lang::De, "certificates.professional") => "Berufliche Zertifikate".to_string(),
        (Lang::En, "certificates.education_language") => "Education & languages".to_string(),
        (Lang::De, "certificates.education_language") => "Bildung & Sprachen".to_string(),
        (Lang::En, "certificates.modules") => "modules".to_string(),
        (Lang::De, "certificates.modules") => "Module".to_string(),
        (Lang::En, "certificates.view_pdf") => "View certificate".to_string(),
        (Lang::De, "certificates.view_pdf") => "Zertifikat ansehen".to_string(),
        (Lang::En, "certificates.in_progress") => "In progress".to_string(),
        (Lang::De, "certificates.in_progress") => "In Bearbeitung".to_string(),

        // Projects
        (Lang::En, "projects.title") => "Projects".to_string(),
        (Lang::De, "projects.title") => "Projekte".to_string(),
        (Lang::En, "projects.subtitle") => "A selection of things I have built".to_string(),
        (Lang::De, "projects.subtitle") => "Eine Auswahl meiner Arbeiten".to_string(),
        (Lang::En, "projects.view_code") => "Code".to_string(),
        (Lang::De, "projects.view_code") => "Code".to_string(),
        (Lang::En, "projects.view_live") => "Live demo".to_string(),
        (Lang::De, "projects.view_live") => "Live-Demo".to_string(),

        // Contact
        (Lang::En, "contact.title") => "Get in touch".to_string(),
        (Lang::De, "contact.title") => "Kontakt aufnehmen".to_string(),
        (Lang::En, "contact.subtitle") => {
            "I am happy to hear about opportunities and collaborations".to_string()
        }
        (Lang::De, "contact.subtitle") => {
            "Ich freue mich über Anfragen und Zusammenarbeit".to_string()
        }
        (Lang::En, "contact.cta") => "Write me a message".to_string(),
        (Lang::De, "contact.cta") => "Schreiben Sie mir".to_string(),
        (Lang::En, "contact.download_cv") => "Download CV".to_string(),
        (Lang::De, "contact.download_cv") => "Lebenslauf herunterladen".to_string(),
        (Lang::En, "contact.or") => "or reach me directly".to_string(),
        (Lang::De, "contact.or") => "oder erreichen Sie mich direkt".to_string(),

        // Footer
        (Lang::En, "footer.rights") => "All rights reserved".to_string(),
        (Lang::De, "footer.rights") => "Alle Rechte vorbehalten".to_string(),
        (Lang::En, "footer.built_with") => "Built with".to_string(),
        (Lang::De, "footer.built_with") => "Erstellt mit".to_string(),

        // Document overlay
        (Lang::En, "pdf.download") => "Download".to_string(),
        (Lang::De, "pdf.download") => "Herunterladen".to_string(),
        (Lang::En, "pdf.print") => "Print".to_string(),
        (Lang::De, "pdf.print") => "Drucken".to_string(),
        (Lang::En, "pdf.close") => "Close".to_string(),
        (Lang::De, "pdf.close") => "Schließen".to_string(),

        // Fallback: use the English string if present, else show the key.
        (Lang::De, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_tables_answer_shared_keys() {
        assert_eq!(t(Lang::En, "nav.about"), "About");
        assert_eq!(t(Lang::De, "nav.about"), "Über mich");
        assert_eq!(t(Lang::En, "certificates.in_progress"), "In progress");
        assert_eq!(t(Lang::De, "certificates.in_progress"), "In Bearbeitung");
    }

    #[test]
    fn test_missing_key_falls_back_to_english_then_key() {
        // Identical in both tables counts as a fallback-free hit.
        assert_eq!(t(Lang::De, "projects.view_code"), t(Lang::En, "projects.view_code"));
        // Missing everywhere returns the key itself.
        assert_eq!(t(Lang::De, "missing.key"), "missing.key");
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
    }

    #[test]
    fn test_from_code_accepts_regional_tags() {
        assert_eq!(Lang::from_code("de"), Some(Lang::De));
        assert_eq!(Lang::from_code("de-DE"), Some(Lang::De));
        assert_eq!(Lang::from_code("EN-us"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Lang::En.toggled(), Lang::De);
        assert_eq!(Lang::De.toggled().toggled(), Lang::De);
        assert_eq!(Lang::default(), Lang::En);
    }
}
