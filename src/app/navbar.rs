use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::i18n::use_i18n;
use crate::theme::{use_theme, Theme};

/// Scroll offset past which the bar switches to its compact style.
const COMPACT_THRESHOLD: f64 = 20.0;
/// Offset added to the scroll position before probing section extents,
/// so a section counts as active slightly before it reaches the top.
const SECTION_LOOKAHEAD: f64 = 100.0;

pub struct Section {
    pub id: &'static str,
    pub label_key: &'static str,
}

/// Known page sections, in priority order for the active-section scan.
pub const NAV_SECTIONS: &[Section] = &[
    Section { id: "about", label_key: "nav.about" },
    Section { id: "skills", label_key: "nav.skills" },
    Section { id: "certificates", label_key: "nav.certificates" },
    Section { id: "projects", label_key: "nav.projects" },
    Section { id: "contact", label_key: "nav.contact" },
];

type SectionExtent = (&'static str, f64, f64);

/// First section (in list order) whose `[top, top + height)` extent
/// contains the probed position, or `None` when nothing matches.
pub(crate) fn active_section(
    scroll_y: f64,
    lookahead: f64,
    extents: &[SectionExtent],
) -> Option<&'static str> {
    let probe = scroll_y + lookahead;
    extents
        .iter()
        .find(|(_, top, height)| probe >= *top && probe < top + height)
        .map(|(id, _, _)| *id)
}

fn section_extents() -> Vec<SectionExtent> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    NAV_SECTIONS
        .iter()
        .filter_map(|s| {
            let el = doc.get_element_by_id(s.id)?;
            let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some((s.id, f64::from(el.offset_top()), f64::from(el.offset_height())))
        })
        .collect()
}

pub(crate) fn scroll_to_section(id: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = doc.get_element_by_id(id) {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

#[component]
pub fn Navbar(cv_pdf: String) -> impl IntoView {
    let i18n = use_i18n();
    let theme = use_theme();
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(None::<&'static str>);

    let update_from_scroll = move || {
        let Some(win) = web_sys::window() else { return };
        let y = win.scroll_y().unwrap_or_default();
        set_scrolled.set(y > COMPACT_THRESHOLD);
        // The previous entry stays highlighted while between sections.
        if let Some(id) = active_section(y, SECTION_LOOKAHEAD, &section_extents()) {
            set_active.set(Some(id));
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, {
        let update_from_scroll = update_from_scroll.clone();
        move |_| update_from_scroll()
    });
    // Initial check once the client mounts.
    Effect::new(move |_| update_from_scroll());

    // A click highlights its entry immediately; the scroll listener may
    // recompute a different one while the smooth scroll is still travelling.
    let select_section = move |id: &'static str| {
        scroll_to_section(id);
        set_active.set(Some(id));
        set_menu_open.set(false);
    };

    let nav_entries = move |mobile: bool| {
        NAV_SECTIONS
            .iter()
            .map(|s| {
                let id = s.id;
                let label_key = s.label_key;
                let class = move || {
                    let base = if mobile { "nav-entry mobile" } else { "nav-entry" };
                    if active.get() == Some(id) {
                        format!("{base} active")
                    } else {
                        base.to_string()
                    }
                };
                view! {
                    <button class=class on:click=move |_| select_section(id)>
                        {move || i18n.t(label_key)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if scrolled.get() { "navbar compact" } else { "navbar" }
        }>
            <div class="navbar-inner">
                <a
                    href="#"
                    class="navbar-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_top();
                        set_active.set(None);
                    }
                >
                    <img src="/images/logo.png" alt="Logo" class="navbar-logo-img" />
                </a>

                <div class="navbar-entries">{nav_entries(false)}</div>

                <div class="navbar-controls">
                    <button
                        class="control-button"
                        aria-label=move || i18n.t("theme.toggle")
                        on:click=move |_| theme.toggle()
                    >
                        <i class=move || {
                            match theme.get() {
                                Theme::Light => "icon-moon",
                                Theme::Dark => "icon-sun",
                            }
                        }></i>
                    </button>
                    <button
                        class="control-button"
                        aria-label=move || i18n.t("language.toggle")
                        on:click=move |_| i18n.toggle()
                    >
                        <i class="icon-globe"></i>
                        <span class="lang-label">{move || i18n.lang().label()}</span>
                    </button>
                    <a href=cv_pdf.clone() download="cv.pdf" class="cv-button">
                        {move || i18n.t("nav.download_cv")}
                    </a>
                    <button
                        class="control-button menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <i class=move || {
                            if menu_open.get() { "icon-close" } else { "icon-menu" }
                        }></i>
                    </button>
                </div>
            </div>

            {move || {
                menu_open.get().then(|| {
                    view! {
                        <div class="navbar-mobile-panel">
                            {nav_entries(true)}
                            <div class="mobile-lang-hint">
                                {move || i18n.t("language.toggle")} ": "
                                {move || i18n.lang().label()}
                            </div>
                        </div>
                    }
                })
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENTS: &[SectionExtent] = &[
        ("about", 600.0, 400.0),
        ("skills", 1000.0, 500.0),
        ("certificates", 1500.0, 800.0),
        ("projects", 2300.0, 700.0),
        ("contact", 3000.0, 400.0),
    ];

    #[test]
    fn test_no_section_above_first_extent() {
        assert_eq!(active_section(0.0, 100.0, EXTENTS), None);
        assert_eq!(active_section(499.0, 100.0, EXTENTS), None);
    }

    #[test]
    fn test_lookahead_pulls_section_in_early() {
        // Probe = 500 + 100 lands exactly on the first section top.
        assert_eq!(active_section(500.0, 100.0, EXTENTS), Some("about"));
        assert_eq!(active_section(500.0, 0.0, EXTENTS), None);
    }

    #[test]
    fn test_extent_end_is_exclusive() {
        assert_eq!(active_section(899.0, 100.0, EXTENTS), Some("about"));
        assert_eq!(active_section(900.0, 100.0, EXTENTS), Some("skills"));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let overlapping: &[SectionExtent] =
            &[("about", 0.0, 2000.0), ("skills", 500.0, 500.0)];
        assert_eq!(active_section(600.0, 100.0, overlapping), Some("about"));
    }

    #[test]
    fn test_past_last_section_matches_nothing() {
        assert_eq!(active_section(3400.0, 100.0, EXTENTS), None);
    }

    #[test]
    fn test_empty_extents() {
        assert_eq!(active_section(1200.0, 100.0, &[]), None);
    }
}
