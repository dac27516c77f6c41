use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::portfolio::PLACEHOLDER_IMAGE;

/// Icon path convention for skill labels: lowercased, spaces and dots
/// collapsed to dashes, e.g. "Node.js" -> "/icons/node-js.png".
pub(crate) fn icon_path(label: &str) -> String {
    let slug: String = label
        .chars()
        .map(|c| match c {
            ' ' | '.' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect();
    format!("/icons/{slug}.png")
}

#[component]
pub fn SkillsGrid(skills: Vec<String>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="skills" class="section skills">
            <h2 class="section-title">{move || i18n.t("skills.title")}</h2>
            <p class="section-subtitle">{move || i18n.t("skills.subtitle")}</p>

            <div class="skills-grid">
                {skills
                    .into_iter()
                    .map(|label| {
                        let (icon, set_icon) = signal(icon_path(&label));
                        view! {
                            <div class="skill-card">
                                <img
                                    src=move || icon.get()
                                    alt=label.clone()
                                    loading="lazy"
                                    on:error=move |_| set_icon.set(PLACEHOLDER_IMAGE.to_string())
                                />
                                <p>{label.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_path_slugs() {
        assert_eq!(icon_path("HTML"), "/icons/html.png");
        assert_eq!(icon_path("Node.js"), "/icons/node-js.png");
        assert_eq!(icon_path("Tailwind CSS"), "/icons/tailwind-css.png");
    }
}
