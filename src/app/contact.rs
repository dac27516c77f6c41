use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::portfolio::Contact;

use super::links::{rel_for, target_for};

#[component]
pub fn ContactSection(contact: Contact, cv_pdf: String) -> impl IntoView {
    let i18n = use_i18n();

    let direct_links = vec![
        ("icon-mail", contact.email.clone(), format!("mailto:{}", contact.email)),
        ("icon-phone", contact.phone.clone(), format!("tel:{}", contact.phone)),
        ("icon-linkedin", "LinkedIn".to_string(), contact.linkedin.clone()),
        ("icon-github", "GitHub".to_string(), contact.github.clone()),
    ];

    view! {
        <section id="contact" class="section contact">
            <h2 class="section-title">{move || i18n.t("contact.title")}</h2>
            <p class="section-subtitle">{move || i18n.t("contact.subtitle")}</p>

            <div class="contact-cta">
                {contact
                    .whatsapp
                    .clone()
                    .map(|wa| {
                        let target = target_for(&wa);
                        let rel = rel_for(&wa);
                        view! {
                            <a href=wa target=target rel=rel class="button primary">
                                <i class="icon-message"></i>
                                {move || i18n.t("contact.cta")}
                            </a>
                        }
                    })}
                <a href=cv_pdf download="cv.pdf" class="button outline">
                    <i class="icon-download"></i>
                    {move || i18n.t("contact.download_cv")}
                </a>
            </div>

            <p class="contact-or">{move || i18n.t("contact.or")}</p>

            <div class="contact-links">
                {direct_links
                    .into_iter()
                    .map(|(icon, label, href)| {
                        let target = target_for(&href);
                        let rel = rel_for(&href);
                        view! {
                            <a href=href target=target rel=rel class="contact-link">
                                <i class=icon></i>
                                <span>{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer(name: String) -> impl IntoView {
    let i18n = use_i18n();
    // Stamped at compile time; good enough for a copyright line.
    let year = &env!("BUILD_TIME")[..4];

    view! {
        <footer class="footer">
            <p>"© " {year.to_string()} " " {name} ". " {move || i18n.t("footer.rights")} "."</p>
            <p class="footer-stack">
                {move || i18n.t("footer.built_with")} " Rust, Leptos & WebAssembly"
            </p>
        </footer>
    }
}

/// Floating messaging button. An absent link is a valid silent state:
/// nothing renders at all.
#[component]
pub fn WhatsAppFab(href: Option<String>) -> impl IntoView {
    href.map(|href| {
        let target = target_for(&href);
        let rel = rel_for(&href);
        view! {
            <a class="fab" href=href target=target rel=rel aria-label="WhatsApp">
                <i class="icon-whatsapp"></i>
            </a>
        }
    })
}
