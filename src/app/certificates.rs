use leptos::{either::Either, prelude::*};

use crate::i18n::use_i18n;
use crate::portfolio::{
    partition_standalone, CertModule, CertificateGroup, PLACEHOLDER_IMAGE,
};

use super::pdf_modal::PdfModal;

#[component]
pub fn CertificatesSection(
    groups: Vec<CertificateGroup>,
    standalone: Vec<CertModule>,
) -> impl IntoView {
    let i18n = use_i18n();
    let (professional, education) = partition_standalone(&standalone);

    view! {
        <section id="certificates" class="section certificates">
            <h2 class="section-title">{move || i18n.t("certificates.title")}</h2>
            <p class="section-subtitle">{move || i18n.t("certificates.subtitle")}</p>

            <h3 class="section-divider">{move || i18n.t("certificates.professional")}</h3>
            <div class="cert-groups">
                {groups
                    .into_iter()
                    .map(|group| view! { <CertGroup group=group /> })
                    .collect_view()}
            </div>
            <div class="cert-list">
                {professional
                    .into_iter()
                    .map(|module| view! { <CertItem module=module /> })
                    .collect_view()}
            </div>

            {(!education.is_empty())
                .then(|| {
                    view! {
                        <h3 class="section-divider">
                            {move || i18n.t("certificates.education_language")}
                        </h3>
                        <div class="cert-list">
                            {education
                                .into_iter()
                                .map(|module| view! { <CertItem module=module /> })
                                .collect_view()}
                        </div>
                    }
                })}
        </section>
    }
}

/// A multi-module credential rendered as an accordion. Starts collapsed;
/// the header click toggles it and the body animates through CSS.
#[component]
fn CertGroup(group: CertificateGroup) -> impl IntoView {
    let i18n = use_i18n();
    let (expanded, set_expanded) = signal(false);
    let (thumb, set_thumb) = signal(
        group
            .thumbnail
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
    );
    let module_count = group.modules.len();
    let body_id = format!("cert-group-{}", group.id);
    let modules = group.modules.clone();
    let group = StoredValue::new(group);

    view! {
        <div class="cert-group">
            <button
                class="cert-group-header"
                aria-expanded=move || expanded.get().to_string()
                aria-controls=body_id.clone()
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                <img
                    src=move || thumb.get()
                    alt=move || group.with_value(|g| g.title(i18n.lang()).to_string())
                    class="cert-group-thumb"
                    on:error=move |_| set_thumb.set(PLACEHOLDER_IMAGE.to_string())
                />
                <div class="cert-group-headline">
                    <h3>{move || group.with_value(|g| g.title(i18n.lang()).to_string())}</h3>
                    <p class="cert-group-summary">
                        {move || group.with_value(|g| g.description(i18n.lang()).to_string())}
                    </p>
                    <p class="cert-group-count">
                        {module_count} " " {move || i18n.t("certificates.modules")}
                    </p>
                </div>
                <i class=move || {
                    if expanded.get() { "icon-chevron-up" } else { "icon-chevron-down" }
                }></i>
            </button>

            <div
                id=body_id
                class=move || {
                    if expanded.get() { "cert-group-body open" } else { "cert-group-body" }
                }
            >
                {modules
                    .into_iter()
                    .map(|module| view! { <CertItem module=module /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CertItem(module: CertModule) -> impl IntoView {
    let i18n = use_i18n();
    let (show_pdf, set_show_pdf) = signal(false);
    let (thumb, set_thumb) = signal(module.thumbnail.clone());
    let in_progress = module.is_in_progress();
    let issuer = module.issuer.clone();
    let date_label = module.date.format("%b %Y").to_string();
    let module = StoredValue::new(module);

    view! {
        <div class="cert-item">
            <img
                src=move || thumb.get()
                alt=move || module.with_value(|m| m.title(i18n.lang()).to_string())
                class="cert-item-thumb"
                on:error=move |_| set_thumb.set(PLACEHOLDER_IMAGE.to_string())
            />
            <div class="cert-item-body">
                <div class="cert-item-head">
                    <h4>{move || module.with_value(|m| m.title(i18n.lang()).to_string())}</h4>
                    {if in_progress {
                        Either::Left(
                            view! {
                                <span class="badge">
                                    <i class="icon-clock"></i>
                                    {move || i18n.t("certificates.in_progress")}
                                </span>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <span class="badge">
                                    <i class="icon-file"></i>
                                    "PDF"
                                </span>
                            },
                        )
                    }}
                </div>
                <p class="cert-item-summary">
                    {move || module.with_value(|m| m.summary(i18n.lang()).to_string())}
                </p>
                <p class="cert-item-meta">
                    <i class="icon-award"></i>
                    {issuer}
                    " · "
                    {date_label}
                </p>
                {if in_progress {
                    // An in-progress module has no viewable document.
                    Either::Left(
                        view! {
                            <button class="button small" disabled>
                                {move || i18n.t("certificates.in_progress")}
                            </button>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <button class="button small" on:click=move |_| set_show_pdf.set(true)>
                                {move || i18n.t("certificates.view_pdf")}
                            </button>
                        },
                    )
                }}
            </div>
        </div>

        {move || {
            (show_pdf.get() && !in_progress)
                .then(|| {
                    let (pdf_url, title) = module
                        .with_value(|m| (m.pdf.clone(), m.title(i18n.lang()).to_string()));
                    view! {
                        <PdfModal
                            pdf_url=pdf_url
                            title=title
                            on_close=move |_| set_show_pdf.set(false)
                        />
                    }
                })
        }}
    }
}
