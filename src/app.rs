mod about;
mod certificates;
mod contact;
mod hero;
mod links;
mod navbar;
mod pdf_modal;
mod projects;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use server_fn::codec::GetUrl;

use crate::i18n::provide_i18n;
use crate::portfolio::PortfolioData;
use crate::theme::provide_theme;

use about::AboutSection;
use certificates::CertificatesSection;
use contact::{ContactSection, Footer, WhatsAppFab};
use hero::HeroSection;
use navbar::Navbar;
use projects::ProjectsGrid;
use skills::SkillsGrid;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[server(input = GetUrl)]
pub async fn get_portfolio() -> Result<PortfolioData, ServerFnError> {
    crate::portfolio::load()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_i18n();
    provide_theme();

    view! {
        <Title formatter=|title| format!("{title} - Portfolio") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    // The one fetch of the session. Keyed on unit, so it never refetches;
    // a failed load stays failed until the visitor reloads the page.
    let data = Resource::new(|| (), move |_| async move { get_portfolio().await });

    view! {
        <Title text="Portfolio" />
        <Suspense fallback=loading_screen>
            {move || {
                Suspend::new(async move {
                    match data.await {
                        Ok(data) => Either::Left(view! { <Portfolio data=data /> }),
                        Err(err) => {
                            log::error!("portfolio load failed: {err}");
                            Either::Right(load_error())
                        }
                    }
                })
            }}
        </Suspense>
    }
}

fn loading_screen() -> impl IntoView {
    view! {
        <div class="fullscreen-status">
            <div class="spinner" aria-hidden="true"></div>
            <p class="status-text">"Loading portfolio..."</p>
        </div>
    }
}

// Fixed English copy: the translation context may not reflect the
// visitor's choice when the document itself is unreachable.
fn load_error() -> impl IntoView {
    view! {
        <div class="fullscreen-status">
            <h1 class="status-title">"Error"</h1>
            <p class="status-text">"Failed to load portfolio. Please refresh the page."</p>
        </div>
    }
}

#[component]
fn Portfolio(data: PortfolioData) -> impl IntoView {
    let candidate = data.candidate;
    let cv_pdf = candidate.downloadables.lebenslauf_pdf.clone();
    let whatsapp = candidate.contact.whatsapp.clone();

    view! {
        <Title text=candidate.name.clone() />
        <Navbar cv_pdf=cv_pdf.clone() />
        <main>
            <HeroSection candidate=candidate.clone() />
            <AboutSection youtube_url=candidate.youtube_about.clone() />
            <SkillsGrid skills=candidate.skills.clone() />
            <CertificatesSection
                groups=data.certificate_groups
                standalone=data.standalone_certificates
            />
            <ProjectsGrid projects=data.projects />
            <ContactSection contact=candidate.contact.clone() cv_pdf=cv_pdf />
        </main>
        <Footer name=candidate.name.clone() />
        <WhatsAppFab href=whatsapp />
    }
}
