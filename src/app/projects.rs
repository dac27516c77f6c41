use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::portfolio::{Project, PLACEHOLDER_IMAGE};

use super::links::{rel_for, target_for};

#[component]
pub fn ProjectsGrid(projects: Vec<Project>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="projects" class="section projects">
            <h2 class="section-title">{move || i18n.t("projects.title")}</h2>
            <p class="section-subtitle">{move || i18n.t("projects.subtitle")}</p>

            <div class="projects-grid">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let i18n = use_i18n();
    let (shot, set_shot) = signal(project.screenshot.clone());
    let description = project.short_description.clone();

    view! {
        <div class="project-card">
            <img
                src=move || shot.get()
                alt=project.title.clone()
                class="project-shot"
                loading="lazy"
                on:error=move |_| set_shot.set(PLACEHOLDER_IMAGE.to_string())
            />
            <div class="project-body">
                <h3>{project.title.clone()}</h3>
                <p class="project-summary">
                    {move || description.pick(i18n.lang()).to_string()}
                </p>
                <div class="project-tags">
                    {project
                        .tech_tags
                        .iter()
                        .map(|tag| view! { <span class="badge">{tag.to_string()}</span> })
                        .collect_view()}
                </div>
                <div class="project-links">
                    <a
                        href=project.github_url.clone()
                        target=target_for(&project.github_url)
                        rel=rel_for(&project.github_url)
                        class="button small outline"
                    >
                        <i class="icon-github"></i>
                        {move || i18n.t("projects.view_code")}
                    </a>
                    <a
                        href=project.live_url.clone()
                        target=target_for(&project.live_url)
                        rel=rel_for(&project.live_url)
                        class="button small"
                    >
                        <i class="icon-external"></i>
                        {move || i18n.t("projects.view_live")}
                    </a>
                </div>
            </div>
        </div>
    }
}
