use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::portfolio::youtube_embed_url;

#[component]
pub fn AboutSection(youtube_url: String) -> impl IntoView {
    let i18n = use_i18n();
    // No extractable video id means no embed at all, not a broken iframe.
    let embed = youtube_embed_url(&youtube_url);

    view! {
        <section id="about" class="section about">
            <h2 class="section-title">{move || i18n.t("about.title")}</h2>
            <p class="section-subtitle">{move || i18n.t("about.watch_video")}</p>

            {embed
                .map(|src| {
                    view! {
                        <div class="video-frame">
                            {view! {
                                <iframe
                                    src=src
                                    title="Introduction video"
                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                    allowfullscreen
                                ></iframe>
                            }
                                .attr("loading", "lazy")}
                        </div>
                    }
                })}
        </section>
    }
}
