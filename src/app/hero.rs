use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window};

use crate::i18n::use_i18n;
use crate::portfolio::{Candidate, PLACEHOLDER_IMAGE};

use super::navbar::scroll_to_section;

/// How far the showpiece may yaw for a pointer at the viewport edge.
const YAW_RANGE: f32 = 0.25;
const PITCH_RANGE: f32 = 0.12;
/// Exponential smoothing factor applied every frame; keeps the rotation
/// trailing the pointer instead of snapping to it.
const SMOOTHING: f32 = 0.08;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Rotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Rotation {
    pub fn advance_toward(&mut self, target: Rotation, factor: f32) {
        self.yaw = damp(self.yaw, target.yaw, factor);
        self.pitch = damp(self.pitch, target.pitch, factor);
    }
}

pub(crate) fn damp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Target angles derived linearly from pointer coordinates normalized to
/// roughly [-1, 1] per axis.
pub(crate) fn pointer_target(nx: f32, ny: f32) -> Rotation {
    Rotation {
        yaw: nx * YAW_RANGE,
        pitch: -ny * PITCH_RANGE,
    }
}

pub(crate) fn normalize_pointer(client: f64, extent: f64) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    (client / extent * 2.0 - 1.0) as f32
}

#[component]
pub fn HeroSection(candidate: Candidate) -> impl IntoView {
    let i18n = use_i18n();
    let (pointer, set_pointer) = signal((0.0_f32, 0.0_f32));
    let (photo, set_photo) = signal(candidate.photo.clone());
    let (model_failed, set_model_failed) = signal(false);

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let Some(win) = web_sys::window() else { return };
        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        set_pointer.set((
            normalize_pointer(f64::from(ev.client_x()), width),
            normalize_pointer(f64::from(ev.client_y()), height),
        ));
    });

    let model_ref = NodeRef::<html::Div>::new();
    let rotation = StoredValue::new(Rotation::default());
    let _ = use_raf_fn(move |_| {
        let (nx, ny) = pointer.get_untracked();
        rotation.update_value(|r| r.advance_toward(pointer_target(nx, ny), SMOOTHING));
        if let Some(el) = model_ref.get_untracked() {
            let el: web_sys::HtmlElement = el.into();
            let r = rotation.get_value();
            let _ = el.style().set_property(
                "transform",
                &format!("rotateX({:.4}rad) rotateY({:.4}rad)", r.pitch, r.yaw),
            );
        }
    });

    let role = candidate.role.clone();
    let skills_preview = candidate
        .skills
        .iter()
        .take(4)
        .cloned()
        .collect::<Vec<_>>();
    let cv_pdf = candidate.downloadables.lebenslauf_pdf.clone();

    view! {
        <section class="hero">
            <div class="hero-info">
                <div class="hero-photo-frame">
                    <img
                        src=move || photo.get()
                        alt=candidate.name.clone()
                        class="hero-photo"
                        on:error=move |_| set_photo.set(PLACEHOLDER_IMAGE.to_string())
                    />
                    <span class="hero-badge">{move || i18n.t("hero.available")}</span>
                </div>

                <p class="hero-greeting">{move || i18n.t("hero.greeting")}</p>
                <h1 class="hero-name">{candidate.name.clone()}</h1>
                <p class="hero-role">{move || role.pick(i18n.lang()).to_string()}</p>

                <div class="hero-skills">
                    {skills_preview
                        .into_iter()
                        .map(|skill| view! { <span class="skill-tag">{skill}</span> })
                        .collect_view()}
                </div>

                <div class="hero-actions">
                    <button class="button primary" on:click=move |_| scroll_to_section("about")>
                        {move || i18n.t("hero.cta")}
                        <i class="icon-arrow-down"></i>
                    </button>
                    <a href=cv_pdf download="cv.pdf" class="button outline">
                        <i class="icon-download"></i>
                        {move || i18n.t("hero.download_cv")}
                    </a>
                </div>
            </div>

            <div class="hero-stage">
                <div class="hero-model" node_ref=model_ref>
                    <img
                        src="/images/hero-model.webp"
                        alt=""
                        class="hero-model-art"
                        on:error=move |_| set_model_failed.set(true)
                    />
                </div>
                {move || {
                    model_failed
                        .get()
                        .then(|| {
                            view! {
                                <div class="model-loading">
                                    <div class="spinner" aria-hidden="true"></div>
                                    <p>{move || i18n.t("hero.model_loading")}</p>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="hero-scroll-hint">
                <div class="scroll-wheel" aria-hidden="true"></div>
                <span>{move || i18n.t("hero.scroll_down")}</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damp_moves_a_fixed_fraction() {
        assert_eq!(damp(0.0, 1.0, 0.08), 0.08);
        assert_eq!(damp(0.5, 0.5, 0.08), 0.5);
        // Works in both directions.
        assert!(damp(1.0, 0.0, 0.08) < 1.0);
    }

    #[test]
    fn test_damp_converges_without_overshoot() {
        let mut current = 0.0_f32;
        for _ in 0..200 {
            let next = damp(current, 1.0, 0.08);
            assert!(next > current && next <= 1.0);
            current = next;
        }
        assert!((current - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_pointer_target_is_linear_and_clamped_by_range() {
        let centered = pointer_target(0.0, 0.0);
        assert_eq!(centered, Rotation::default());

        let corner = pointer_target(1.0, 1.0);
        assert_eq!(corner.yaw, YAW_RANGE);
        assert_eq!(corner.pitch, -PITCH_RANGE);

        let opposite = pointer_target(-1.0, -1.0);
        assert_eq!(opposite.yaw, -YAW_RANGE);
        assert_eq!(opposite.pitch, PITCH_RANGE);
    }

    #[test]
    fn test_normalize_pointer_covers_the_viewport() {
        assert_eq!(normalize_pointer(0.0, 1000.0), -1.0);
        assert_eq!(normalize_pointer(500.0, 1000.0), 0.0);
        assert_eq!(normalize_pointer(1000.0, 1000.0), 1.0);
        // Degenerate extent must not divide by zero.
        assert_eq!(normalize_pointer(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_rotation_advances_toward_target() {
        let mut rotation = Rotation::default();
        let target = pointer_target(1.0, -1.0);
        for _ in 0..300 {
            rotation.advance_toward(target, SMOOTHING);
        }
        assert!((rotation.yaw - target.yaw).abs() < 1e-3);
        assert!((rotation.pitch - target.pitch).abs() < 1e-3);
    }
}
