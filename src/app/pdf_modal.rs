use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::i18n::use_i18n;

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    match value {
        Some(v) => {
            let _ = body.style().set_property("overflow", v);
        }
        None => {
            let _ = body.style().remove_property("overflow");
        }
    }
}

fn trigger_download(url: &str, name: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(el) = doc.create_element("a") else {
        return;
    };
    let Ok(anchor) = el.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(url);
    anchor.set_download(name);
    anchor.click();
}

fn open_print_window(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(popup)) = win.open_with_url(url) {
            let _ = popup.print();
        }
    }
}

/// Keep Tab focus cycling inside the dialog while it is open.
fn trap_tab(container: &web_sys::HtmlElement, ev: &web_sys::KeyboardEvent) {
    let Ok(focusable) = container.query_selector_all("a[href], button, iframe, [tabindex]")
    else {
        return;
    };
    let len = focusable.length();
    if len == 0 {
        return;
    }
    let first = focusable
        .get(0)
        .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
    let last = focusable
        .get(len - 1)
        .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());

    if ev.shift_key() {
        let first_el: Option<web_sys::Element> = first.map(Into::into);
        if active == first_el {
            ev.prevent_default();
            if let Some(last) = last {
                let _ = last.focus();
            }
        }
    } else {
        let last_el: Option<web_sys::Element> = last.map(Into::into);
        if active == last_el {
            ev.prevent_default();
            if let Some(first) = first {
                let _ = first.focus();
            }
        }
    }
}

/// Overlay viewer for a certificate or CV document. Open/closed state is
/// owned by the caller; this component only reports close requests (close
/// button, Escape, backdrop click) and cleans up after itself when the
/// caller unmounts it.
#[component]
pub fn PdfModal(
    pdf_url: String,
    title: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let dialog_ref = NodeRef::<html::Div>::new();

    // Suppress background scroll while open and move focus into the
    // dialog. Restoration lives in on_cleanup so every exit path,
    // including plain unmount, runs it.
    Effect::new(move |_| {
        set_body_overflow(Some("hidden"));
        if let Some(dialog) = dialog_ref.get_untracked() {
            let _ = dialog.focus();
        }
    });
    on_cleanup(|| set_body_overflow(None));

    // Escape is an always-available close trigger.
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    let download_url = pdf_url.clone();
    let download_name = format!("{title}.pdf");
    let print_url = pdf_url.clone();

    view! {
        <div
            class="modal-backdrop"
            role="dialog"
            aria-modal="true"
            aria-labelledby="pdf-modal-title"
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-dialog"
                tabindex="-1"
                node_ref=dialog_ref
                on:click=|ev| ev.stop_propagation()
                on:keydown=move |ev| {
                    if ev.key() == "Tab" {
                        if let Some(dialog) = dialog_ref.get_untracked() {
                            trap_tab(&dialog, &ev);
                        }
                    }
                }
            >
                <div class="modal-header">
                    <h2 id="pdf-modal-title">{title.clone()}</h2>
                    <div class="modal-actions">
                        <button
                            class="control-button"
                            aria-label=move || i18n.t("pdf.download")
                            on:click=move |_| trigger_download(&download_url, &download_name)
                        >
                            <i class="icon-download"></i>
                        </button>
                        <button
                            class="control-button"
                            aria-label=move || i18n.t("pdf.print")
                            on:click=move |_| open_print_window(&print_url)
                        >
                            <i class="icon-print"></i>
                        </button>
                        <button
                            class="control-button"
                            aria-label=move || i18n.t("pdf.close")
                            on:click=move |_| on_close.run(())
                        >
                            <i class="icon-close"></i>
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    <iframe src=pdf_url.clone() title=title.clone()></iframe>
                </div>
            </div>
        </div>
    }
}
