use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

// Report stylesheet (inlined as well for release native builds)
const REPORT_CSS: Asset = asset!("/assets/styling/report.css");
const REPORT_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/report.css"
));

/// Page header: brand, tagline and the locale switcher.
///
/// The selector writes the chosen tag into the global language code signal
/// (when the platform provided one) so every view re-renders with fresh
/// strings from `t!`.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let tagline = t!("app-tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: REPORT_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{REPORT_CSS_INLINE}" }
        }

        header {
            id: "report-header",
            class: "report-header",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "report-header__inner",
                div { class: "report-header__brand",
                    span { class: "report-header__brand-mark", {t!("app-title")} }
                    span { class: "report-header__brand-subtitle", "{tagline}" }
                }

                if show_switcher {
                    div { class: "report-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
