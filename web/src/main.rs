use dioxus::prelude::*;
use tracing::Level;

use ui::components::AppHeader;
use ui::core::platform;
use ui::i18n;
use ui::views::Report;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebHeader)]
    #[route("/")]
    Report {},
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The page config may pin a locale ahead of the browser's list.
    use_hook(|| {
        let config = platform::load_config();
        i18n::init_with(config.locale.as_deref());
    });

    // Global reactive language code; the header updates it on selection.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        Router::<Route> {}
    }
}

/// Web layout: the shared header above the routed page.
#[component]
fn WebHeader() -> Element {
    rsx! {
        AppHeader { }
        Outlet::<Route> {}
    }
}
