use dioxus::prelude::*;

use crate::context::app_context;
use crate::pages::{Greeting, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Multilingual greeting intro, then redirects to `/home`
/// - `/home` - The portfolio page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Greeting {},
    #[route("/home")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the app context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(app_context);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
