use dioxus::prelude::*;

use ui::components::DashboardShell;
use ui::core::session::{Page, Session};
use ui::views::{Courses, Dashboard, Decision, Landing, Login, Network, Profile, Wellness};

// Embedded shared theme (ui/assets/theme/main.css); no separate web /assets copy.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let session = use_context_provider(|| Signal::new(Session::default()));
    let page = session().page;

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        match page {
            Page::Landing => rsx! { Landing {} },
            Page::Login => rsx! { Login {} },
            Page::Dashboard => shell(rsx! { Dashboard {} }),
            Page::Network => shell(rsx! { Network {} }),
            Page::Courses => shell(rsx! { Courses {} }),
            Page::Wellness => shell(rsx! { Wellness {} }),
            Page::Decision => shell(rsx! { Decision {} }),
            Page::Profile => shell(rsx! { Profile {} }),
        }
    }
}

/// Wraps a dashboard-family page in the persistent sidebar/topbar shell.
fn shell(body: Element) -> Element {
    rsx! {
        DashboardShell { {body} }
    }
}
