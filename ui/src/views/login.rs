use dioxus::prelude::*;

use crate::core::session::{use_session, Page};

static PANEL_STATS: [(&str, &str); 3] = [
    ("500+", "Students"),
    ("12", "Faculties"),
    ("50+", "Courses"),
];

static LOGIN_POINTS: [&str; 3] = [
    "🔒 Secure OAuth 2.0 authentication",
    "🎓 Auto-detect your faculty from student email",
    "⚡ One-click login, no passwords needed",
];

/// Mocked login screen. The "Continue with Google" button flips the
/// authentication flag and navigates to the dashboard; nothing is verified.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();

    rsx! {
        div { class: "login",
            div { class: "login__panel",
                div { class: "landing__logo",
                    span { class: "landing__logo-badge landing__logo-badge--glass", "🎓" }
                    span { class: "landing__logo-mark landing__logo-mark--light", "UniHub" }
                }
                div { class: "login__panel-body",
                    h2 { class: "login__panel-title",
                        "Your campus."
                        br {}
                        "Your community."
                        br {}
                        "Your growth."
                    }
                    p { class: "login__panel-lead",
                        "Join the platform that connects students across faculties, powers \
                         learning with AI, and prioritizes your well-being."
                    }
                    div { class: "login__panel-stats",
                        for (value, label) in PANEL_STATS {
                            div { key: "{label}", class: "login__panel-stat",
                                div { class: "login__panel-stat-value", "{value}" }
                                div { class: "login__panel-stat-label", "{label}" }
                            }
                        }
                    }
                }
                div { class: "login__panel-footer", "© 2025 UniHub · Google Solution Challenge" }
            }

            div { class: "login__form",
                div { class: "login__form-inner",
                    button {
                        r#type: "button",
                        class: "login__back",
                        onclick: move |_| session.with_mut(|s| s.navigate(Page::Landing)),
                        "← Back to home"
                    }

                    div { class: "login__heading",
                        h1 { "Welcome back 👋" }
                        p { "Sign in with your university Google account to continue." }
                    }

                    button {
                        r#type: "button",
                        class: "login__google",
                        onclick: move |_| session.with_mut(|s| s.login()),
                        span { class: "login__google-glyph", "G" }
                        span { "Continue with Google" }
                    }

                    div { class: "login__divider",
                        span { "University account required" }
                    }

                    div { class: "login__info-card",
                        div { class: "login__info-icon", "🎓" }
                        div {
                            h3 { "UM Students Only" }
                            p {
                                "Please use your "
                                strong { "@um.edu.my" }
                                " or "
                                strong { "@siswa.um.edu.my" }
                                " Google account to sign in. This ensures a safe and verified community."
                            }
                        }
                    }

                    div { class: "login__points",
                        for point in LOGIN_POINTS {
                            div { key: "{point}", class: "login__point", "{point}" }
                        }
                    }

                    p { class: "login__legal",
                        "By signing in, you agree to our Terms of Service and Privacy Policy."
                        br {}
                        "Your data is protected under PDPA Malaysia."
                    }
                }
            }
        }
    }
}
