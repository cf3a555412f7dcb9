use dioxus::prelude::*;

use crate::core::session::{use_session, Page};

/// Sidebar entries for the main menu. Profile and sign-out live in the
/// bottom section, matching the original layout.
static NAV_ITEMS: [(Page, &str, &str); 5] = [
    (Page::Dashboard, "Dashboard", "▦"),
    (Page::Network, "Network", "👥"),
    (Page::Courses, "AI Courses", "📚"),
    (Page::Wellness, "Wellness", "💗"),
    (Page::Decision, "Decisions", "✨"),
];

/// Persistent sidebar/topbar wrapper shown for all post-login pages. The
/// routed page renders as `children`. Sidebar visibility (mobile) and the
/// profile dropdown are plain local state.
#[component]
pub fn DashboardShell(children: Element) -> Element {
    let mut session = use_session();
    let user = session().user;
    let current = session().page;

    let mut sidebar_open = use_signal(|| false);
    let mut profile_open = use_signal(|| false);

    rsx! {
        div { class: "shell",
            if sidebar_open() {
                div {
                    class: "shell__overlay",
                    onclick: move |_| sidebar_open.set(false),
                }
            }

            aside {
                class: if sidebar_open() { "shell__sidebar shell__sidebar--open" } else { "shell__sidebar" },
                div { class: "shell__brand",
                    span { class: "shell__brand-badge", "🎓" }
                    span { class: "shell__brand-mark", "UniHub" }
                    button {
                        r#type: "button",
                        class: "shell__sidebar-close",
                        onclick: move |_| sidebar_open.set(false),
                        "✕"
                    }
                }

                div { class: "shell__user-card",
                    div { class: "avatar avatar--md", "{user.avatar_initials}" }
                    div { class: "shell__user-meta",
                        div { class: "shell__user-name", "{user.display_name}" }
                        div { class: "shell__user-faculty", {user.faculty_short()} }
                    }
                }

                nav { class: "shell__nav",
                    div { class: "shell__nav-label", "Main Menu" }
                    for (page, label, icon) in NAV_ITEMS {
                        button {
                            key: "{label}",
                            r#type: "button",
                            class: if current == page { "shell__nav-item shell__nav-item--active" } else { "shell__nav-item" },
                            onclick: move |_| {
                                session.with_mut(|s| s.navigate(page));
                                sidebar_open.set(false);
                            },
                            span { class: "shell__nav-icon", "{icon}" }
                            "{label}"
                        }
                    }
                }

                div { class: "shell__sidebar-bottom",
                    button {
                        r#type: "button",
                        class: if current == Page::Profile { "shell__nav-item shell__nav-item--active" } else { "shell__nav-item" },
                        onclick: move |_| {
                            session.with_mut(|s| s.navigate(Page::Profile));
                            sidebar_open.set(false);
                        },
                        span { class: "shell__nav-icon", "👤" }
                        "Profile"
                    }
                    button {
                        r#type: "button",
                        class: "shell__nav-item shell__nav-item--signout",
                        onclick: move |_| session.with_mut(|s| s.sign_out()),
                        span { class: "shell__nav-icon", "⎋" }
                        "Sign Out"
                    }
                }
            }

            div { class: "shell__main",
                header { class: "shell__topbar",
                    div { class: "shell__topbar-left",
                        button {
                            r#type: "button",
                            class: "shell__menu-toggle",
                            onclick: move |_| sidebar_open.set(true),
                            "☰"
                        }
                        div { class: "shell__search",
                            span { class: "shell__search-icon", "🔍" }
                            input {
                                r#type: "text",
                                placeholder: "Search students, courses...",
                            }
                        }
                    }
                    div { class: "shell__topbar-right",
                        button { r#type: "button", class: "shell__bell",
                            "🔔"
                            span { class: "shell__bell-dot" }
                        }
                        div { class: "shell__profile",
                            button {
                                r#type: "button",
                                class: "shell__profile-toggle",
                                onclick: move |_| profile_open.set(!profile_open()),
                                div { class: "avatar avatar--sm", "{user.avatar_initials}" }
                                span { class: "shell__profile-caret", "▾" }
                            }
                            if profile_open() {
                                div {
                                    class: "shell__dropdown-overlay",
                                    onclick: move |_| profile_open.set(false),
                                }
                                div { class: "shell__dropdown",
                                    div { class: "shell__dropdown-header",
                                        div { class: "shell__dropdown-name", "{user.display_name}" }
                                        div { class: "shell__dropdown-email", "{user.email}" }
                                    }
                                    button {
                                        r#type: "button",
                                        class: "shell__dropdown-item",
                                        onclick: move |_| {
                                            session.with_mut(|s| s.navigate(Page::Profile));
                                            profile_open.set(false);
                                        },
                                        "View Profile"
                                    }
                                    button {
                                        r#type: "button",
                                        class: "shell__dropdown-item shell__dropdown-item--danger",
                                        onclick: move |_| {
                                            profile_open.set(false);
                                            session.with_mut(|s| s.sign_out());
                                        },
                                        "Sign Out"
                                    }
                                }
                            }
                        }
                    }
                }

                main { class: "shell__content", {children} }
            }
        }
    }
}
