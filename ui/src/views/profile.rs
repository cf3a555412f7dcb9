use dioxus::prelude::*;

use crate::core::session::use_session;

static SKILLS: [(&str, u8); 6] = [
    ("Python", 90),
    ("Java", 75),
    ("Flutter", 40),
    ("Firebase", 50),
    ("Machine Learning", 60),
    ("Data Analysis", 70),
];

static INTERESTS: [&str; 8] = [
    "Artificial Intelligence",
    "Machine Learning",
    "EdTech",
    "Cross-disciplinary Research",
    "Cloud Computing",
    "Data Science",
    "UX Design",
    "Project Management",
];

static QUICK_STATS: [(&str, &str, &str); 4] = [
    ("👥", "47", "Connections"),
    ("📚", "6", "Courses"),
    ("💗", "85%", "Wellness"),
    ("🌐", "4", "Circles"),
];

static ACHIEVEMENTS: [(&str, &str, &str, &str); 4] = [
    ("🌟", "Early Adopter", "Among the first 100 users", "Jan 2025"),
    ("🦋", "Social Butterfly", "Connected with 40+ students", "Feb 2025"),
    ("🔥", "Streak Master", "7-day wellness check-in streak", "Feb 2025"),
    ("🤝", "Helper", "Answered 10+ questions in circles", "Feb 2025"),
];

static MY_CIRCLES: [(&str, u32); 4] = [
    ("ML Study Group", 34),
    ("Hackathon Warriors", 52),
    ("UI/UX Design", 28),
    ("Campus Musicians", 41),
];

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let user = session().user;

    rsx! {
        div { class: "page page-profile",
            div { class: "card card--panel profile__header",
                div { class: "profile__cover" }
                div { class: "profile__header-body",
                    div { class: "profile__identity",
                        div { class: "avatar avatar--xl", "{user.avatar_initials}" }
                        div { class: "profile__identity-meta",
                            h1 { "{user.display_name}" }
                            p { "{user.faculty}" }
                        }
                        button { r#type: "button", class: "button button--primary", "✎ Edit Profile" }
                    }

                    div { class: "profile__info-grid",
                        for (icon, label, value) in [
                            ("✉️", "Email", user.email),
                            ("🎓", "Year", user.year_label),
                            ("📍", "Campus", "University of Malaya"),
                            ("📅", "Joined", "January 2025"),
                        ] {
                            div { key: "{label}", class: "profile__info-item",
                                span { class: "profile__info-icon", "{icon}" }
                                div {
                                    div { class: "profile__info-label", "{label}" }
                                    div { class: "profile__info-value", "{value}" }
                                }
                            }
                        }
                    }

                    div { class: "profile__links",
                        for label in ["GitHub", "LinkedIn", "Portfolio"] {
                            button { key: "{label}", r#type: "button", class: "chip", "{label}" }
                        }
                    }
                }
            }

            div { class: "profile__columns",
                div { class: "profile__main",
                    div { class: "card card--panel",
                        h2 { class: "card__title", "⭐ About" }
                        p { class: "profile__about",
                            "Year 3 Computer Science student at University of Malaya, passionate \
                             about AI/ML and cross-disciplinary collaboration. Currently exploring \
                             the intersection of technology and education. Project Manager for the \
                             UniHub hackathon project. Looking to connect with students from \
                             diverse backgrounds for research and innovation."
                        }
                    }

                    div { class: "card card--panel",
                        h2 { class: "card__title", "💻 Skills & Proficiency" }
                        div { class: "profile__skills",
                            for (name, level) in SKILLS {
                                div { key: "{name}",
                                    div { class: "progress__labels",
                                        span { "{name}" }
                                        span { "{level}%" }
                                    }
                                    div { class: "progress__track",
                                        div { class: "progress__fill", style: "width: {level}%" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "card card--panel",
                        h2 { class: "card__title", "📖 Academic Interests" }
                        div { class: "tag-row",
                            for interest in INTERESTS {
                                span { key: "{interest}", class: "tag", "{interest}" }
                            }
                        }
                    }
                }

                div { class: "profile__side",
                    div { class: "card card--panel",
                        h2 { class: "card__title", "Quick Stats" }
                        div { class: "profile__stats",
                            for (icon, value, label) in QUICK_STATS {
                                div { key: "{label}", class: "profile__stat",
                                    span { class: "profile__stat-icon", "{icon}" }
                                    div { class: "profile__stat-value", "{value}" }
                                    div { class: "profile__stat-label", "{label}" }
                                }
                            }
                        }
                    }

                    div { class: "card card--panel",
                        h2 { class: "card__title", "🏆 Achievements" }
                        for (icon, title, desc, date) in ACHIEVEMENTS {
                            div { key: "{title}", class: "profile__achievement",
                                span { class: "profile__achievement-icon", "{icon}" }
                                div { class: "profile__achievement-meta",
                                    div { class: "profile__achievement-title", "{title}" }
                                    div { class: "profile__achievement-desc", "{desc}" }
                                }
                                span { class: "profile__achievement-date", "{date}" }
                            }
                        }
                    }

                    div { class: "card card--panel",
                        div { class: "card__header",
                            h2 { "My Circles" }
                            button { r#type: "button", class: "link-button", "View All" }
                        }
                        for (name, members) in MY_CIRCLES {
                            div { key: "{name}", class: "profile__circle",
                                span { class: "profile__circle-icon", "🏅" }
                                div { class: "profile__circle-meta",
                                    div { class: "profile__circle-name", "{name}" }
                                    div { class: "profile__circle-members", "{members} members" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
