use dioxus::prelude::*;

use crate::core::session::{use_session, Page};

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    points: [&'static str; 4],
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: "👥",
        title: "Cross-Disciplinary Network",
        desc: "Connect with students across all faculties. Find teammates with complementary \
               skills for projects, research, and competitions.",
        points: [
            "AI-powered skill matching",
            "Faculty-cross teams",
            "Academic interest circles",
            "Talent pool for recruiters",
        ],
    },
    Feature {
        icon: "🧠",
        title: "AI Course Assistant",
        desc: "Get personalized course recommendations, prep guides, and syllabus analysis \
               powered by Google Gemini.",
        points: [
            "Syllabus auto-analysis",
            "Pre-study guides",
            "Software prep alerts",
            "Smart scheduling",
        ],
    },
    Feature {
        icon: "💗",
        title: "Wellness & Mental Health",
        desc: "Daily mood tracking, anonymous sharing, AI counseling support, and curated \
               relaxation resources.",
        points: [
            "Mood check-in tracker",
            "Anonymous tree hole",
            "AI wellness chat",
            "Relaxation resources",
        ],
    },
    Feature {
        icon: "✨",
        title: "Decision Helper",
        desc: "AI-assisted decision making for academic and daily choices. Should you skip \
               that lecture? Let AI help you decide.",
        points: [
            "Smart scheduling",
            "Priority analysis",
            "Moodle integration",
            "Time management",
        ],
    },
];

static STEPS: [(&str, &str, &str, &str); 3] = [
    (
        "01",
        "🛡",
        "Sign in with Google",
        "One-click login with your university Google account. No extra passwords needed.",
    ),
    (
        "02",
        "🌐",
        "Set Up Your Profile",
        "Add your faculty, skills, and interests. Our AI starts building your personalized experience.",
    ),
    (
        "03",
        "✨",
        "Explore & Connect",
        "Discover courses, find teammates, and access wellness resources tailored just for you.",
    ),
];

static TECH_STACK: [(&str, &str); 5] = [
    ("🤖", "Google Gemini AI"),
    ("📱", "Flutter"),
    ("🔥", "Firebase"),
    ("☁️", "Google Cloud"),
    ("🧠", "Vertex AI"),
];

static TEAM: [(&str, &str, &str, &str); 4] = [
    ("S", "Sek", "Tech Lead / Full Stack", "Backend & frontend integration"),
    ("J", "Jolin", "Developer (Full Stack)", "Flutter & database development"),
    ("R", "Ruo Qian", "Developer", "Coding & tech stack learning"),
    ("JQ", "Jia Qian", "PM / Strategist", "Planning, APIs & business model"),
];

static TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "UniHub helped me find a CS student for my linguistics research project. \
         Cross-faculty collaboration has never been easier!",
        "Sarah L.",
        "Faculty of Languages",
    ),
    (
        "The AI course assistant predicted exactly what software I'd need next semester. \
         I was fully prepared on day one!",
        "Ahmad R.",
        "Faculty of Engineering",
    ),
    (
        "The mood tracking and wellness features helped me realize I needed to take breaks. \
         My mental health has improved so much.",
        "Wei Ting C.",
        "Faculty of Medicine",
    ),
];

#[component]
pub fn Landing() -> Element {
    let mut session = use_session();
    let go_login = move |_| session.with_mut(|s| s.navigate(Page::Login));

    rsx! {
        div { class: "landing",
            nav { class: "landing__navbar",
                div { class: "landing__navbar-inner",
                    div { class: "landing__logo",
                        span { class: "landing__logo-badge", "🎓" }
                        span { class: "landing__logo-mark", "UniHub" }
                    }
                    div { class: "landing__navbar-links",
                        a { href: "#features", "Features" }
                        a { href: "#how", "How It Works" }
                        a { href: "#team", "Team" }
                    }
                    div { class: "landing__navbar-actions",
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: go_login,
                            "Log In"
                        }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: go_login,
                            "Get Started"
                        }
                    }
                }
            }

            section { class: "landing__hero",
                div { class: "landing__hero-badge", "✨ Powered by Google Gemini AI" }
                h1 { class: "landing__hero-title",
                    span { "Campus Life," }
                    br {}
                    span { class: "landing__hero-title-accent", "Connected." }
                }
                p { class: "landing__hero-lead",
                    "The all-in-one platform for university students. Connect across faculties, \
                     get AI-powered course guidance, and take care of your well-being — all in \
                     one place."
                }
                div { class: "landing__hero-actions",
                    button {
                        r#type: "button",
                        class: "button button--primary button--lg",
                        onclick: go_login,
                        "Start Your Journey →"
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline button--lg",
                        "Watch Demo"
                    }
                }

                // Framed dashboard preview, all static
                div { class: "landing__preview",
                    div { class: "landing__preview-chrome",
                        span { class: "landing__preview-dot landing__preview-dot--red" }
                        span { class: "landing__preview-dot landing__preview-dot--yellow" }
                        span { class: "landing__preview-dot landing__preview-dot--green" }
                        span { class: "landing__preview-url", "unihub.app/dashboard" }
                    }
                    div { class: "landing__preview-body",
                        div { class: "landing__preview-sidebar",
                            div { class: "landing__preview-user",
                                div { class: "avatar avatar--md", "JQ" }
                                div {
                                    div { class: "landing__preview-user-name", "Jia Qian" }
                                    div { class: "landing__preview-user-sub", "CS & IT" }
                                }
                            }
                            for (i, item) in ["Dashboard", "Network", "Courses", "Wellness"].iter().enumerate() {
                                div {
                                    key: "{item}",
                                    class: if i == 0 { "landing__preview-nav landing__preview-nav--active" } else { "landing__preview-nav" },
                                    "{item}"
                                }
                            }
                        }
                        div { class: "landing__preview-main",
                            div { class: "landing__preview-stats",
                                for (label, value) in [("Connections", "47"), ("Courses", "6"), ("Wellness Score", "85%")] {
                                    div { key: "{label}", class: "card card--tight",
                                        div { class: "card__label", "{label}" }
                                        div { class: "card__value", "{value}" }
                                    }
                                }
                            }
                            div { class: "card",
                                div { class: "card__title", "AI Course Recommendations" }
                                for course in ["Data Structures & Algorithms", "Machine Learning Fundamentals", "UI/UX Design Principles"] {
                                    div { key: "{course}", class: "landing__preview-row", "{course}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "landing__sdg",
                div {
                    div { class: "landing__sdg-kicker", "Supporting UN Sustainable Development Goals" }
                    div { class: "landing__sdg-title",
                        "SDG 3: Good Health & Well-being · SDG 4: Quality Education"
                    }
                }
                div { class: "landing__sdg-icons",
                    span { "💗" }
                    span { "📖" }
                }
            }

            section { id: "features", class: "landing__section",
                div { class: "landing__section-head",
                    div { class: "landing__section-kicker", "⚡ Core Features" }
                    h2 { "Everything you need for campus life" }
                    p { "From cross-faculty networking to AI-powered study tools — UniHub has you covered." }
                }
                div { class: "landing__features",
                    for feature in &FEATURES {
                        div { key: "{feature.title}", class: "landing__feature",
                            div { class: "landing__feature-icon", "{feature.icon}" }
                            h3 { "{feature.title}" }
                            p { "{feature.desc}" }
                            ul {
                                for point in feature.points {
                                    li { key: "{point}", "{point}" }
                                }
                            }
                        }
                    }
                }
            }

            section { id: "how", class: "landing__section landing__section--alt",
                div { class: "landing__section-head",
                    h2 { "Get started in 3 steps" }
                    p { "Join the platform in seconds and unlock your full campus potential." }
                }
                div { class: "landing__steps",
                    for (step, icon, title, desc) in STEPS {
                        div { key: "{step}", class: "landing__step",
                            div { class: "landing__step-icon",
                                "{icon}"
                                span { class: "landing__step-number", "{step}" }
                            }
                            h3 { "{title}" }
                            p { "{desc}" }
                        }
                    }
                }
            }

            section { class: "landing__section",
                div { class: "landing__section-head",
                    h2 { "Built with Cutting-Edge Technology" }
                    p { "Powered by Google's ecosystem" }
                }
                div { class: "landing__tech",
                    for (emoji, name) in TECH_STACK {
                        div { key: "{name}", class: "landing__tech-chip",
                            span { "{emoji}" }
                            span { "{name}" }
                        }
                    }
                }
            }

            section { id: "team", class: "landing__section landing__section--alt",
                div { class: "landing__section-head",
                    h2 { "Meet the Team" }
                    p { "Built with 💜 by UM students for UM students" }
                }
                div { class: "landing__team",
                    for (initial, name, role, desc) in TEAM {
                        div { key: "{name}", class: "landing__member",
                            div { class: "avatar avatar--lg", "{initial}" }
                            h3 { "{name}" }
                            div { class: "landing__member-role", "{role}" }
                            p { "{desc}" }
                        }
                    }
                }
            }

            section { class: "landing__section",
                div { class: "landing__section-head",
                    h2 { "What Students Say" }
                }
                div { class: "landing__testimonials",
                    for (quote, name, faculty) in TESTIMONIALS {
                        div { key: "{name}", class: "landing__testimonial",
                            div { class: "landing__stars", "★★★★★" }
                            p { class: "landing__quote", "\"{quote}\"" }
                            div { class: "landing__testimonial-author",
                                div { class: "avatar avatar--sm", {name.chars().next().unwrap_or('?').to_string()} }
                                div {
                                    div { class: "landing__testimonial-name", "{name}" }
                                    div { class: "landing__testimonial-faculty", "{faculty}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "landing__cta",
                h2 { "Ready to transform your campus experience?" }
                p { "Join thousands of UM students already using UniHub to connect, learn, and thrive." }
                button {
                    r#type: "button",
                    class: "button button--inverse button--lg",
                    onclick: go_login,
                    "Get Started for Free →"
                }
            }

            footer { class: "landing__footer",
                div { class: "landing__logo",
                    span { class: "landing__logo-badge", "🎓" }
                    span { class: "landing__logo-mark landing__logo-mark--light", "UniHub" }
                }
                p { "© 2025 UniHub. Built for Google Solution Challenge." }
                div { class: "landing__footer-tags",
                    span { "SDG 3 & 4" }
                    span { "·" }
                    span { "University of Malaya" }
                }
            }
        }
    }
}
