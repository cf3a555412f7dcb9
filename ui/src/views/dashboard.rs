use dioxus::prelude::*;

use crate::core::session::{use_session, Page};

struct Stat {
    label: &'static str,
    value: &'static str,
    change: &'static str,
    icon: &'static str,
    target: Page,
}

static STATS: [Stat; 4] = [
    Stat {
        label: "Connections",
        value: "47",
        change: "+5 this week",
        icon: "👥",
        target: Page::Network,
    },
    Stat {
        label: "Active Courses",
        value: "6",
        change: "2 assignments due",
        icon: "📚",
        target: Page::Courses,
    },
    Stat {
        label: "Wellness Score",
        value: "85%",
        change: "+12% from last month",
        icon: "💗",
        target: Page::Wellness,
    },
    Stat {
        label: "Decisions Made",
        value: "23",
        change: "3 pending",
        icon: "✨",
        target: Page::Decision,
    },
];

static RECENT_ACTIVITY: [(&str, &str, &str); 5] = [
    ("👥", "New connection request from Ahmad R. (Engineering)", "2 min ago"),
    ("✅", "Assignment: Data Structures Quiz 3 - Due Tomorrow", "1 hour ago"),
    ("💬", "New message in 'ML Study Group' circle", "3 hours ago"),
    ("💗", "Weekly wellness check-in reminder", "5 hours ago"),
    ("✨", "AI suggested: Pre-read Chapter 5 for tomorrow's lecture", "Yesterday"),
];

static SCHEDULE: [(&str, &str, &str, &str); 3] = [
    ("Data Structures & Algorithms", "9:00 AM", "DK3", "today"),
    ("Database Management Systems", "2:00 PM", "DK7", "today"),
    ("Software Engineering", "10:00 AM", "DK1", "tomorrow"),
];

static SUGGESTED: [(&str, &str, &[&str], u8); 3] = [
    ("Wei Ting C.", "Medicine", &["Research", "Data Analysis"], 92),
    ("Sarah L.", "Linguistics", &["NLP", "Writing"], 88),
    ("Raj K.", "Engineering", &["IoT", "Hardware"], 85),
];

static INSIGHTS: [(&str, &str, &str); 4] = [
    (
        "📚 Pre-study Alert",
        "Install Python 3.11 and Jupyter Notebook before next week's ML class. Tutorial will use scikit-learn.",
        "high",
    ),
    (
        "🤝 Team Opportunity",
        "3 Engineering students are looking for a CS partner for their IoT project. Your Python skills are a perfect match!",
        "medium",
    ),
    (
        "💡 Study Tip",
        "Based on your past quiz scores, spend 30 more minutes on graph algorithms before Thursday's test.",
        "medium",
    ),
    (
        "🧘 Wellness Reminder",
        "You've been studying for 4 hours straight. Consider a 15-min break. Here are some breathing exercises.",
        "low",
    ),
];

#[component]
pub fn Dashboard() -> Element {
    let mut session = use_session();
    let user = session().user;

    rsx! {
        div { class: "page page-dashboard",
            div { class: "dashboard__banner",
                div {
                    h1 { "Good morning, {user.display_name}! 👋" }
                    p {
                        "You have 2 classes today and 3 pending connection requests. Your \
                         wellness score is looking great!"
                    }
                }
                div { class: "dashboard__banner-pills",
                    span { class: "pill pill--glass", "🔥 7-day streak!" }
                    span { class: "pill pill--glass", "🎯 {user.year_label}" }
                }
            }

            div { class: "dashboard__stats",
                for stat in &STATS {
                    button {
                        key: "{stat.label}",
                        r#type: "button",
                        class: "card card--stat",
                        onclick: {
                            let target = stat.target;
                            move |_| session.with_mut(|s| s.navigate(target))
                        },
                        div { class: "card--stat__icon", "{stat.icon}" }
                        div { class: "card__value", "{stat.value}" }
                        div { class: "card__label", "{stat.label}" }
                        div { class: "card--stat__change", "↗ {stat.change}" }
                    }
                }
            }

            div { class: "dashboard__columns",
                div { class: "card card--panel dashboard__activity",
                    div { class: "card__header",
                        h2 { "Recent Activity" }
                        button { r#type: "button", class: "link-button", "View All" }
                    }
                    for (icon, text, time) in RECENT_ACTIVITY {
                        div { key: "{text}", class: "dashboard__activity-row",
                            span { class: "dashboard__activity-icon", "{icon}" }
                            p { "{text}" }
                            span { class: "dashboard__activity-time", "{time}" }
                        }
                    }
                }

                div { class: "card card--panel",
                    div { class: "card__header",
                        h2 { "Schedule" }
                        span { class: "card__hint", "📅 Today" }
                    }
                    for (name, time, room, status) in SCHEDULE {
                        div { key: "{name}", class: "dashboard__schedule-row",
                            div { class: "dashboard__schedule-meta",
                                div { class: "dashboard__schedule-name", "{name}" }
                                div { class: "dashboard__schedule-when", "🕘 {time} · {room}" }
                            }
                            span {
                                class: if status == "today" { "pill pill--indigo" } else { "pill pill--muted" },
                                "{status}"
                            }
                        }
                    }
                }
            }

            div { class: "dashboard__columns dashboard__columns--even",
                div { class: "card card--panel",
                    div { class: "card__header",
                        h2 { "Suggested Connections" }
                        button {
                            r#type: "button",
                            class: "link-button",
                            onclick: move |_| session.with_mut(|s| s.navigate(Page::Network)),
                            "See All"
                        }
                    }
                    for (name, faculty, skills, match_pct) in SUGGESTED {
                        div { key: "{name}", class: "dashboard__person",
                            div { class: "avatar avatar--md", {name.chars().next().unwrap_or('?').to_string()} }
                            div { class: "dashboard__person-meta",
                                div { class: "dashboard__person-name", "{name}" }
                                div { class: "dashboard__person-faculty", "{faculty}" }
                                div { class: "tag-row",
                                    for skill in skills {
                                        span { key: "{skill}", class: "tag", "{skill}" }
                                    }
                                }
                            }
                            div { class: "match-badge",
                                div { class: "match-badge__value", "{match_pct}%" }
                                div { class: "match-badge__label", "match" }
                            }
                        }
                    }
                }

                div { class: "card card--panel card--tinted",
                    div { class: "card__header",
                        h2 { "✨ AI Insights" }
                        span { class: "pill pill--indigo", "Gemini" }
                    }
                    for (title, desc, priority) in INSIGHTS {
                        div { key: "{title}", class: "dashboard__insight",
                            div { class: "dashboard__insight-head",
                                h3 { "{title}" }
                                span {
                                    class: match priority {
                                        "high" => "pill pill--red",
                                        "medium" => "pill pill--amber",
                                        _ => "pill pill--muted",
                                    },
                                    "{priority}"
                                }
                            }
                            p { "{desc}" }
                        }
                    }
                }
            }
        }
    }
}
