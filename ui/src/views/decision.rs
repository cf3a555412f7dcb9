use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Decisions,
    Schedule,
    Priorities,
}

struct PendingDecision {
    id: u8,
    title: &'static str,
    context: &'static str,
    recommendation: &'static str,
    reasoning: &'static str,
    urgency: &'static str,
    deadline: &'static str,
    category: &'static str,
}

static PENDING_DECISIONS: [PendingDecision; 3] = [
    PendingDecision {
        id: 1,
        title: "Should I attend Database lecture tomorrow?",
        context: "The topic is Normalization (3NF). I've already read the chapter.",
        recommendation: "attend",
        reasoning: "While you've read the chapter, Dr. Mas Idayu typically gives practical \
                    examples not in the textbook. Plus, attendance affects 10% of your grade. \
                    The quiz next week covers this topic.",
        urgency: "medium",
        deadline: "Tomorrow, 2:00 PM",
        category: "Academic",
    },
    PendingDecision {
        id: 2,
        title: "Join the IoT Hackathon team or focus on assignments?",
        context: "Ahmad from Engineering invited me. 3 assignments due next week.",
        recommendation: "balance",
        reasoning: "The hackathon is a great networking opportunity, but you have 3 assignments \
                    due. Suggestion: Accept the invitation but negotiate a lighter role. \
                    Complete Assignment 1 (easiest) tonight, leaving 5 days for the other 2.",
        urgency: "high",
        deadline: "Registration closes Friday",
        category: "Opportunity",
    },
    PendingDecision {
        id: 3,
        title: "Switch from Java to Python for the ML project?",
        context: "Team is split. Java is more familiar but Python has better ML libraries.",
        recommendation: "switch",
        reasoning: "For an ML project, Python is strongly recommended. Libraries like \
                    scikit-learn, TensorFlow, and pandas will save 60%+ development time. Your \
                    Python fundamentals are solid enough. The learning curve will also benefit \
                    your future courses.",
        urgency: "medium",
        deadline: "Team meeting Wednesday",
        category: "Technical",
    },
];

static TIME_BLOCKS: [(&str, &str, &str, &str); 10] = [
    ("8:00 AM", "Morning Routine", "personal", "1h"),
    ("9:00 AM", "Data Structures Lecture", "class", "2h"),
    ("11:00 AM", "Assignment 1 - Database", "assignment", "1.5h"),
    ("12:30 PM", "Lunch Break", "break", "1h"),
    ("1:30 PM", "Study: Graph Algorithms", "study", "2h"),
    ("3:30 PM", "ML Study Group Meeting", "social", "1.5h"),
    ("5:00 PM", "Exercise / Free Time", "personal", "1h"),
    ("6:00 PM", "Dinner", "break", "1h"),
    ("7:00 PM", "Assignment 2 - Software Eng", "assignment", "2h"),
    ("9:00 PM", "Wellness Check-in & Wind Down", "personal", "1h"),
];

static SCHEDULE_INSIGHTS: [(&str, &str); 3] = [
    ("⚡", "Your most productive hours are 9-11 AM. Heavy tasks are scheduled accordingly."),
    ("☕", "Break inserted after 2h study blocks to prevent burnout."),
    ("🤝", "Social activity placed at 3:30 PM for optimal energy."),
];

static TIME_DISTRIBUTION: [(&str, &str, u8, &str); 5] = [
    ("Classes", "2h", 20, "indigo"),
    ("Assignments", "3.5h", 35, "amber"),
    ("Self Study", "2h", 20, "violet"),
    ("Social", "1.5h", 15, "green"),
    ("Personal", "3h", 30, "blue"),
];

struct Quadrant {
    heading: &'static str,
    tone: &'static str,
    items: &'static [(&'static str, &'static str, &'static str)],
}

static QUADRANTS: [Quadrant; 4] = [
    Quadrant {
        heading: "🔴 Urgent & Important",
        tone: "red",
        items: &[
            ("Database Assignment - Normalization", "Tomorrow", "15%"),
            ("Study for DSA Quiz", "Thursday", "10%"),
        ],
    },
    Quadrant {
        heading: "🔵 Important, Not Urgent",
        tone: "blue",
        items: &[
            ("Software Eng Group Project Plan", "Next Week", "25%"),
            ("Review ML prerequisites", "Before Next Sem", "—"),
        ],
    },
    Quadrant {
        heading: "🟡 Urgent, Not Important",
        tone: "amber",
        items: &[
            ("Reply to hackathon team invitation", "Friday", "—"),
            ("Submit study circle availability", "Wednesday", "—"),
        ],
    },
    Quadrant {
        heading: "⚪ Can Wait",
        tone: "gray",
        items: &[
            ("Organize notes folder", "Whenever", "—"),
            ("Update LinkedIn profile", "Whenever", "—"),
        ],
    },
];

fn recommendation_label(recommendation: &str) -> &'static str {
    match recommendation {
        "attend" => "✅ Attend",
        "switch" => "🔄 Switch",
        _ => "⚖️ Balance Both",
    }
}

#[component]
pub fn Decision() -> Element {
    let mut tab = use_signal(|| Tab::Decisions);
    let mut expanded = use_signal(|| Option::<u8>::None);

    rsx! {
        div { class: "page page-decision",
            div { class: "page__header",
                div {
                    h1 { "Decision Helper" }
                    p { "AI-powered decisions and time management for student life." }
                }
                span { class: "pill pill--indigo", "🧠 Gemini Decision Engine" }
            }

            div { class: "tabs",
                for (id, label) in [(Tab::Decisions, "Decisions"), (Tab::Schedule, "Smart Schedule"), (Tab::Priorities, "Priorities")] {
                    button {
                        key: "{label}",
                        r#type: "button",
                        class: if tab() == id { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                        onclick: move |_| tab.set(id),
                        "{label}"
                    }
                }
            }

            if tab() == Tab::Decisions {
                div { class: "decision__list",
                    div { class: "card card--panel decision__ask",
                        h3 { class: "card__title", "⚡ Need help deciding?" }
                        div { class: "decision__ask-row",
                            input {
                                r#type: "text",
                                placeholder: "Try: \"Should I take 5 courses or 4 next semester?\"",
                            }
                            button { r#type: "button", class: "button button--primary", "✨ Analyze" }
                        }
                    }

                    div { class: "decision__list-heading",
                        h2 { "Pending Decisions" }
                        span { class: "tabs__badge", "{PENDING_DECISIONS.len()}" }
                    }

                    for decision in &PENDING_DECISIONS {
                        div { key: "{decision.id}", class: "card card--panel decision__item",
                            button {
                                r#type: "button",
                                class: "decision__item-toggle",
                                onclick: {
                                    let id = decision.id;
                                    move |_| {
                                        let next = if expanded() == Some(id) { None } else { Some(id) };
                                        expanded.set(next);
                                    }
                                },
                                div { class: "decision__item-pills",
                                    span {
                                        class: match decision.urgency {
                                            "high" => "pill pill--red",
                                            "medium" => "pill pill--amber",
                                            _ => "pill pill--muted",
                                        },
                                        "{decision.urgency} priority"
                                    }
                                    span { class: "pill pill--indigo", "{decision.category}" }
                                }
                                h3 { "{decision.title}" }
                                p { class: "decision__item-context", "{decision.context}" }
                                span { class: "decision__item-deadline", "🕘 {decision.deadline}" }
                            }

                            if expanded() == Some(decision.id) {
                                div { class: "decision__item-detail",
                                    div { class: "callout callout--indigo",
                                        span { class: "callout__icon", "✨" }
                                        div {
                                            p { class: "callout__title",
                                                "AI Recommendation "
                                                span { class: "pill pill--green", {recommendation_label(decision.recommendation)} }
                                            }
                                            p { class: "callout__body", "{decision.reasoning}" }
                                        }
                                    }
                                    div { class: "decision__item-actions",
                                        button { r#type: "button", class: "button button--primary button--grow", "✓ Accept" }
                                        button { r#type: "button", class: "button button--soft button--grow", "✕ Dismiss" }
                                        button { r#type: "button", class: "button button--outline", "More Options →" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if tab() == Tab::Schedule {
                div { class: "decision__schedule",
                    div { class: "card card--panel decision__timeline",
                        div { class: "card__header",
                            h2 { "AI-Optimized Daily Schedule" }
                            span { class: "pill pill--indigo", "Today" }
                        }
                        for (time, task, kind, duration) in TIME_BLOCKS {
                            div { key: "{time}", class: "decision__block",
                                span { class: "decision__block-time", "{time}" }
                                span { class: "decision__block-dot decision__block-dot--{kind}" }
                                div { class: "decision__block-card decision__block-card--{kind}",
                                    span { "{task}" }
                                    span { class: "decision__block-duration", "{duration}" }
                                }
                            }
                        }
                    }

                    div { class: "decision__schedule-side",
                        div { class: "card card--panel card--tinted",
                            h3 { class: "card__title", "🧠 AI Schedule Insights" }
                            for (icon, text) in SCHEDULE_INSIGHTS {
                                div { key: "{text}", class: "decision__insight",
                                    span { "{icon}" }
                                    p { "{text}" }
                                }
                            }
                        }

                        div { class: "card card--panel",
                            h3 { class: "card__title", "Time Distribution" }
                            for (label, hours, pct, tone) in TIME_DISTRIBUTION {
                                div { key: "{label}", class: "decision__distribution-row",
                                    div { class: "progress__labels",
                                        span {
                                            span { class: "decision__block-dot decision__block-dot--{tone}" }
                                            " {label}"
                                        }
                                        span { "{hours}" }
                                    }
                                    div { class: "progress__track",
                                        div {
                                            class: "progress__fill progress__fill--{tone}",
                                            style: "width: {pct}%",
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if tab() == Tab::Priorities {
                div { class: "decision__priorities",
                    div { class: "callout callout--amber",
                        span { class: "callout__icon", "⚠️" }
                        div {
                            p { class: "callout__title", "Priority Matrix" }
                            p { class: "callout__body",
                                "AI-analyzed task priorities based on deadlines, weight, and \
                                 your academic goals."
                            }
                        }
                    }

                    div { class: "decision__matrix",
                        for quadrant in &QUADRANTS {
                            div {
                                key: "{quadrant.heading}",
                                class: "card card--panel decision__quadrant decision__quadrant--{quadrant.tone}",
                                h3 { class: "decision__quadrant-heading", "{quadrant.heading}" }
                                for (task, due, weight) in quadrant.items {
                                    div { key: "{task}", class: "decision__quadrant-item",
                                        div { class: "decision__quadrant-task", "{task}" }
                                        div { class: "decision__quadrant-meta",
                                            span { "🕘 {due}" }
                                            if *weight != "—" {
                                                span { "📊 {weight}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
