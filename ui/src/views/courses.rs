use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Current,
    Recommend,
    Prep,
}

struct Course {
    code: &'static str,
    name: &'static str,
    lecturer: &'static str,
    progress: u8,
    next_topic: &'static str,
    prep_items: &'static [&'static str],
    difficulty: &'static str,
}

static CURRENT_COURSES: [Course; 4] = [
    Course {
        code: "WIA2004",
        name: "Data Structures & Algorithms",
        lecturer: "Dr. Rosni Abdullah",
        progress: 65,
        next_topic: "Graph Algorithms - BFS & DFS",
        prep_items: &["Review adjacency list/matrix", "Install Visualgo bookmark"],
        difficulty: "Medium",
    },
    Course {
        code: "WIA2005",
        name: "Database Management Systems",
        lecturer: "Dr. Mas Idayu",
        progress: 50,
        next_topic: "Normalization - 3NF & BCNF",
        prep_items: &["Complete ER diagram exercise", "Read Chapter 7"],
        difficulty: "Medium",
    },
    Course {
        code: "WIA2006",
        name: "Software Engineering",
        lecturer: "Dr. Nazean Jomhari",
        progress: 40,
        next_topic: "Agile Development & Scrum",
        prep_items: &["Read Scrum Guide", "Watch Agile intro video"],
        difficulty: "Easy",
    },
    Course {
        code: "WIA2007",
        name: "Computer Networks",
        lecturer: "Dr. Ang Tan Fong",
        progress: 55,
        next_topic: "Transport Layer - TCP/UDP",
        prep_items: &["Install Wireshark", "Review OSI model layers"],
        difficulty: "Hard",
    },
];

static RECOMMENDED: [(&str, &str, &str, u8); 3] = [
    (
        "WIA3001",
        "Machine Learning",
        "Matches your Python skills and Data Science interest",
        95,
    ),
    (
        "WIA3003",
        "Human-Computer Interaction",
        "Complements your Software Engineering background",
        88,
    ),
    (
        "WIA3005",
        "Cloud Computing",
        "High demand skill, builds on your network knowledge",
        85,
    ),
];

struct PrepGuide {
    title: &'static str,
    software: &'static [&'static str],
    prereqs: &'static [&'static str],
    tips: &'static str,
    weeks: &'static str,
}

static PREP_GUIDES: [PrepGuide; 3] = [
    PrepGuide {
        title: "Machine Learning Fundamentals",
        software: &["Python 3.11+", "Jupyter Notebook", "scikit-learn", "TensorFlow"],
        prereqs: &["Linear Algebra", "Statistics", "Python Programming"],
        tips: "Start with Andrew Ng's ML course on Coursera for a head start. Focus on \
               understanding gradient descent and neural network basics.",
        weeks: "14 weeks",
    },
    PrepGuide {
        title: "Cloud Computing",
        software: &["Google Cloud CLI", "Docker", "Kubernetes", "Terraform"],
        prereqs: &["Computer Networks", "Operating Systems", "Basic Linux"],
        tips: "Set up a free-tier GCP account and complete the Qwiklabs introductory \
               quests before semester starts.",
        weeks: "14 weeks",
    },
    PrepGuide {
        title: "Human-Computer Interaction",
        software: &["Figma", "Adobe XD", "Miro Board"],
        prereqs: &["Software Engineering", "Basic Design Principles"],
        tips: "Start a design journal. Analyze 3-5 apps you use daily and document what \
               makes them user-friendly.",
        weeks: "13 weeks",
    },
];

#[component]
pub fn Courses() -> Element {
    let mut tab = use_signal(|| Tab::Current);
    let mut selected_course = use_signal(|| Option::<&'static str>::None);

    rsx! {
        div { class: "page page-courses",
            div { class: "page__header",
                div {
                    h1 { "AI Course Assistant" }
                    p { "Smart course management powered by Google Gemini." }
                }
                span { class: "pill pill--indigo", "✨ Gemini AI Active" }
            }

            div { class: "tabs",
                for (id, label) in [(Tab::Current, "My Courses"), (Tab::Recommend, "AI Recommendations"), (Tab::Prep, "Prep Guide")] {
                    button {
                        key: "{label}",
                        r#type: "button",
                        class: if tab() == id { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                        onclick: move |_| tab.set(id),
                        "{label}"
                    }
                }
            }

            if tab() == Tab::Current {
                div { class: "courses__overview",
                    for (icon, value, label) in [("📚", "6", "Enrolled Courses"), ("⚠️", "3", "Assignments Due"), ("📊", "52%", "Avg Progress")] {
                        div { key: "{label}", class: "card card--panel courses__overview-card",
                            span { class: "courses__overview-icon", "{icon}" }
                            div {
                                div { class: "card__value", "{value}" }
                                div { class: "card__label", "{label}" }
                            }
                        }
                    }
                }

                div { class: "courses__grid",
                    for course in &CURRENT_COURSES {
                        div {
                            key: "{course.code}",
                            class: if selected_course() == Some(course.code) { "card card--panel courses__course courses__course--selected" } else { "card card--panel courses__course" },
                            onclick: {
                                let code = course.code;
                                move |_| {
                                    let next = if selected_course() == Some(code) { None } else { Some(code) };
                                    selected_course.set(next);
                                }
                            },
                            div { class: "courses__course-head",
                                div {
                                    div { class: "courses__course-code", "{course.code}" }
                                    h3 { "{course.name}" }
                                    p { class: "courses__course-lecturer", "{course.lecturer}" }
                                }
                                span {
                                    class: match course.difficulty {
                                        "Easy" => "pill pill--green",
                                        "Medium" => "pill pill--amber",
                                        _ => "pill pill--red",
                                    },
                                    "{course.difficulty}"
                                }
                            }

                            div { class: "progress",
                                div { class: "progress__labels",
                                    span { "Progress" }
                                    span { "{course.progress}%" }
                                }
                                div { class: "progress__track",
                                    div {
                                        class: "progress__fill",
                                        style: "width: {course.progress}%",
                                    }
                                }
                            }

                            div { class: "courses__next-topic",
                                div { class: "courses__next-topic-label", "📅 Next Topic" }
                                p { "{course.next_topic}" }
                            }

                            if selected_course() == Some(course.code) {
                                div { class: "courses__prep",
                                    div { class: "courses__prep-label", "✨ AI Pre-Study Recommendations" }
                                    for item in course.prep_items {
                                        div { key: "{item}", class: "courses__prep-item", "✔ {item}" }
                                    }
                                    div { class: "courses__course-actions",
                                        button { r#type: "button", class: "button button--primary button--grow", "View Syllabus" }
                                        button { r#type: "button", class: "button button--outline", "⬇" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if tab() == Tab::Recommend {
                div { class: "courses__recommend",
                    div { class: "callout callout--indigo",
                        span { class: "callout__icon", "🧠" }
                        div {
                            p { class: "callout__title", "Gemini Course Analysis" }
                            p { class: "callout__body",
                                "Based on your current courses, skills, career interests, and GPA \
                                 trends, here are personalized course recommendations for next \
                                 semester. These selections optimize for both your academic growth \
                                 and career readiness."
                            }
                        }
                    }
                    for (i, (code, name, reason, match_pct)) in RECOMMENDED.iter().enumerate() {
                        div { key: "{code}", class: "card card--panel courses__recommendation",
                            div { class: "courses__recommendation-rank", {(i + 1).to_string()} }
                            div { class: "courses__recommendation-body",
                                div { class: "courses__recommendation-head",
                                    div {
                                        div { class: "courses__course-code", "{code}" }
                                        h3 { "{name}" }
                                        p { class: "courses__course-lecturer", "FSKTM" }
                                    }
                                    div { class: "match-badge",
                                        div { class: "match-badge__value", "{match_pct}%" }
                                        div { class: "match-badge__label", "AI match" }
                                    }
                                }
                                div { class: "courses__reason", "✨ {reason}" }
                                div { class: "courses__course-actions",
                                    button { r#type: "button", class: "button button--primary", "⭐ Add to Wishlist" }
                                    button { r#type: "button", class: "button button--outline", "View Details →" }
                                }
                            }
                        }
                    }
                }
            }

            if tab() == Tab::Prep {
                div { class: "courses__prep-guides",
                    div { class: "callout callout--amber",
                        span { class: "callout__icon", "💡" }
                        div {
                            p { class: "callout__title", "Next Semester Prep Guide" }
                            p { class: "callout__body",
                                "AI-generated preparation guide based on Spectrum/Moodle course \
                                 outlines for the upcoming semester."
                            }
                        }
                    }
                    for guide in &PREP_GUIDES {
                        div { key: "{guide.title}", class: "card card--panel courses__guide",
                            h3 { "{guide.title}" }
                            div { class: "courses__guide-columns",
                                div {
                                    div { class: "courses__guide-label", "🖥 Required Software" }
                                    div { class: "tag-row",
                                        for item in guide.software {
                                            span { key: "{item}", class: "tag tag--blue", "{item}" }
                                        }
                                    }
                                }
                                div {
                                    div { class: "courses__guide-label", "🎓 Prerequisites" }
                                    div { class: "tag-row",
                                        for item in guide.prereqs {
                                            span { key: "{item}", class: "tag tag--violet", "{item}" }
                                        }
                                    }
                                }
                            }
                            div { class: "courses__guide-tip",
                                div { class: "courses__guide-tip-label", "✨ AI Study Tip" }
                                p { "{guide.tips}" }
                            }
                            div { class: "courses__guide-duration", "🕘 Duration: {guide.weeks}" }
                        }
                    }
                }
            }
        }
    }
}
