use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Discover,
    Circles,
    Requests,
}

struct Student {
    name: &'static str,
    faculty: &'static str,
    year: &'static str,
    skills: &'static [&'static str],
    match_pct: u8,
    bio: &'static str,
    interests: &'static [&'static str],
    avatar: &'static str,
}

static STUDENTS: [Student; 6] = [
    Student {
        name: "Ahmad Razif",
        faculty: "Engineering",
        year: "Year 2",
        skills: &["IoT", "Arduino", "C++"],
        match_pct: 95,
        bio: "Passionate about embedded systems and smart devices.",
        interests: &["Robotics", "AI"],
        avatar: "AR",
    },
    Student {
        name: "Sarah Lim",
        faculty: "Linguistics",
        year: "Year 3",
        skills: &["NLP", "Writing", "Research"],
        match_pct: 91,
        bio: "Exploring the intersection of language and technology.",
        interests: &["Computational Linguistics", "Translation"],
        avatar: "SL",
    },
    Student {
        name: "Wei Ting Chong",
        faculty: "Medicine",
        year: "Year 4",
        skills: &["Data Analysis", "R", "SPSS"],
        match_pct: 88,
        bio: "Med student interested in health tech and data science.",
        interests: &["Health Tech", "Biostatistics"],
        avatar: "WC",
    },
    Student {
        name: "Priya Nair",
        faculty: "Business",
        year: "Year 2",
        skills: &["Marketing", "Design", "Strategy"],
        match_pct: 85,
        bio: "Business strategist with a design thinking mindset.",
        interests: &["Startups", "UX Design"],
        avatar: "PN",
    },
    Student {
        name: "Kai Jie Tan",
        faculty: "Computer Science",
        year: "Year 3",
        skills: &["Python", "ML", "Cloud"],
        match_pct: 82,
        bio: "Building ML models and deploying them on the cloud.",
        interests: &["Deep Learning", "MLOps"],
        avatar: "KT",
    },
    Student {
        name: "Nurul Aisyah",
        faculty: "Education",
        year: "Year 2",
        skills: &["Pedagogy", "Content Creation", "EdTech"],
        match_pct: 79,
        bio: "Future educator passionate about technology in learning.",
        interests: &["EdTech", "Gamification"],
        avatar: "NA",
    },
];

static CIRCLES: [(&str, u32, u32, &str); 6] = [
    ("Machine Learning Study Group", 34, 156, "💻"),
    ("UI/UX Design Circle", 28, 89, "🎨"),
    ("Research Methods Workshop", 19, 45, "🧪"),
    ("Hackathon Warriors", 52, 203, "🌐"),
    ("Academic Writing Hub", 15, 67, "📖"),
    ("Campus Musicians", 41, 112, "🎵"),
];

static REQUESTS: [(&str, &str, &str, &str); 3] = [
    (
        "Li Wei Chen",
        "Physics",
        "Hi! I'm looking for a CS partner for my quantum computing research project.",
        "LC",
    ),
    (
        "Aisha binti Yusof",
        "Architecture",
        "Would love to collaborate on a smart building design project!",
        "AY",
    ),
    (
        "Marcus Tan",
        "Data Science",
        "Interested in joining your ML study group. I have experience with PyTorch.",
        "MT",
    ),
];

static FACULTIES: [&str; 10] = [
    "All Faculties",
    "Computer Science",
    "Engineering",
    "Medicine",
    "Business",
    "Linguistics",
    "Education",
    "Science",
    "Law",
    "Arts",
];

/// Matches the original discover filter: faculty must match the selected
/// chip, and the query must appear in the name or one of the skills.
fn matches_filters(student: &Student, faculty: &str, query: &str) -> bool {
    let matches_faculty = faculty == "All Faculties" || student.faculty == faculty;
    let query = query.to_lowercase();
    let matches_query = query.is_empty()
        || student.name.to_lowercase().contains(&query)
        || student
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&query));
    matches_faculty && matches_query
}

#[component]
pub fn Network() -> Element {
    let mut tab = use_signal(|| Tab::Discover);
    let mut selected_faculty = use_signal(|| "All Faculties".to_string());
    let mut search_query = use_signal(String::new);
    let mut show_filters = use_signal(|| false);

    let visible: Vec<&Student> = STUDENTS
        .iter()
        .filter(|s| matches_filters(s, &selected_faculty(), &search_query()))
        .collect();

    rsx! {
        div { class: "page page-network",
            div { class: "page__header",
                div {
                    h1 { "Cross-Disciplinary Network" }
                    p { "Discover students across faculties and build your academic network." }
                }
                span { class: "pill pill--indigo", "👥 500+ Students" }
            }

            div { class: "tabs",
                for (id, label) in [(Tab::Discover, "Discover"), (Tab::Circles, "Circles"), (Tab::Requests, "Requests")] {
                    button {
                        key: "{label}",
                        r#type: "button",
                        class: if tab() == id { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                        onclick: move |_| tab.set(id),
                        "{label}"
                        if id == Tab::Requests {
                            span { class: "tabs__badge", "3" }
                        }
                    }
                }
            }

            if tab() == Tab::Discover {
                div { class: "network__toolbar",
                    div { class: "network__search",
                        span { "🔍" }
                        input {
                            r#type: "text",
                            value: "{search_query()}",
                            placeholder: "Search by name, skills, or interests...",
                            oninput: move |evt| search_query.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline",
                        onclick: move |_| show_filters.set(!show_filters()),
                        if show_filters() { "Filters ▴" } else { "Filters ▾" }
                    }
                }

                if show_filters() {
                    div { class: "card card--panel network__filters",
                        div { class: "network__filters-label", "Faculty" }
                        div { class: "network__filters-chips",
                            for faculty in FACULTIES {
                                button {
                                    key: "{faculty}",
                                    r#type: "button",
                                    class: if selected_faculty() == faculty { "chip chip--active" } else { "chip" },
                                    onclick: move |_| selected_faculty.set(faculty.to_string()),
                                    "{faculty}"
                                }
                            }
                        }
                    }
                }

                div { class: "callout callout--indigo",
                    span { class: "callout__icon", "⭐" }
                    div {
                        p { class: "callout__title", "AI-Powered Matching" }
                        p { class: "callout__body",
                            "Match scores are calculated by Gemini AI based on complementary \
                             skills, shared interests, and collaboration potential."
                        }
                    }
                }

                div { class: "network__grid",
                    for student in visible {
                        div { key: "{student.name}", class: "card card--panel network__student",
                            div { class: "network__student-head",
                                div { class: "avatar avatar--lg", "{student.avatar}" }
                                div { class: "network__student-id",
                                    h3 { "{student.name}" }
                                    p { "🎓 {student.faculty} · {student.year}" }
                                }
                                div { class: "match-badge",
                                    div { class: "match-badge__value", "{student.match_pct}%" }
                                    div { class: "match-badge__label", "match" }
                                }
                            }
                            p { class: "network__student-bio", "{student.bio}" }
                            div { class: "tag-row",
                                for skill in student.skills {
                                    span { key: "{skill}", class: "tag", "{skill}" }
                                }
                            }
                            div { class: "tag-row tag-row--muted",
                                for interest in student.interests {
                                    span { key: "{interest}", class: "tag tag--muted", "{interest}" }
                                }
                            }
                            div { class: "network__student-actions",
                                button { r#type: "button", class: "button button--primary button--grow", "＋ Connect" }
                                button { r#type: "button", class: "button button--outline", "💬" }
                                button { r#type: "button", class: "button button--outline", "💼" }
                            }
                        }
                    }
                }
            }

            if tab() == Tab::Circles {
                div { class: "network__grid",
                    for (name, members, posts, icon) in CIRCLES {
                        div { key: "{name}", class: "card card--panel network__circle",
                            div { class: "network__circle-head",
                                div { class: "network__circle-icon", "{icon}" }
                                div {
                                    h3 { "{name}" }
                                    p { "Cross-Faculty" }
                                }
                            }
                            div { class: "network__circle-stats",
                                span { "👥 {members} members" }
                                span { "💬 {posts} posts" }
                            }
                            button { r#type: "button", class: "button button--soft button--grow", "Join Circle" }
                        }
                    }
                }
            }

            if tab() == Tab::Requests {
                div { class: "network__requests",
                    for (name, faculty, message, avatar) in REQUESTS {
                        div { key: "{name}", class: "card card--panel network__request",
                            div { class: "avatar avatar--lg", "{avatar}" }
                            div { class: "network__request-meta",
                                h3 { "{name}" }
                                p { class: "network__request-faculty", "{faculty}" }
                                p { "{message}" }
                            }
                            div { class: "network__request-actions",
                                button { r#type: "button", class: "button button--primary", "Accept" }
                                button { r#type: "button", class: "button button--outline", "Decline" }
                            }
                        }
                    }
                }
            }
        }
    }
}
