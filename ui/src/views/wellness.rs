use dioxus::prelude::*;

use crate::core::chat::{self, Author, ChatLog};
use crate::core::timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    CheckIn,
    TreeHole,
    Chat,
    Relax,
}

static MOODS: [(&str, &str, u8); 5] = [
    ("☀️", "Great", 5),
    ("🙂", "Good", 4),
    ("😐", "Okay", 3),
    ("☁️", "Low", 2),
    ("🌧", "Rough", 1),
];

static WEEK_MOODS: [(&str, u8); 7] = [
    ("Mon", 4),
    ("Tue", 3),
    ("Wed", 5),
    ("Thu", 4),
    ("Fri", 2),
    ("Sat", 4),
    ("Sun", 5),
];

static SCORE_BREAKDOWN: [(&str, u8); 4] = [
    ("Sleep Quality", 80),
    ("Stress Level", 35),
    ("Social Activity", 70),
    ("Physical Activity", 60),
];

static QUICK_ACTIONS: [(&str, &str); 4] = [
    ("🫁", "Breathing Exercise"),
    ("💬", "Talk to AI"),
    ("📝", "Write in Journal"),
    ("🆘", "Emergency Help"),
];

static TREE_HOLE_POSTS: [(&str, &str, u32, u32); 4] = [
    (
        "Feeling overwhelmed with assignments this week. Anyone else?",
        "2 hours ago",
        12,
        5,
    ),
    (
        "Had a great study session today! Sometimes things click and it feels amazing.",
        "5 hours ago",
        24,
        8,
    ),
    (
        "Missing home a lot today. International student life is tough sometimes.",
        "Yesterday",
        31,
        15,
    ),
    (
        "Just passed my presentation that I was so anxious about! Proud of myself.",
        "Yesterday",
        45,
        12,
    ),
];

static RELAX_RESOURCES: [(&str, &str, &str, &str); 4] = [
    ("🌬", "5-Minute Breathing Exercise", "Breathing", "5 min"),
    ("🌲", "Nature Sounds - Forest Rain", "Audio", "30 min"),
    ("💗", "Progressive Muscle Relaxation", "Guide", "10 min"),
    ("▶️", "Mindful Meditation for Students", "Video", "15 min"),
];

#[component]
pub fn Wellness() -> Element {
    let mut tab = use_signal(|| Tab::CheckIn);
    let mut selected_mood = use_signal(|| Option::<u8>::None);
    let mut journal_entry = use_signal(String::new);
    let mut tree_hole_draft = use_signal(String::new);
    let mut chat_log = use_signal(ChatLog::new);
    let mut chat_draft = use_signal(String::new);

    // Appends the user entry right away and schedules the canned companion
    // reply. The task lives on this component's scope, so navigating away
    // before the delay elapses drops the timer instead of leaking it.
    let mut send_message = move || {
        let draft = chat_draft();
        if chat_log.with_mut(|log| log.push_user(&draft)) {
            chat_draft.set(String::new());
            spawn(async move {
                timing::sleep_ms(chat::REPLY_DELAY_MS).await;
                chat_log.with_mut(ChatLog::push_companion_reply);
            });
        }
    };

    rsx! {
        div { class: "page page-wellness",
            div { class: "page__header",
                div {
                    h1 { "Wellness & Mental Health" }
                    p { "Track your mood, share anonymously, and find support." }
                }
                div { class: "page__header-pills",
                    span { class: "pill pill--green", "💗 Wellness Score: 85%" }
                    span { class: "pill pill--amber", "📈 7-day streak" }
                }
            }

            div { class: "tabs",
                for (id, label) in [(Tab::CheckIn, "Mood Check-in"), (Tab::TreeHole, "Tree Hole"), (Tab::Chat, "AI Companion"), (Tab::Relax, "Relax")] {
                    button {
                        key: "{label}",
                        r#type: "button",
                        class: if tab() == id { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                        onclick: move |_| tab.set(id),
                        "{label}"
                    }
                }
            }

            if tab() == Tab::CheckIn {
                div { class: "wellness__checkin",
                    div { class: "wellness__checkin-main",
                        div { class: "card card--panel",
                            h2 { class: "card__title", "📅 How are you feeling today?" }
                            div { class: "wellness__moods",
                                for (icon, label, value) in MOODS {
                                    button {
                                        key: "{label}",
                                        r#type: "button",
                                        class: if selected_mood() == Some(value) { "wellness__mood wellness__mood--selected" } else { "wellness__mood" },
                                        onclick: move |_| selected_mood.set(Some(value)),
                                        span { class: "wellness__mood-icon", "{icon}" }
                                        span { class: "wellness__mood-label", "{label}" }
                                    }
                                }
                            }
                            if selected_mood().is_some() {
                                div { class: "wellness__journal",
                                    textarea {
                                        value: "{journal_entry()}",
                                        placeholder: "What's on your mind? (Optional - your journal is private)",
                                        oninput: move |evt| journal_entry.set(evt.value()),
                                    }
                                    button { r#type: "button", class: "button button--primary", "Save Check-in ✨" }
                                }
                            }
                        }

                        div { class: "card card--panel",
                            h2 { class: "card__title", "This Week's Mood" }
                            div { class: "wellness__chart",
                                for (day, mood) in WEEK_MOODS {
                                    div { key: "{day}", class: "wellness__chart-col",
                                        div { class: "wellness__chart-track",
                                            div {
                                                class: match mood {
                                                    4.. => "wellness__chart-bar wellness__chart-bar--good",
                                                    3 => "wellness__chart-bar wellness__chart-bar--okay",
                                                    _ => "wellness__chart-bar wellness__chart-bar--low",
                                                },
                                                style: "height: {mood * 20}%",
                                            }
                                        }
                                        div { class: "wellness__chart-day", "{day}" }
                                    }
                                }
                            }
                            div { class: "wellness__chart-legend",
                                span { "🟩 Good/Great" }
                                span { "🟦 Okay" }
                                span { "🟪 Low/Rough" }
                            }
                        }
                    }

                    div { class: "wellness__checkin-side",
                        div { class: "card card--panel card--tinted-green",
                            div { class: "wellness__score-ring", "85%" }
                            h3 { class: "wellness__score-title", "Wellness Score" }
                            p { class: "wellness__score-sub", "+12% from last month" }
                            div { class: "wellness__metrics",
                                for (label, value) in SCORE_BREAKDOWN {
                                    div { key: "{label}",
                                        div { class: "progress__labels",
                                            span { "{label}" }
                                            span { "{value}%" }
                                        }
                                        div { class: "progress__track",
                                            div { class: "progress__fill progress__fill--green", style: "width: {value}%" }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "card card--panel",
                            h3 { class: "card__title", "Quick Actions" }
                            for (emoji, label) in QUICK_ACTIONS {
                                button { key: "{label}", r#type: "button", class: "wellness__quick-action",
                                    span { "{emoji}" }
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }

            if tab() == Tab::TreeHole {
                div { class: "wellness__treehole",
                    div { class: "callout callout--violet",
                        span { class: "callout__icon", "🛡" }
                        div {
                            p { class: "callout__title", "Anonymous Safe Space 🌳" }
                            p { class: "callout__body",
                                "Share your thoughts anonymously. All posts are reviewed by AI \
                                 for safety. Be kind and supportive."
                            }
                        }
                    }

                    div { class: "card card--panel wellness__treehole-compose",
                        textarea {
                            value: "{tree_hole_draft()}",
                            placeholder: "What's on your mind? (Anonymous)",
                            oninput: move |evt| tree_hole_draft.set(evt.value()),
                        }
                        div { class: "wellness__treehole-compose-actions",
                            button { r#type: "button", class: "button button--primary", "Share Anonymously" }
                        }
                    }

                    for (text, time, reactions, replies) in TREE_HOLE_POSTS {
                        div { key: "{text}", class: "card card--panel wellness__post",
                            div { class: "wellness__post-head",
                                span { class: "wellness__post-avatar", "🌱" }
                                span { class: "wellness__post-author", "Anonymous" }
                                span { class: "wellness__post-time", "· {time}" }
                            }
                            p { "{text}" }
                            div { class: "wellness__post-actions",
                                button { r#type: "button", "🤍 {reactions}" }
                                button { r#type: "button", "💬 {replies}" }
                            }
                        }
                    }
                }
            }

            if tab() == Tab::Chat {
                div { class: "wellness__chat card card--panel",
                    div { class: "wellness__chat-head",
                        div { class: "avatar avatar--md", "✨" }
                        div {
                            div { class: "wellness__chat-title", "AI Wellness Companion" }
                            div { class: "wellness__chat-status", "● Powered by Gemini" }
                        }
                    }

                    div { class: "wellness__chat-messages",
                        for (i, message) in chat_log().messages().iter().enumerate() {
                            div {
                                key: "{i}",
                                class: if message.author == Author::User { "wellness__bubble wellness__bubble--user" } else { "wellness__bubble wellness__bubble--companion" },
                                "{message.text}"
                            }
                        }
                    }

                    div { class: "wellness__chat-compose",
                        input {
                            r#type: "text",
                            value: "{chat_draft()}",
                            placeholder: "Type your message...",
                            oninput: move |evt| chat_draft.set(evt.value()),
                            onkeydown: move |evt| {
                                let key = evt.key().to_string().to_lowercase();
                                if key == "enter" {
                                    send_message();
                                }
                            },
                        }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| send_message(),
                            "➤"
                        }
                    }
                    p { class: "wellness__chat-disclaimer",
                        "This AI companion is not a replacement for professional help. If you're \
                         in crisis, please call 03-7956 8145 (UM Counseling)."
                    }
                }
            }

            if tab() == Tab::Relax {
                div { class: "wellness__relax",
                    for (icon, title, kind, duration) in RELAX_RESOURCES {
                        div { key: "{title}", class: "card card--panel wellness__resource",
                            div { class: "wellness__resource-icon", "{icon}" }
                            div { class: "wellness__resource-meta",
                                h3 { "{title}" }
                                div { class: "wellness__resource-tags",
                                    span { class: "tag tag--muted", "{kind}" }
                                    span { class: "wellness__resource-duration", "{duration}" }
                                }
                            }
                            button { r#type: "button", class: "wellness__resource-play", "▶" }
                        }
                    }
                }
            }
        }
    }
}
