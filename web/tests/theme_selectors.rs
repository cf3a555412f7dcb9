#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- Ensure that critical CSS selectors required by the UI (the dashboard shell,
  the shared card/button vocabulary, and the wellness chat) remain present in
  the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing at the
  shared `ui/` location (mirrors the constant in `web/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--ghost",
    ".pill--indigo",
    ".card--panel",
    ".tabs__tab--active",
    ".avatar--lg",
    ".progress__fill",
    // Dashboard shell
    ".shell__sidebar",
    ".shell__sidebar--open",
    ".shell__nav-item--active",
    ".shell__dropdown",
    ".shell__topbar",
    // Landing & login
    ".landing__hero",
    ".landing__preview",
    ".login__google",
    ".login__panel",
    // Feature pages
    ".dashboard__banner",
    ".network__grid",
    ".courses__course--selected",
    ".wellness__bubble--user",
    ".wellness__bubble--companion",
    ".wellness__mood--selected",
    ".decision__matrix",
    ".profile__cover",
    // Media query token (sanity check responsive block exists)
    "@media (min-width: 1024px)",
];

#[test]
fn required_theme_selectors_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Missing required selectors in ui/assets/theme/main.css: {missing:?}"
    );
}
