//! Shared UI crate for UniHub. All cross-platform logic and views live here.

pub mod core;
pub mod views;

pub mod components {
    // Persistent sidebar/topbar wrapper for post-login pages
    // (components/dashboard_shell.rs)
    pub mod dashboard_shell;
    pub use dashboard_shell::DashboardShell;
}
