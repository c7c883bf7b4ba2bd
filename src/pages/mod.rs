//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod approval;
pub mod content;
pub mod interactions;
pub mod login;
pub mod logs;
pub mod overview;
pub mod settings;
pub mod trends;

pub use analytics::Analytics;
pub use approval::Approval;
pub use content::ContentCalendar;
pub use interactions::Interactions;
pub use login::Login;
pub use logs::Logs;
pub use overview::Overview;
pub use settings::SettingsPage;
pub use trends::Trends;
