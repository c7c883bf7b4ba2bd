//! UI components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod post_card;
pub mod post_modal;
pub mod sidebar;
pub mod stats_card;
pub mod toast;

pub use chart::StatusChart;
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use post_card::PostCard;
pub use post_modal::EditPostModal;
pub use sidebar::Sidebar;
pub use stats_card::StatsCard;
pub use toast::Toast;
