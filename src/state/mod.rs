//! State management
//!
//! Session context and global UI state.

pub mod global;
pub mod session;

pub use global::{provide_ui_state, use_ui_state, UiState};
pub use session::{provide_session, use_session, Session, UserInfo};
