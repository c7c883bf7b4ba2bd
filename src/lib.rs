//! PostPilot Admin Dashboard
//!
//! Client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is a pure client of the PostPilot automation backend:
//! every page fetches JSON over HTTP, renders it, and forwards admin
//! actions (approve, reject, edit, analyze, generate) back to the API.
//!
//! # Architecture
//!
//! - [`api`] - explicit HTTP client plus one flat module per backend
//!   resource (posts, trends, content, interactions, logs, settings,
//!   health)
//! - [`fetch`] - polling subscriptions with cache-and-revalidate
//!   semantics (fixed interval + window focus, deduplicated in-flight
//!   requests, stale-response guard)
//! - [`hooks`] - per-resource wrappers binding API calls to poll
//!   intervals
//! - [`state`] - session context (login gate) and global UI state
//! - [`pages`] / [`components`] - view orchestration and presentation

pub mod api;
pub mod app;
pub mod components;
pub mod fetch;
pub mod hooks;
pub mod pages;
pub mod state;
pub mod util;
