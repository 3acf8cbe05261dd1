#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Lantern page interactivity.
//!
//! Theme toggle, FAQ accordion, dropdown menu, interaction demo and sign-up
//! form validation for the static Lantern site. State lives in DOM-free
//! [`core`] types that are tested natively; the wasm-only `app` module binds
//! them to the document.

pub mod config;
pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use crate::core::controller::{
    Controller, Deferred, PageSeed, Scheduled, SubmitOutcome,
};
pub use crate::core::prefs::{MemoryPreferences, PreferenceStore};
pub use config::PageConfig;
pub use error::{UiError, UiResult};
