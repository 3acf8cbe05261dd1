//! Core, DOM-free state machines for the page behaviours.
//!
//! # Design
//! - Every behaviour is a small value type that the browser layer renders.
//! - Timers are described, not started, so native tests can drive them.
pub mod controller;
pub mod demo;
pub mod dropdown;
pub mod faq;
pub mod form;
pub mod prefs;
pub mod theme;
pub mod validation;
