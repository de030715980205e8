//! User Interface Components
//!
//! This module contains reusable Dioxus components for the registration UI:
//!
//! - **forms**: the register form controller
//! - **display**: loading spinner and toast notifications
//! - **input**: inputs, password visibility toggle, inline error messages

pub mod display;
pub mod forms;
pub mod input;
