//! CountryBrowser: browse the REST Countries catalogue, sorted by population,
//! and look countries up by name.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod console;
pub mod ipc_handler;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
pub mod view;

#[cfg(feature = "gui")]
pub mod ui;
