//! Core domain + application logic for the Keyword Checker Bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! `MessagingPort` trait implemented in the adapter crate, and incoming updates
//! reach the core through `MessageIntake`.

pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod intake;
pub mod keywords;
pub mod logging;
pub mod match_log;
pub mod messaging;

pub use errors::{Error, Result};
