// src/lib.rs

pub mod app;
pub mod chat_message;
pub mod chat_view;
pub mod chatbot;
pub mod config;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod session;
pub mod status_indicator;
pub mod ui;
