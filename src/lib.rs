//! PortfolioOS: a personal portfolio presented as a retro laptop in the
//! terminal. `core` is the headless state machine; the rest renders it and
//! feeds it input.

pub mod app;
pub mod auth;
pub mod boot;
pub mod config;
pub mod content;
pub mod core;
pub mod desktop;
pub mod logging;
pub mod sound;
pub mod status;
pub mod terminal;
pub mod ui;
