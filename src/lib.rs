// Library for tests to access modules

pub mod action;
pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod health;
pub mod ui;
