//! Core application logic: state, event handling, and request dispatch.

pub mod action;
pub mod commands;
pub mod dispatcher;
pub mod event;
pub mod handler;
pub mod state;
pub mod view;
