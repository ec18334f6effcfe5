//! zcalc: a keyboard-driven four-function calculator.
//!
//! [`calculator`] holds the state machine and display formatting,
//! [`input`] maps keys to its commands and [`config`] loads user settings.
//! The binary owns the engine and re-renders after every command.

pub mod calculator;
pub mod config;
pub mod input;
