//! Board support for the qbox acknowledgement box.
//!
//! The qbox is a small networked button/indicator box: two status LEDs, an
//! acknowledge switch, a go line, and a receive port for the server side.
//! This crate exposes the board's pin map and polarities as typed constants,
//! an owned configuration for the remote API endpoint, and thin drivers that
//! translate logical on/off and up/down into the wired electrical levels.
//! The application layer on top (listener, protocol, main loop) lives
//! elsewhere.
#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod drivers;

pub use config::ApiConfig;
pub use drivers::{StatusLed, Switch};
