//! Core engines for the daygrid calendar widget and day agenda.
//!
//! - `calendar`: navigation between the day grid, month picker and year
//!   picker, range clamping, and single/multiple/ranged day selection
//! - `agenda`: collision layout that places a day's events in columns so
//!   that concurrent events never overlap on screen
//!
//! Both engines are synchronous and own their state; rendering is left to
//! the caller.

pub mod agenda;
pub mod calendar;
pub mod date;
pub mod daygrid;
pub mod daygrid_config;
pub mod error;
pub mod locale;
