//! Background services
//!
//! I/O workers that run off the UI loop and talk to the app over
//! unbounded channels.

pub mod store;
