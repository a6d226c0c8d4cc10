//! Query the display monitors attached to a Windows machine.
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn demo() {
//! for monitor in monitor_info::all_monitors() {
//!     println!("{:?} primary={}", monitor.bounds, monitor.is_primary);
//! }
//! # }
//! ```

pub mod monitor;

pub use monitor::*;
