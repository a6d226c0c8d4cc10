//! Display monitor enumeration.
//!
//! Every query walks the live display list through [`DisplayPlatform`] and
//! returns freshly built [`Monitor`] values; nothing is cached between calls.

pub mod enumerate;
pub mod error;
pub mod platform;
pub mod types;
#[cfg(windows)]
pub mod win32;


#[cfg(windows)]
pub use enumerate::{all_monitors, monitor_from_point, primary_monitor, try_all_monitors};
pub use enumerate::{
    collect_monitors, find_monitor_at, find_primary, monitor_at, next_monitor_index,
    primary_index, try_collect_monitors,
};
pub use error::{EnumerationError, Result};
pub use platform::{DisplayHandle, DisplayPlatform, MONITORINFOF_PRIMARY, MonitorDetails};
pub use types::{Monitor, Rect};
#[cfg(windows)]
pub use win32::Win32Displays;
