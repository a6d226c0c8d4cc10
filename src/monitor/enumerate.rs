use log::{debug, trace, warn};

use super::error::{EnumerationError, Result};
use super::platform::DisplayPlatform;
use super::types::Monitor;
#[cfg(windows)]
use super::win32::Win32Displays;

/// Walk every display the platform reports and build a [`Monitor`] for each.
///
/// Returns the monitors gathered plus whether the platform primitive itself
/// succeeded. The buffer is local to this call, so concurrent walks never
/// see each other's entries.
fn walk<P: DisplayPlatform + ?Sized>(platform: &P) -> (Vec<Monitor>, bool) {
    let mut monitors = Vec::new();

    let completed = platform.for_each_display(&mut |handle, _rect| {
        match platform.monitor_details(handle) {
            Some(details) => {
                let monitor = Monitor::from(details);
                trace!(
                    "display {:?}: {}x{} at ({}, {}), primary={}",
                    handle,
                    monitor.bounds.width(),
                    monitor.bounds.height(),
                    monitor.bounds.left,
                    monitor.bounds.top,
                    monitor.is_primary,
                );
                monitors.push(monitor);
            }
            None => debug!("skipping display {:?}: detail query failed", handle),
        }
        true // continue enumeration
    });

    if !completed {
        warn!(
            "display enumeration reported failure after {} monitor(s)",
            monitors.len()
        );
    }

    (monitors, completed)
}

/// Enumerate all monitors known to `platform`.
///
/// Failures are absorbed: a failing enumeration yields whatever was gathered
/// before it failed, and a display whose detail query fails is skipped.
pub fn collect_monitors<P: DisplayPlatform + ?Sized>(platform: &P) -> Vec<Monitor> {
    walk(platform).0
}

/// Like [`collect_monitors`], but reports a failing enumeration primitive.
///
/// Per-display failures are still skipped silently.
pub fn try_collect_monitors<P: DisplayPlatform + ?Sized>(platform: &P) -> Result<Vec<Monitor>> {
    match walk(platform) {
        (monitors, true) => Ok(monitors),
        (monitors, false) => Err(EnumerationError::EnumerationFailed {
            collected: monitors.len(),
        }),
    }
}

/// The first primary monitor reported by `platform`, if any.
pub fn find_primary<P: DisplayPlatform + ?Sized>(platform: &P) -> Option<Monitor> {
    collect_monitors(platform)
        .into_iter()
        .find(|m| m.is_primary)
}

/// The first monitor reported by `platform` whose bounds contain `(x, y)`.
pub fn find_monitor_at<P: DisplayPlatform + ?Sized>(
    platform: &P,
    x: i32,
    y: i32,
) -> Option<Monitor> {
    let monitors = collect_monitors(platform);
    monitor_at(&monitors, x, y).cloned()
}

/// The first monitor in `monitors` whose bounds contain `(x, y)`.
pub fn monitor_at(monitors: &[Monitor], x: i32, y: i32) -> Option<&Monitor> {
    monitors.iter().find(|m| m.bounds.contains_point(x, y))
}

/// Index of the first primary monitor in `monitors`.
pub fn primary_index(monitors: &[Monitor]) -> Option<usize> {
    monitors.iter().position(|m| m.is_primary)
}

/// Index of the monitor after `current`, wrapping around.
///
/// With zero or one monitor there is nothing to switch to and `current` is
/// returned unchanged.
pub fn next_monitor_index(current: usize, count: usize) -> usize {
    if count <= 1 {
        return current;
    }
    (current + 1) % count
}

/// Enumerate all monitors currently connected to the system.
///
/// Uses the Win32 `EnumDisplayMonitors` API to walk every active display.
/// Enumeration failures are not reported; see [`try_all_monitors`].
#[cfg(windows)]
pub fn all_monitors() -> Vec<Monitor> {
    collect_monitors(&Win32Displays)
}

/// Enumerate all monitors, failing if `EnumDisplayMonitors` reports an error.
#[cfg(windows)]
pub fn try_all_monitors() -> Result<Vec<Monitor>> {
    try_collect_monitors(&Win32Displays)
}

/// The primary monitor, or `None` if no display is flagged primary.
#[cfg(windows)]
pub fn primary_monitor() -> Option<Monitor> {
    find_primary(&Win32Displays)
}

/// The monitor whose bounds contain the virtual-screen point `(x, y)`.
#[cfg(windows)]
pub fn monitor_from_point(x: i32, y: i32) -> Option<Monitor> {
    find_monitor_at(&Win32Displays, x, y)
}
