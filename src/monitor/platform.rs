use super::types::{Monitor, Rect};

/// Bit in [`MonitorDetails::flags`] marking the primary display.
pub const MONITORINFOF_PRIMARY: u32 = 0x0000_0001;

/// Opaque display handle handed out during enumeration (a raw `HMONITOR` on Windows).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayHandle(pub isize);

/// Result of a per-display detail query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitorDetails {
    pub bounds: Rect,
    pub work_area: Rect,
    pub flags: u32,
    pub device_name: String,
}

impl MonitorDetails {
    pub fn is_primary(&self) -> bool {
        self.flags & MONITORINFOF_PRIMARY != 0
    }
}

impl From<MonitorDetails> for Monitor {
    fn from(details: MonitorDetails) -> Self {
        let is_primary = details.is_primary();
        Monitor {
            bounds: details.bounds,
            work_area: details.work_area,
            is_primary,
            device_name: details.device_name,
        }
    }
}

/// The two OS primitives monitor enumeration is built on.
pub trait DisplayPlatform {
    /// Calls `visit` once per active display with its handle and rectangle,
    /// for as long as `visit` returns `true`.
    ///
    /// Returns `false` if the underlying primitive reports failure. A visitor
    /// that stops early may also be reported as a failure.
    fn for_each_display(&self, visit: &mut dyn FnMut(DisplayHandle, Rect) -> bool) -> bool;

    /// Queries bounds, work area and flags for one display.
    ///
    /// `None` means the handle is invalid or went stale mid-enumeration.
    fn monitor_details(&self, handle: DisplayHandle) -> Option<MonitorDetails>;
}

impl<P: DisplayPlatform + ?Sized> DisplayPlatform for &P {
    fn for_each_display(&self, visit: &mut dyn FnMut(DisplayHandle, Rect) -> bool) -> bool {
        (**self).for_each_display(visit)
    }

    fn monitor_details(&self, handle: DisplayHandle) -> Option<MonitorDetails> {
        (**self).monitor_details(handle)
    }
}
