use std::ffi::c_void;

use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFOEXW,
};
use windows::core::BOOL;

use super::platform::{DisplayHandle, DisplayPlatform, MonitorDetails};
use super::types::Rect;

type Visitor<'a> = dyn FnMut(DisplayHandle, Rect) -> bool + 'a;

impl From<RECT> for Rect {
    fn from(rc: RECT) -> Self {
        Rect::new(rc.left, rc.top, rc.right, rc.bottom)
    }
}

/// [`DisplayPlatform`] backed by `EnumDisplayMonitors` and `GetMonitorInfoW`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Win32Displays;

/// Trampoline from the Win32 callback into the Rust visitor.
///
/// `lparam` carries a `*mut &mut Visitor` that lives on the stack of
/// [`Win32Displays::for_each_display`] for the whole enumeration.
unsafe extern "system" fn enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    unsafe {
        let visit = &mut *(lparam.0 as *mut &mut Visitor<'_>);
        let rect = if rect.is_null() {
            Rect::default()
        } else {
            Rect::from(*rect)
        };

        BOOL::from((*visit)(DisplayHandle(hmonitor.0 as isize), rect))
    }
}

impl DisplayPlatform for Win32Displays {
    fn for_each_display(&self, mut visit: &mut dyn FnMut(DisplayHandle, Rect) -> bool) -> bool {
        let context = &mut visit as *mut &mut Visitor<'_>;

        unsafe { EnumDisplayMonitors(None, None, Some(enum_proc), LPARAM(context as isize)) }
            .as_bool()
    }

    fn monitor_details(&self, handle: DisplayHandle) -> Option<MonitorDetails> {
        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

        let hmonitor = HMONITOR(handle.0 as *mut c_void);
        let ok = unsafe { GetMonitorInfoW(hmonitor, &mut info as *mut _ as *mut _) }.as_bool();
        if !ok {
            return None;
        }

        let device_name_slice = &info.szDevice;
        let name_len = device_name_slice
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(device_name_slice.len());

        Some(MonitorDetails {
            bounds: info.monitorInfo.rcMonitor.into(),
            work_area: info.monitorInfo.rcWork.into(),
            flags: info.monitorInfo.dwFlags,
            device_name: String::from_utf16_lossy(&device_name_slice[..name_len]),
        })
    }
}
