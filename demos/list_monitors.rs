//! Print every connected monitor with its bounds and work area.
//!
//! Run with `RUST_LOG=trace` to see each display as it is enumerated.

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use monitor_info::{next_monitor_index, primary_index, try_all_monitors};

    env_logger::init();

    println!("=== Monitor Info ===");

    let monitors = try_all_monitors()?;
    println!("Found {} monitor(s):", monitors.len());
    for (i, mon) in monitors.iter().enumerate() {
        let b = mon.bounds;
        let w = mon.work_area;
        println!(
            "  [{}] {} {}x{} at ({}, {}), work area {}x{} at ({}, {}){}",
            i,
            mon.device_name.replace("\\\\.\\", ""),
            b.width(),
            b.height(),
            b.left,
            b.top,
            w.width(),
            w.height(),
            w.left,
            w.top,
            if mon.is_primary { " [primary]" } else { "" },
        );
    }

    if monitors.is_empty() {
        eprintln!("No monitors detected.");
        return Ok(());
    }

    let current = primary_index(&monitors).unwrap_or(0);
    let next = next_monitor_index(current, monitors.len());
    if next != current {
        println!("Switching from monitor {} would move to monitor {}", current, next);
    }

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("list_monitors only runs on Windows");
}
