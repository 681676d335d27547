//! Rescans every storage controller so disks attached since the last enumeration show up.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Rescan storage controllers for newly attached devices
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence when set
    #[arg(long, env = "RESCAN_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "RESCAN_LOG_JSON")]
    log_json: bool,

    /// List storage controllers and disk drives instead of rescanning
    #[arg(long)]
    list: bool,
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    if args.log_json {
        tracing_subscriber::registry().with(filter).with(fmt::layer().json()).init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    if args.list {
        list_storage_devices()
    } else {
        rescan_storage_controllers()
    }
}

#[cfg(target_os = "windows")]
fn rescan_storage_controllers() -> anyhow::Result<()> {
    use anyhow::Context;
    use devicemanager::DeviceManager;

    let device_manager = DeviceManager::new();
    let controllers = device_manager.storage_controllers().context("could not enumerate storage controllers")?;
    tracing::info!(count = controllers.len(), "rescanning storage controllers");

    for controller in &controllers {
        let name = controller.display_name().ok().flatten().unwrap_or_default();
        tracing::info!(instance_id = controller.instance_id(), %name, "rescanning");
        controller.rescan().with_context(|| format!("could not rescan {}", controller.instance_id()))?;
    }

    let disk_drives = device_manager.disk_drives().context("could not enumerate disk drives")?;
    tracing::info!(count = disk_drives.len(), "disk drives present after rescan");
    Ok(())
}

#[cfg(target_os = "windows")]
fn list_storage_devices() -> anyhow::Result<()> {
    use anyhow::Context;
    use devicemanager::DeviceManager;

    let device_manager = DeviceManager::new();
    let device_tree = device_manager.device_tree().context("could not read the device tree")?;

    for controller in device_manager.storage_controllers().context("could not enumerate storage controllers")? {
        let name = controller.display_name()?.unwrap_or_default();
        println!("{}  {}", controller.instance_id(), name);
        for child in controller.children_in(&device_tree)? {
            println!("    {}  {}", child.instance_id(), child.display_name()?.unwrap_or_default());
        }
    }
    for disk_drive in device_manager.disk_drives().context("could not enumerate disk drives")? {
        let name = disk_drive.display_name()?.unwrap_or_default();
        println!("{}  {}", disk_drive.instance_id(), name);
    }
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn rescan_storage_controllers() -> anyhow::Result<()> {
    anyhow::bail!("rescanning devices is only supported on Windows")
}

#[cfg(not(target_os = "windows"))]
fn list_storage_devices() -> anyhow::Result<()> {
    anyhow::bail!("listing devices is only supported on Windows")
}
