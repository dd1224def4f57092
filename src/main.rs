use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use window_process::config::{self, Config, OutputFormat};
use window_process::core::VERSION;

fn main() -> Result<()> {
    let config = config::load_config()?;
    config::validate_config(&config)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting window-process v{}", VERSION);

    #[cfg(not(windows))]
    {
        anyhow::bail!("window-process only supports the Windows platform");
    }

    #[cfg(windows)]
    {
        let report = inspect(&config, &window_process::windows::Win32Provider::new())?;
        print_report(&config, &report)
    }
}

/// Diagnostic snapshot printed by the binary
#[cfg_attr(not(windows), allow(dead_code))]
#[derive(Debug, Serialize)]
struct Report {
    shell: window_process::ProcessRecord,
    shell_exists: bool,
    current_pid: u32,
    current_exists: bool,
    current_full_access_denied: bool,
}

#[cfg_attr(not(windows), allow(dead_code))]
fn inspect<P>(config: &Config, provider: &P) -> Result<Report>
where
    P: window_process::ProcessInfoProvider,
{
    use window_process::process::{get_process_name_with_capacity, ProcessRecord};

    let shell_window = provider.shell_window();
    info!(window = %shell_window, "resolving shell window owner");

    let (pid, tid) = window_process::get_process_id_and_thread_id(provider, shell_window)?;
    let name = get_process_name_with_capacity(provider, pid, config.query.name_capacity);
    let shell = ProcessRecord::new(provider, pid, tid, name);

    let current_pid = std::process::id();
    Ok(Report {
        shell_exists: shell.exists(provider),
        shell,
        current_pid,
        current_exists: window_process::process_exists(provider, current_pid),
        current_full_access_denied: window_process::probe_full_access_denied(provider, current_pid),
    })
}

#[cfg_attr(not(windows), allow(dead_code))]
fn print_report(config: &Config, report: &Report) -> Result<()> {
    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Pretty => {
            println!("shell:   {} (exists: {})", report.shell, report.shell_exists);
            println!(
                "current: [{}] exists: {}, full access denied: {}",
                report.current_pid, report.current_exists, report.current_full_access_denied
            );
        }
    }
    Ok(())
}
