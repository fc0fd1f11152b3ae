use avcaps_client::{
    backend_library_name, load, CapabilityReporter, MediaBackend, MediaClientError,
};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Environment variable overriding where the backend library is loaded from.
const LIB_PATH_VAR: &str = "AVCAPS_LIB_PATH";

/// Report the capabilities of the linked FFmpeg backend.
#[derive(Parser, Debug)]
#[command(name = "avcaps", disable_version_flag = true)]
struct Cli {
    /// Print library versions grouped by build configuration and license
    #[arg(long)]
    version: bool,
    /// List hardware acceleration device types
    #[arg(long)]
    hwdevices: bool,
    /// Dump hardware acceleration configurations per decoder
    #[arg(long)]
    hwconfigs: bool,
    /// List available codecs
    #[arg(long)]
    codecs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Report {
    Version,
    HardwareDevices,
    HardwareConfigs,
    Codecs,
}

impl Cli {
    /// Requested reports in output order, independent of flag order.
    fn reports(&self) -> Vec<Report> {
        [
            (self.version, Report::Version),
            (self.hwdevices, Report::HardwareDevices),
            (self.hwconfigs, Report::HardwareConfigs),
            (self.codecs, Report::Codecs),
        ]
        .into_iter()
        .filter_map(|(requested, report)| requested.then_some(report))
        .collect()
    }
}

fn run_reports<B: MediaBackend + ?Sized, W: Write>(
    backend: &B,
    reports: &[Report],
    out: W,
) -> Result<(), MediaClientError> {
    let mut reporter = CapabilityReporter::new(backend, out);
    for report in reports {
        match report {
            Report::Version => reporter.report_version()?,
            Report::HardwareDevices => reporter.report_hardware_devices()?,
            Report::HardwareConfigs => reporter.report_hardware_configs()?,
            Report::Codecs => reporter.report_codecs()?,
        }
    }
    Ok(())
}

fn backend_path() -> PathBuf {
    if let Ok(path) = env::var(LIB_PATH_VAR) {
        return PathBuf::from(path);
    }
    // Cargo puts the cdylib next to the binary.
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(backend_library_name())))
        .unwrap_or_else(|| PathBuf::from("./target/debug").join(backend_library_name()))
}

fn main() -> ExitCode {
    let _ = pretty_env_logger::try_init();

    let cli = Cli::parse();
    let reports = cli.reports();
    if reports.is_empty() {
        return ExitCode::SUCCESS;
    }

    let lib_path = backend_path();
    let backend = match load(&lib_path) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let result = run_reports(&backend, &reports, stdout.lock());
    backend.shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("report failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
