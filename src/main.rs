//! warranty-sync - reconcile CMDB warranty data with vendor APIs
//!
//! Runs every enabled vendor pipeline once and exits. Scheduling is left to
//! cron or a similar external scheduler.

#![allow(missing_docs)]

use anyhow::Context;
use std::process::ExitCode;
use tracing::info;
use warranty_sync::utils::logging::init_logging;
use warranty_sync::{Config, NAME, VERSION, WarrantySync};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<bool> {
    let path = Config::resolve_path();
    let config = Config::from_file(&path)
        .await
        .with_context(|| format!("Failed to load configuration from {}", path))?;

    init_logging(config.logging()).context("Failed to initialize logging")?;
    info!("Starting {} {}", NAME, VERSION);

    let sync = WarrantySync::new(config).context("Failed to create CMDB client")?;
    let report = sync.run().await;

    for run in report.failures() {
        if let Err(e) = &run.result {
            eprintln!("Error: {} pipeline failed: {}", run.family, e);
        }
    }
    Ok(report.is_success())
}
