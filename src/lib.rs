//! # warranty-sync
//!
//! Reconciles hardware records in a ServiceNow CMDB with warranty and
//! end-of-life data from vendor APIs.
//!
//! ## Features
//!
//! - **Identifier normalization**: NFKD, whitespace stripping and
//!   vendor-specific validity rules with asset-tag fallback
//! - **Deduplication**: first-seen wins, collisions are counted
//! - **Batched lookups**: Cisco warranty summary + EOX, Dell TechDirect
//! - **Minimal writes**: only changed fields are patched back
//!
//! ## Usage
//!
//! ```rust,no_run
//! use warranty_sync::{Config, WarrantySync};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/warranty_sync.yaml").await?;
//!     let sync = WarrantySync::new(config)?;
//!     let report = sync.run().await;
//!     println!("all pipelines succeeded: {}", report.is_success());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

pub use config::Config;
pub use crate::core::cmdb::{CmdbClient, ServiceNowClient};
pub use crate::core::models::{AssetRecord, VendorFamily, WarrantyLookupResult};
pub use crate::core::pipeline::{RunSummary, SyncPipeline, SyncReport, VendorRun};
pub use utils::error::{Result, SyncError};

use crate::core::vendors::{CiscoClient, CiscoWarrantySource, DellClient, DellWarrantySource};
use std::sync::Arc;
use tracing::{error, info};

/// Runs the enabled vendor pipelines against one CMDB
pub struct WarrantySync {
    config: Config,
    cmdb: Arc<dyn CmdbClient>,
}

impl WarrantySync {
    /// Create an instance backed by the configured ServiceNow table
    pub fn new(config: Config) -> Result<Self> {
        let cmdb = ServiceNowClient::new(config.cmdb(), config.http())?;
        Ok(Self::with_cmdb(config, Arc::new(cmdb)))
    }

    /// Create an instance over any CMDB client
    pub fn with_cmdb(config: Config, cmdb: Arc<dyn CmdbClient>) -> Self {
        Self { config, cmdb }
    }

    /// Run Cisco then Dell, skipping disabled vendors
    ///
    /// A vendor that fails to set up does not stop the vendors after it.
    pub async fn run(&self) -> SyncReport {
        let mut report = SyncReport::default();

        if self.config.cisco().enabled {
            let result = self.run_cisco().await;
            report.runs.push(Self::finish(VendorFamily::Cisco, result));
        }
        if self.config.dell().enabled {
            let result = self.run_dell().await;
            report.runs.push(Self::finish(VendorFamily::Dell, result));
        }

        report
    }

    async fn run_cisco(&self) -> Result<RunSummary> {
        info!("Starting Cisco warranty sync");
        let cisco = self.config.cisco();
        let api = CiscoClient::connect(cisco, self.config.http()).await?;
        let source = CiscoWarrantySource::new(api, cisco.batch_size);
        SyncPipeline::new(source, self.cmdb.clone(), cisco.manufacturers.clone())
            .run()
            .await
    }

    async fn run_dell(&self) -> Result<RunSummary> {
        info!("Starting Dell warranty sync");
        let dell = self.config.dell();
        let api = DellClient::connect(dell, self.config.http()).await?;
        let source = DellWarrantySource::new(
            api,
            dell.batch_size,
            dell.ignored_service_tags.iter().cloned(),
        );
        SyncPipeline::new(source, self.cmdb.clone(), dell.manufacturers.clone())
            .run()
            .await
    }

    fn finish(family: VendorFamily, result: Result<RunSummary>) -> VendorRun {
        if let Err(e) = &result {
            error!("{} pipeline aborted: {}", family, e);
        }
        VendorRun { family, result }
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
