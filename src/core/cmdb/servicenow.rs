//! ServiceNow Table API client
//!
//! Reads are paged with `sysparm_limit`/`sysparm_offset`. Updates first
//! locate the target row with the lookup key (asking for at most two rows so
//! duplicates are detected) and then patch it by `sys_id`.

use crate::config::{CmdbConfig, HttpConfig};
use crate::core::cmdb::client::{CmdbClient, LookupKey};
use crate::core::cmdb::query::CmdbQuery;
use crate::core::models::{AssetRecord, FieldPatch, StoredDate};
use crate::utils::error::{Result, SyncError};
use crate::utils::net::{ClientUtils, HttpClientConfig};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Columns requested when reading hardware records
pub const RECORD_FIELDS: &[&str] = &[
    "sys_id",
    "name",
    "serial_number",
    "asset_tag",
    "u_active_support_contract",
    "warranty_expiration",
    "u_end_of_life",
    "u_valid_warranty_data",
];

/// ServiceNow table client using basic authentication
pub struct ServiceNowClient {
    client: Client,
    table_url: String,
    username: String,
    password: String,
    page_size: u32,
}

impl ServiceNowClient {
    pub fn new(config: &CmdbConfig, http: &HttpConfig) -> Result<Self> {
        let client_config =
            HttpClientConfig::from(http).with_header("Accept", "application/json");
        let client = ClientUtils::create_http_client(&client_config)?;
        let table_url = ClientUtils::add_path_to_api_base(
            &config.instance_url,
            &format!("/api/now{}", config.table_path),
        );

        info!("ServiceNow client initialized for table '{}'", table_url);
        Ok(Self {
            client,
            table_url,
            username: config.username.clone(),
            password: config.password.clone(),
            page_size: config.page_size.max(1),
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    async fn get_page(
        &self,
        query: &str,
        fields: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<SnowRecord>> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let response = self
            .client
            .get(&self.table_url)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[
                ("sysparm_query", query),
                ("sysparm_fields", fields),
                ("sysparm_limit", limit.as_str()),
                ("sysparm_offset", offset.as_str()),
                ("sysparm_exclude_reference_link", "true"),
            ])
            .send()
            .await?;

        let response = check_status(response, "query").await?;
        let body: SnowListResponse = response
            .json()
            .await
            .map_err(|e| SyncError::cmdb(format!("Parse error: {}", e)))?;
        Ok(body.result)
    }

    async fn locate(&self, key: &LookupKey) -> Result<String> {
        let rows = self
            .get_page(&key.to_query().to_encoded(), "sys_id", 2, 0)
            .await?;

        match rows.as_slice() {
            [row] => Ok(text(row, "sys_id")),
            [] => Err(SyncError::CmdbNotFound(key.to_string())),
            _ => Err(SyncError::CmdbAmbiguous {
                lookup: key.to_string(),
                count: rows.len(),
            }),
        }
    }
}

#[async_trait]
impl CmdbClient for ServiceNowClient {
    #[instrument(skip(self, query), fields(query = %query))]
    async fn fetch_records(&self, query: &CmdbQuery) -> Result<Vec<AssetRecord>> {
        let encoded = query.to_encoded();
        let fields = RECORD_FIELDS.join(",");
        let mut records = Vec::new();
        let mut offset = 0;

        loop {
            let page = self
                .get_page(&encoded, &fields, self.page_size, offset)
                .await?;
            let count = page.len() as u32;
            debug!("Fetched {} records at offset {}", count, offset);

            records.extend(page.iter().map(parse_asset));
            if count < self.page_size {
                break;
            }
            offset += count;
        }

        Ok(records)
    }

    #[instrument(skip(self, key, patch), fields(key = %key))]
    async fn update_record(&self, key: &LookupKey, patch: &FieldPatch) -> Result<()> {
        let sys_id = self.locate(key).await?;
        let url = ClientUtils::add_path_to_api_base(&self.table_url, &sys_id);

        let response = self
            .client
            .patch(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&patch.to_payload())
            .send()
            .await?;
        check_status(response, "update").await?;

        debug!("Updated {} ({})", sys_id, patch);
        Ok(())
    }
}

async fn check_status(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SyncError::cmdb(format!(
        "Failed to {} records ({}): {}",
        action, status, body
    )))
}

fn text(record: &SnowRecord, field: &str) -> String {
    record
        .get(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn flag(record: &SnowRecord, field: &str) -> Option<bool> {
    match record.get(field).and_then(|v| v.as_str()) {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

fn date(record: &SnowRecord, field: &str) -> StoredDate {
    StoredDate::parse(record.get(field).and_then(|v| v.as_str()).unwrap_or_default())
}

fn parse_asset(record: &SnowRecord) -> AssetRecord {
    AssetRecord {
        sys_id: text(record, "sys_id"),
        name: text(record, "name"),
        serial_number: text(record, "serial_number"),
        asset_tag: text(record, "asset_tag"),
        active_support_contract: flag(record, "u_active_support_contract"),
        warranty_expiration: date(record, "warranty_expiration"),
        end_of_life: date(record, "u_end_of_life"),
        valid_warranty_data: flag(record, "u_valid_warranty_data"),
    }
}

// ServiceNow API response types

type SnowRecord = HashMap<String, serde_json::Value>;

#[derive(Debug, Default, Deserialize)]
struct SnowListResponse {
    #[serde(default)]
    result: Vec<SnowRecord>,
}
