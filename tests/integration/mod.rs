//! Integration tests
//!
//! - `pipeline_tests`: end-to-end vendor pipelines against in-memory collaborators
//! - `servicenow_tests`: ServiceNow table client against a mock server
//! - `vendor_tests`: Cisco and Dell HTTP clients against a mock server
//! - `config_tests`: loading the shipped example configuration

mod config_tests;
mod vendor_tests;
