//! Client configuration
//!
//! Where calls go and how responses are requested. Loaded from a YAML file
//! and then overridden by environment variables.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. Environment variables (`AXT_REGION_ID`, `AXT_ENDPOINT`, `AXT_VPC`)
//! 2. Config file
//! 3. Defaults

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AxtError, Result};

/// Public endpoint suffix
pub const PUBLIC_DOMAIN: &str = ".axt.aliyuncs.com";

/// Endpoint suffix reachable from inside a VPC
pub const VPC_DOMAIN: &str = ".axt.aliyun.com";

pub const DEFAULT_REGION: &str = "cn-hangzhou";

/// Regions the service is known to be deployed in
pub const KNOWN_REGIONS: &[&str] = &[
    "cn-hangzhou",
    "cn-qingdao",
    "cn-beijing",
    "cn-zhangjiakou",
    "cn-huhehaote",
    "cn-shanghai",
    "cn-shenzhen",
    "cn-hongkong",
    "eu-west-1",
];

static REGION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,}(-[a-z0-9]+)+$").expect("valid regex"));

/// Response body format requested from the service
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "JSON",
            ResponseFormat::Xml => "XML",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct ClientConfig {
    pub region_id: String,

    /// Full host override; skips region-based resolution
    pub endpoint: Option<String>,

    /// Use the VPC-internal domain
    pub vpc: bool,

    pub format: ResponseFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region_id: DEFAULT_REGION.to_string(),
            endpoint: None,
            vpc: false,
            format: ResponseFormat::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file
    ///
    /// Returns defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| AxtError::Config {
            reason: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AxtError::Config {
            reason: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Merge with environment variables
    pub fn with_env(mut self) -> Self {
        if let Ok(region) = std::env::var("AXT_REGION_ID") {
            if !region.is_empty() {
                self.region_id = region;
            }
        }

        if let Ok(endpoint) = std::env::var("AXT_ENDPOINT") {
            if !endpoint.is_empty() {
                self.endpoint = Some(endpoint);
            }
        }

        if let Some(vpc) = std::env::var("AXT_VPC").ok().as_deref().and_then(parse_flag) {
            self.vpc = vpc;
        }

        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn vpc(mut self, vpc: bool) -> Self {
        self.vpc = vpc;
        self
    }

    /// Check the region id is well formed
    ///
    /// Well-formed regions outside [`KNOWN_REGIONS`] are accepted with a warning.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_some() {
            return Ok(());
        }

        if !REGION_RE.is_match(&self.region_id) {
            return Err(AxtError::InvalidRegion {
                region_id: self.region_id.clone(),
            });
        }

        if !KNOWN_REGIONS.contains(&self.region_id.as_str()) {
            tracing::warn!(region_id = %self.region_id, "Region is not in the known region list");
        }

        Ok(())
    }

    /// Host calls are sent to
    pub fn endpoint(&self) -> String {
        if let Some(ref endpoint) = self.endpoint {
            return endpoint.clone();
        }

        let domain = if self.vpc { VPC_DOMAIN } else { PUBLIC_DOMAIN };
        format!("{}{}", self.region_id, domain)
    }
}

/// Read a boolean env token. Anything unrecognised yields `None`.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
