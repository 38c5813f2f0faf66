//! 外部媒体清理
//!
//! 文档删除、或更新替换了媒体时，尽力删除图床上的旧文件。
//! 清理永远不会让主操作失败：结果只记日志。

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use sha2::{Digest, Sha256};
use shared::models::MediaAsset;
use thiserror::Error;

/// Media host credentials (`MEDIA_*` environment variables)
#[derive(Clone)]
pub struct MediaConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// API origin, e.g. `https://api.cloudinary.com`
    pub api_base: String,
}

impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            api_key: None,
            api_secret: None,
            api_base: "https://api.cloudinary.com".to_string(),
        }
    }
}

impl MediaConfig {
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            cloud_name: non_empty("MEDIA_CLOUD_NAME"),
            api_key: non_empty("MEDIA_API_KEY"),
            api_secret: non_empty("MEDIA_API_SECRET"),
            api_base: non_empty("MEDIA_API_BASE")
                .unwrap_or_else(|| "https://api.cloudinary.com".to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.cloud_name.is_some() && self.api_key.is_some() && self.api_secret.is_some()
    }
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media host request failed: {0}")]
    Network(String),

    #[error("Media host rejected {public_id}: {reason}")]
    Rejected { public_id: String, reason: String },
}

/// External media host
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn destroy(&self, asset: &MediaAsset) -> Result<(), MediaError>;
}

/// Host used when no credentials are configured
#[derive(Debug, Default, Clone)]
pub struct NoopMediaHost;

#[async_trait]
impl MediaHost for NoopMediaHost {
    async fn destroy(&self, asset: &MediaAsset) -> Result<(), MediaError> {
        tracing::debug!(public_id = %asset.public_id, "Media host not configured, skipping destroy");
        Ok(())
    }
}

/// Resource type segment of a hosted asset url
pub fn resource_type(url: &str) -> &'static str {
    if url.contains("/video/upload/") {
        "video"
    } else if url.contains("/raw/upload/") {
        "raw"
    } else {
        "image"
    }
}

/// Signed-request signature: `sha256("public_id=…&timestamp=…" + secret)`, hex encoded
pub fn sign_destroy(public_id: &str, timestamp: i64, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("public_id={}&timestamp={}{}", public_id, timestamp, secret));
    hex::encode(hasher.finalize())
}

/// Cloudinary-style signed destroy endpoint
pub struct CloudinaryMediaHost {
    client: reqwest::Client,
    api_base: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryMediaHost {
    /// Returns `None` when credentials are incomplete
    pub fn from_config(config: &MediaConfig) -> Option<Self> {
        let cloud_name = config.cloud_name.clone()?;
        let api_key = config.api_key.clone()?;
        let api_secret = config.api_secret.clone()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| tracing::warn!(error = %e, "Failed to build media host client"))
            .ok()?;

        Some(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            cloud_name,
            api_key,
            api_secret,
        })
    }
}

#[async_trait]
impl MediaHost for CloudinaryMediaHost {
    async fn destroy(&self, asset: &MediaAsset) -> Result<(), MediaError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_destroy(&asset.public_id, timestamp, &self.api_secret);
        let url = format!(
            "{}/v1_1/{}/{}/destroy",
            self.api_base,
            self.cloud_name,
            resource_type(&asset.url)
        );
        let timestamp = timestamp.to_string();

        let response = self
            .client
            .post(&url)
            .form(&[
                ("public_id", asset.public_id.as_str()),
                ("timestamp", timestamp.as_str()),
                ("api_key", self.api_key.as_str()),
                ("signature_algorithm", "sha256"),
                ("signature", signature.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MediaError::Network(e.to_string()))?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        destroy_outcome(status, &body, &asset.public_id)?;

        tracing::debug!(public_id = %asset.public_id, "Media destroyed");
        Ok(())
    }
}

/// Interpret a destroy answer
///
/// The host answers 200 with `{"result": "not found"}` for unknown assets,
/// so only `"ok"` counts as deleted.
fn destroy_outcome(
    status: reqwest::StatusCode,
    body: &serde_json::Value,
    public_id: &str,
) -> Result<(), MediaError> {
    if !status.is_success() {
        return Err(MediaError::Rejected {
            public_id: public_id.to_string(),
            reason: format!("HTTP {}: {}", status, body),
        });
    }
    match body["result"].as_str() {
        Some("ok") => Ok(()),
        other => Err(MediaError::Rejected {
            public_id: public_id.to_string(),
            reason: format!("result: {}", other.unwrap_or("missing")),
        }),
    }
}

/// Outcome of a cleanup pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub deleted: usize,
    pub failed: usize,
}

/// Best-effort media deletion
#[derive(Clone)]
pub struct MediaCleanup {
    host: Arc<dyn MediaHost>,
}

impl MediaCleanup {
    pub fn new(host: Arc<dyn MediaHost>) -> Self {
        Self { host }
    }

    /// Cloudinary host when configured, no-op otherwise
    pub fn from_config(config: &MediaConfig) -> Self {
        match CloudinaryMediaHost::from_config(config) {
            Some(host) => Self::new(Arc::new(host)),
            None => {
                tracing::info!("Media host not configured, media cleanup disabled");
                Self::new(Arc::new(NoopMediaHost))
            }
        }
    }

    /// Destroy every asset that carries a public id
    ///
    /// Duplicates are destroyed once. Failures are logged and counted.
    pub async fn cleanup(&self, assets: impl IntoIterator<Item = MediaAsset>) -> CleanupReport {
        let mut seen = HashSet::new();
        let targets: Vec<MediaAsset> = assets
            .into_iter()
            .filter(|a| a.public_id().is_some_and(|id| seen.insert(id.to_string())))
            .collect();
        if targets.is_empty() {
            return CleanupReport::default();
        }

        let results = join_all(targets.iter().map(|a| self.host.destroy(a))).await;

        let mut report = CleanupReport::default();
        for (asset, result) in targets.iter().zip(results) {
            match result {
                Ok(()) => report.deleted += 1,
                Err(e) => {
                    tracing::warn!(public_id = %asset.public_id, error = %e, "Failed to delete hosted media");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            deleted = report.deleted,
            failed = report.failed,
            "Media cleanup finished"
        );
        report
    }
}

/// Assets of `previous` whose public id no longer appears in `current`
pub fn replaced_assets(previous: Vec<MediaAsset>, current: &[MediaAsset]) -> Vec<MediaAsset> {
    let kept: HashSet<&str> = current.iter().filter_map(|a| a.public_id()).collect();
    previous
        .into_iter()
        .filter(|a| a.public_id().is_some_and(|id| !kept.contains(id)))
        .collect()
}
