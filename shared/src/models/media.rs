//! Hosted media reference

use serde::{Deserialize, Serialize};

/// An asset stored on the external media host
///
/// `public_id` is the host's handle used for deletion; an empty id means
/// "no asset" and is never sent to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub public_id: String,
}

impl MediaAsset {
    pub fn new(url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: public_id.into(),
        }
    }

    /// Both url and public id are present
    pub fn is_complete(&self) -> bool {
        !self.url.trim().is_empty() && !self.public_id.trim().is_empty()
    }

    /// Public id if one is set
    pub fn public_id(&self) -> Option<&str> {
        let id = self.public_id.trim();
        (!id.is_empty()).then_some(id)
    }
}
