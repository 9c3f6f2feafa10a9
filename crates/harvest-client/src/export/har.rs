use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::{ClientError, ClientResult};

/// Top-level HAR document. Only the pieces the extractor needs are
/// modeled; everything else in the capture is ignored on deserialize.
#[derive(Debug, Deserialize)]
pub(crate) struct HarDocument {
    pub(crate) log: HarLog,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HarLog {
    #[serde(default)]
    pub(crate) entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HarEntry {
    #[serde(default)]
    pub(crate) response: Option<HarResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HarResponse {
    #[serde(default)]
    pub(crate) content: Option<HarContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HarContent {
    #[serde(default)]
    pub(crate) text: Option<String>,
}

impl HarEntry {
    pub(crate) fn body_text(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .content
            .as_ref()?
            .text
            .as_deref()
    }
}

pub(crate) fn load_document(path: &Path) -> ClientResult<HarDocument> {
    let body = fs::read_to_string(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            ClientError::har_file_not_found(path)
        } else {
            ClientError::har_unreadable(path, &error.to_string())
        }
    })?;

    serde_json::from_str::<HarDocument>(&body)
        .map_err(|error| ClientError::har_malformed(path, &error.to_string()))
}
