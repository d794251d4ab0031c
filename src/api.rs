// API client module: contains a small blocking HTTP client that talks to
// the local gallery server. It is intentionally small and synchronous;
// the whole program is one request.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;

use crate::payload::FilePayload;

/// Base URL of the local gallery server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Simple API client that holds a reqwest blocking client and the base
/// URL of the gallery server.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Everything observed from one upload: the final resolved request URL,
/// the HTTP status, and the raw response body text. Non-2xx is not
/// treated as an error here; callers that care can check `status`.
#[derive(Debug)]
pub struct UploadOutcome {
    pub url: String,
    pub status: reqwest::StatusCode,
    pub body: String,
}

/// Typed view of the gallery server's JSON reply, for callers that want
/// structure. The printed body stays opaque text.
#[derive(Deserialize, Debug)]
pub struct UploadReply {
    pub status: String,
}

impl UploadOutcome {
    pub fn parse_reply(&self) -> Result<UploadReply> {
        serde_json::from_str(&self.body).context("Parsing upload reply json")
    }
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Upload a resized image and its thumbnail in one multipart POST to
    /// `/api/upload`. The form carries exactly two parts, `image` and
    /// `thumbnail`, each with its payload's filename and media type; the
    /// bytes go over the wire untransformed. The request is sent exactly
    /// once, with no retries.
    pub fn upload_gallery_image(
        &self,
        image: FilePayload,
        thumbnail: FilePayload,
    ) -> Result<UploadOutcome> {
        let url = format!("{}/api/upload", &self.base_url);

        let form = multipart::Form::new()
            .part("image", part_from(image)?)
            .part("thumbnail", part_from(thumbnail)?);

        let res = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .context("Failed to send upload request")?;

        let url = res.url().to_string();
        let status = res.status();
        let body = res.text().context("Reading upload response body")?;
        Ok(UploadOutcome { url, status, body })
    }
}

/// Build one multipart part out of a payload.
fn part_from(payload: FilePayload) -> Result<multipart::Part> {
    multipart::Part::bytes(payload.bytes)
        .file_name(payload.filename)
        .mime_str(&payload.media_type)
        .context("Invalid media type for multipart part")
}
