//! Client for the external media host that stores Pokémon images.
//!
//! Uploads happen after the database write and are not transactionally
//! coupled to it: a failed upload leaves the created row in place.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to send upload request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Media host rejected the upload: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone)]
pub struct MediaClient {
    client: reqwest::Client,
    upload_url: String,
}

impl MediaClient {
    pub fn new(upload_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url,
        }
    }

    /// Forward an uploaded file to the media host as a multipart POST.
    pub async fn upload(&self, file_name: &str, data: Vec<u8>) -> Result<(), MediaError> {
        let part = reqwest::multipart::Part::bytes(data).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MediaError::Rejected(response.status().to_string()));
        }

        Ok(())
    }
}
