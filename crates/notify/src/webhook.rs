//! Shared webhook transport.

use crate::error::{NotifyError, Result};

/// Posts a JSON payload and checks for a 2xx answer.
pub(crate) async fn post_json(
    http: &reqwest::Client,
    url: &str,
    payload: &serde_json::Value,
) -> Result<()> {
    let response = http
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NotifyError::Status {
            status: status.as_u16(),
        });
    }
    Ok(())
}
