use anyhow::{anyhow, Context};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Thin reqwest wrapper that unwraps the `{"success", "data"}` envelope
pub struct ApiClient {
    base_url: url::Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = url::Url::parse(base_url)
            .with_context(|| format!("invalid server URL '{}'", base_url))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self, path: &str) -> anyhow::Result<url::Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid API path '{}'", path))
    }

    /// GET `path` and return the raw response body
    pub async fn get_json(&self, path: &str) -> anyhow::Result<(reqwest::StatusCode, Value)> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;
        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .with_context(|| format!("response from {} is not JSON", url))?;
        Ok((status, body))
    }

    /// GET `path` and deserialize the envelope's `data`
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let (status, body) = self.get_json(path).await?;
        unwrap_envelope(status, body)
    }
}

fn unwrap_envelope<T: DeserializeOwned>(status: reqwest::StatusCode, mut body: Value) -> anyhow::Result<T> {
    if !status.is_success() || body.get("success").and_then(Value::as_bool) != Some(true) {
        let message = body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("request failed")
            .to_string();
        return Err(anyhow!("{} ({})", message, status));
    }

    let data = body
        .get_mut("data")
        .map(Value::take)
        .ok_or_else(|| anyhow!("response is missing 'data'"))?;
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn endpoint_joins_onto_base() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.endpoint("/api/workgroups/tree").unwrap().as_str(),
            "http://localhost:3000/api/workgroups/tree"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }

    #[test]
    fn unwraps_success_envelope() {
        let ids: Vec<i32> = unwrap_envelope(StatusCode::OK, json!({"success": true, "data": [1, 2]})).unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn surfaces_error_message() {
        let err = unwrap_envelope::<Value>(
            StatusCode::NOT_FOUND,
            json!({"error": true, "message": "Workgroup 9 not found", "code": "NOT_FOUND"}),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Workgroup 9 not found (404 Not Found)");
    }
}
