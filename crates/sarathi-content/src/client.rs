//! Remote content store client.
//!
//! A configured handle to the hosted query endpoint. Construction never
//! fails: when no project id is configured the handle is built against a
//! placeholder identity so the surrounding process can start, and every
//! query then fails predictably with [`ContentError::NotConfigured`].

use sarathi_core::CmsConfig;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ContentError, Result};

/// Placeholder project identity used when no project id is configured.
const PLACEHOLDER_PROJECT_ID: &str = "placeholder-for-build";

/// Response envelope of the hosted query API.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Handle to the hosted content store.
///
/// Immutable after construction and safe to share across concurrent page
/// renders (one `Arc<ContentClient>` in server state).
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    project_id: String,
    dataset: String,
    api_version: String,
    use_cdn: bool,
    configured: bool,
}

impl ContentClient {
    /// Build a client from CMS configuration.
    #[must_use]
    pub fn new(config: &CmsConfig) -> Self {
        let project_id = config
            .project_id
            .clone()
            .filter(|id| !id.is_empty());
        let configured = project_id.is_some();

        Self {
            http: reqwest::Client::new(),
            project_id: project_id.unwrap_or_else(|| PLACEHOLDER_PROJECT_ID.to_string()),
            dataset: config.dataset.clone(),
            api_version: config.api_version.clone(),
            use_cdn: config.use_cdn,
            configured,
        }
    }

    /// Whether a real project id is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Project identifier (placeholder when unconfigured).
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Dataset name.
    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// The query endpoint URL for this handle.
    #[must_use]
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{project}.{host}.sanity.io/v{version}/data/query/{dataset}",
            project = self.project_id,
            host = host,
            version = self.api_version,
            dataset = self.dataset,
        )
    }

    /// Execute a read-only query with named parameters and decode the
    /// result into `T`.
    ///
    /// Parameter values are passed as raw strings and JSON-encoded here;
    /// they appear to the query as `$name`. No retries, no application
    /// timeout: failures propagate to the caller synchronously.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        if !self.configured {
            return Err(ContentError::NotConfigured);
        }

        let mut pairs: Vec<(String, String)> = Vec::with_capacity(params.len() + 1);
        pairs.push(("query".to_string(), query.to_string()));
        for (name, value) in params {
            pairs.push((format!("${name}"), serde_json::to_string(value)?));
        }

        debug!(params = params.len(), "querying content store");

        let response = self.http.get(self.query_url()).query(&pairs).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: QueryResponse<T> = serde_json::from_str(&body)?;
        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use sarathi_core::document::ExamGuideSummary;

    use super::*;

    fn configured_cms() -> CmsConfig {
        CmsConfig {
            project_id: Some("abc123xy".to_string()),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: true,
        }
    }

    #[test]
    fn test_construction_without_project_id_succeeds() {
        let client = ContentClient::new(&CmsConfig::default());
        assert!(!client.is_configured());
        assert_eq!(client.project_id(), PLACEHOLDER_PROJECT_ID);
    }

    #[test]
    fn test_query_url_cdn() {
        let client = ContentClient::new(&configured_cms());
        assert_eq!(
            client.query_url(),
            "https://abc123xy.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_query_url_direct_api() {
        let mut cms = configured_cms();
        cms.use_cdn = false;
        let client = ContentClient::new(&cms);
        assert!(client.query_url().contains(".api.sanity.io"));
    }

    #[test]
    fn test_empty_project_id_counts_as_unconfigured() {
        let mut cms = configured_cms();
        cms.project_id = Some(String::new());
        let client = ContentClient::new(&cms);
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_fetch_fails_predictably() {
        let client = ContentClient::new(&CmsConfig::default());
        let result: Result<Vec<ExamGuideSummary>> =
            client.fetch("*[_type == \"examGuide\"]", &[]).await;

        match result {
            Err(ContentError::NotConfigured) => {}
            other => panic!("expected NotConfigured, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_decoding() {
        let body = r#"{"result": [{"_id": "e1", "title": "UPSC", "slug": {"current": "upsc"}, "examType": "competitive"}]}"#;
        let envelope: QueryResponse<Vec<ExamGuideSummary>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.result.len(), 1);
        assert_eq!(envelope.result[0].slug.current, "upsc");
    }

    #[test]
    fn test_envelope_null_result_is_absent_document() {
        let body = r#"{"result": null}"#;
        let envelope: QueryResponse<Option<ExamGuideSummary>> =
            serde_json::from_str(body).unwrap();
        assert!(envelope.result.is_none());
    }
}
