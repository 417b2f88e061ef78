//! MediaWiki client using reqwest

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::FetchError;

pub const DEFAULT_API: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Debug, Deserialize)]
struct Reply {
    query: Query,
}

#[derive(Debug, Deserialize)]
struct Query {
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    title: String,
    revisions: Option<Vec<Revision>>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    #[serde(rename = "*")]
    content: String,
}

/// Pull the latest revision's markup out of a `prop=revisions` reply.
pub fn extract_markup(body: &str) -> Result<String, FetchError> {
    let reply: Reply = serde_json::from_str(body).map_err(|e| FetchError::ParseError {
        message: e.to_string(),
    })?;

    let page = reply
        .query
        .pages
        .into_values()
        .next()
        .ok_or(FetchError::MissingPage)?;

    page.revisions
        .and_then(|revisions| revisions.into_iter().next())
        .map(|revision| revision.content)
        .ok_or(FetchError::MissingRevision { title: page.title })
}

pub struct WikiClient {
    client: Client,
    api: String,
    user_agent: String,
}

impl WikiClient {
    pub fn new(api: &str, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FetchError::RequestFailed {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api: api.to_string(),
            user_agent: user_agent.to_string(),
        })
    }

    /// Query URL for the latest revision of `title`.
    pub fn query_url(&self, title: &str) -> Result<reqwest::Url, FetchError> {
        reqwest::Url::parse_with_params(
            &self.api,
            &[
                ("action", "query"),
                ("prop", "revisions"),
                ("rvlimit", "1"),
                ("rvprop", "content"),
                ("format", "json"),
                ("titles", title),
            ],
        )
        .map_err(|_| FetchError::InvalidUrl {
            url: self.api.clone(),
        })
    }

    /// Fetch the raw markup of an article.
    pub async fn fetch_markup(&self, title: &str) -> Result<String, FetchError> {
        let url = self.query_url(title)?;
        debug!(url = url.as_str(), "Fetching article");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        info!(status = status.as_u16(), title, "Fetched article");
        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                message: format!("HTTP {}", status),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::ParseError {
            message: e.to_string(),
        })?;

        extract_markup(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_markup() {
        let body = r#"{"batchcomplete":"","query":{"pages":{"736":{"pageid":736,"ns":0,"title":"Albert Einstein","revisions":[{"contentformat":"text/x-wiki","contentmodel":"wikitext","*":"'''Albert Einstein'''\n* ISBN 0851312779"}]}}}}"#;
        assert_eq!(
            extract_markup(body).unwrap(),
            "'''Albert Einstein'''\n* ISBN 0851312779"
        );
    }

    #[test]
    fn test_missing_page_has_no_revision() {
        let body = r#"{"batchcomplete":"","query":{"pages":{"-1":{"ns":0,"title":"No Such Article","missing":""}}}}"#;
        assert!(matches!(
            extract_markup(body),
            Err(FetchError::MissingRevision { title }) if title == "No Such Article"
        ));
    }

    #[test]
    fn test_empty_page_map() {
        let body = r#"{"query":{"pages":{}}}"#;
        assert!(matches!(extract_markup(body), Err(FetchError::MissingPage)));
    }

    #[test]
    fn test_malformed_reply() {
        assert!(matches!(
            extract_markup(r#"{"error":{"code":"badvalue"}}"#),
            Err(FetchError::ParseError { .. })
        ));
        assert!(matches!(
            extract_markup("<html>"),
            Err(FetchError::ParseError { .. })
        ));
    }

    #[test]
    fn test_query_url_encodes_title() {
        let client = WikiClient::new(DEFAULT_API, "wikicite-test").unwrap();
        let url = client.query_url("Gödel, Escher, Bach").unwrap();
        let query = url.query().unwrap();
        assert!(query.starts_with("action=query&prop=revisions&rvlimit=1&rvprop=content&format=json"));
        assert!(query.contains("titles=G%C3%B6del%2C+Escher%2C+Bach"));
    }

    #[test]
    fn test_query_url_rejects_bad_endpoint() {
        let client = WikiClient::new("not a url", "wikicite-test").unwrap();
        assert!(matches!(
            client.query_url("Anything"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }
}
