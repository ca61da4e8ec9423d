use std::future::Future;

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::error::{ApiError, Result};
use super::types::{GraphResponse, SchemaKindsResponse};
use crate::i18n::t;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const AUTH_TOKEN_KEY: &str = "ig_auth_token";

/// Where the backend lives and how to authenticate against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	pub base_url: String,
	pub auth_token: Option<String>,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			auth_token: None,
		}
	}
}

impl ApiConfig {
	/// `/api` on the origin the app was served from, authenticated with the
	/// token saved in local storage, if any.
	pub fn from_window() -> Self {
		let Some(window) = web_sys::window() else {
			return Self::default();
		};
		let base_url = match window.location().origin() {
			Ok(origin) => format!("{origin}/api"),
			Err(_) => DEFAULT_BASE_URL.into(),
		};
		let stored = window
			.local_storage()
			.ok()
			.flatten()
			.and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten());
		Self {
			base_url,
			auth_token: usable_token(stored),
		}
	}
}

fn usable_token(raw: Option<String>) -> Option<String> {
	raw.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Edge mutations used by the inspector.
pub trait EdgeApi {
	/// Deletes an edge if it has not changed since `updated_at`.
	fn delete_edge(&self, edge_id: &str, updated_at: &str) -> impl Future<Output = Result<()>>;
}

/// Turns an etag or timestamp into the bare `If-Match` value the backend
/// compares against: weak prefix and surrounding quotes removed.
pub fn normalize_if_match(tag: &str) -> &str {
	let mut v = tag.trim();
	if let Some(rest) = v.strip_prefix("W/") {
		v = rest.trim();
	}
	if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
		v = &v[1..v.len() - 1];
	}
	v.trim()
}

/// HTTP client for the graph backend. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
	http: Client,
	config: ApiConfig,
}

impl ApiClient {
	/// Client for `config`. Every request carries the bearer token when one is
	/// configured.
	pub fn new(config: ApiConfig) -> Self {
		Self {
			http: Client::new(),
			config,
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
	}

	fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		match self.config.auth_token.as_deref() {
			Some(token) if !token.is_empty() => req.bearer_auth(token),
			_ => req,
		}
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let res = self.authorized(self.http.get(self.url(path))).send().await?;
		let status = res.status();
		let body = res.text().await?;
		if !status.is_success() {
			return Err(ApiError::Status {
				status: status.as_u16(),
				message: body,
			});
		}
		Ok(serde_json::from_str(&body)?)
	}

	/// Whole graph. With `include_review`, links also carry their proposed
	/// `review_flows`.
	pub async fn fetch_graph(&self, include_review: bool) -> Result<GraphResponse> {
		let path = if include_review {
			"/graph?include_review=true"
		} else {
			"/graph"
		};
		self.get_json(path).await
	}

	/// Display names for node and edge kinds.
	pub async fn fetch_schema_kinds(&self) -> Result<SchemaKindsResponse> {
		self.get_json("/schema/kinds").await
	}
}

impl EdgeApi for ApiClient {
	async fn delete_edge(&self, edge_id: &str, updated_at: &str) -> Result<()> {
		let req = self
			.http
			.delete(self.url(&format!("/edges/{edge_id}")))
			.header("If-Match", normalize_if_match(updated_at));
		let res = self.authorized(req).send().await?;
		let status = res.status();
		if status == StatusCode::NO_CONTENT {
			debug!("deleted edge {edge_id}");
			return Ok(());
		}

		let body = res.text().await.unwrap_or_default();
		warn!("delete of edge {edge_id} failed with {status}");
		Err(delete_failure(status, body))
	}
}

fn delete_failure(status: StatusCode, body: String) -> ApiError {
	let message = if body.trim().is_empty() {
		t("edges.deleteFailed")
	} else {
		body
	};
	match status {
		StatusCode::CONFLICT | StatusCode::PRECONDITION_FAILED => ApiError::Conflict(message),
		_ => ApiError::Status {
			status: status.as_u16(),
			message,
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn if_match_strips_weak_prefix_and_quotes() {
		assert_eq!(normalize_if_match(r#" W/"2024-05-01T10:00:00Z" "#), "2024-05-01T10:00:00Z");
		assert_eq!(normalize_if_match(r#""abc""#), "abc");
		assert_eq!(normalize_if_match("plain"), "plain");
		assert_eq!(normalize_if_match(r#"""#), r#"""#);
		assert_eq!(normalize_if_match("   "), "");
	}

	#[test]
	fn urls_join_without_double_slash() {
		let client = ApiClient::new(ApiConfig {
			base_url: "http://host/api/".into(),
			auth_token: None,
		});
		assert_eq!(client.url("/edges/e1"), "http://host/api/edges/e1");
	}

	#[test]
	fn configured_token_is_sent_as_bearer() {
		let client = ApiClient::new(ApiConfig {
			base_url: "http://host/api".into(),
			auth_token: Some("s3cret".into()),
		});
		let req = client
			.authorized(client.http.get(client.url("/graph")))
			.build()
			.unwrap();
		assert_eq!(req.headers()[reqwest::header::AUTHORIZATION], "Bearer s3cret");
	}

	#[test]
	fn no_token_means_no_authorization_header() {
		let client = ApiClient::new(ApiConfig::default());
		let req = client
			.authorized(client.http.get(client.url("/graph")))
			.build()
			.unwrap();
		assert!(req.headers().get(reqwest::header::AUTHORIZATION).is_none());
	}

	#[test]
	fn blank_stored_token_is_ignored() {
		assert_eq!(usable_token(None), None);
		assert_eq!(usable_token(Some("  ".into())), None);
		assert_eq!(usable_token(Some(" abc ".into())), Some("abc".into()));
	}

	#[test]
	fn precondition_failures_are_conflicts() {
		assert!(delete_failure(StatusCode::PRECONDITION_FAILED, String::new()).is_conflict());
		assert!(delete_failure(StatusCode::CONFLICT, "stale".into()).is_conflict());
	}

	#[test]
	fn empty_body_uses_default_message() {
		let err = delete_failure(StatusCode::INTERNAL_SERVER_ERROR, "  ".into());
		assert_eq!(err.user_message(), "Kunde inte ta bort relation");
	}

	#[test]
	fn body_is_forwarded() {
		let err = delete_failure(StatusCode::NOT_FOUND, "edge not found".into());
		assert_eq!(err.user_message(), "edge not found");
	}
}
