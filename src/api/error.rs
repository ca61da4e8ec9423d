use thiserror::Error;

use crate::i18n::{t, t_with};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures talking to the graph backend.
#[derive(Error, Debug)]
pub enum ApiError {
	/// The request never got a response.
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),

	/// The record changed on the server since it was loaded.
	#[error("conflict: {0}")]
	Conflict(String),

	/// Any other non-success status. `message` is the response body, or a
	/// per-call default when the body is empty.
	#[error("{status}: {message}")]
	Status { status: u16, message: String },

	#[error("invalid response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl ApiError {
	/// Text suitable for showing to the user.
	pub fn user_message(&self) -> String {
		match self {
			Self::Conflict(_) => t("errors.conflict"),
			Self::Status { message, .. } => message.clone(),
			Self::Transport(err) => t_with("errors.network", &[("message", &err.to_string())]),
			Self::Decode(err) => err.to_string(),
		}
	}

	/// Conflicts are recovered by reloading the record and trying again.
	pub fn is_conflict(&self) -> bool {
		matches!(self, Self::Conflict(_))
	}
}
