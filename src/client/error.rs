// This file is part of the terraform-provider-backuprecovery project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Maximum length of a raw response body kept in an error or a log line
pub(crate) const MAX_BODY_LENGTH: usize = 200;

/// Errors that prevent a client from being obtained
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("provider is not configured")]
    NotConfigured,
    #[error("invalid endpoint `{0}`: expected an http:// or https:// URL")]
    InvalidEndpoint(String),
    #[error("authentication token is empty")]
    MissingToken,
    #[error("invalid header value for `{0}`")]
    InvalidHeader(&'static str),
    #[error("could not build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Errors returned by a single API call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a status error from the body of a failed response
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ErrorBody {
            message: Option<String>,
            error_code: Option<String>,
        }

        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                message: Some(message),
                error_code: Some(code),
            }) => format!("{message} ({code})"),
            Ok(ErrorBody {
                message: Some(message),
                error_code: None,
            }) => message,
            _ => truncate(body),
        };

        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Truncate a body and strip control characters
pub(crate) fn truncate(body: &str) -> String {
    let cleaned: String = body
        .chars()
        .filter(|c| !c.is_control() || *c == ' ')
        .collect();
    if cleaned.chars().count() > MAX_BODY_LENGTH {
        let head: String = cleaned.chars().take(MAX_BODY_LENGTH).collect();
        format!("{head}... [truncated, {} bytes total]", body.len())
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_uses_server_message() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"errorCode":"KValidationError","message":"name is required"}"#,
        );
        assert_eq!(
            err.to_string(),
            "API returned 400 Bad Request: name is required (KValidationError)"
        );
    }

    #[test]
    fn status_error_falls_back_to_raw_body() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "upstream\nunavailable");
        assert_eq!(
            err.to_string(),
            "API returned 502 Bad Gateway: upstreamunavailable"
        );
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(MAX_BODY_LENGTH + 50);
        let truncated = truncate(&body);
        assert!(truncated.starts_with(&"x".repeat(MAX_BODY_LENGTH)));
        assert!(truncated.ends_with("[truncated, 250 bytes total]"));
    }

    #[test]
    fn not_found_is_detected() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, "");
        assert!(err.is_not_found());
        let err = ApiError::from_response(StatusCode::FORBIDDEN, "");
        assert!(!err.is_not_found());
    }
}
