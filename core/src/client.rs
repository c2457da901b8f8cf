//! Stateless HTTP request builder and response parser for the list service.
//!
//! # Design
//! `ListClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.
//!
//! Mutation endpoints are called with `return_list=true` so the server
//! answers with the authoritative post-mutation state, which the caller is
//! expected to adopt wholesale.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ListDetail, ListSummary};

/// Characters escaped in identifiers and query values. Unreserved characters
/// pass through so server-minted UUIDs stay readable in URLs.
const ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn escape(raw: &str) -> String {
    utf8_percent_encode(raw, ESCAPED).to_string()
}

/// Synchronous, stateless client for the list service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ListClient {
    base_url: String,
}

impl ListClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_all_lists(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/list/all", self.base_url),
        }
    }

    pub fn build_create_list(&self, name: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/list/new?name={}", self.base_url, escape(name)),
        }
    }

    pub fn build_delete_list(&self, list_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!(
                "{}/list/id/{}?return_list=true",
                self.base_url,
                escape(list_id)
            ),
        }
    }

    pub fn build_get_list(&self, list_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/list/id/{}", self.base_url, escape(list_id)),
        }
    }

    pub fn build_add_item(&self, list_id: &str, text: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: format!(
                "{}/list/id/{}/item/add?text={}&return_list=true",
                self.base_url,
                escape(list_id),
                escape(text)
            ),
        }
    }

    pub fn build_edit_item(&self, list_id: &str, item_id: &str, text: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: format!(
                "{}/list/id/{}/item/id/{}?text={}&return_list=true",
                self.base_url,
                escape(list_id),
                escape(item_id),
                escape(text)
            ),
        }
    }

    pub fn build_delete_item(&self, list_id: &str, item_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!(
                "{}/list/id/{}/item/id/{}?return_list=true",
                self.base_url,
                escape(list_id),
                escape(item_id)
            ),
        }
    }

    pub fn parse_all_lists(&self, response: HttpResponse) -> Result<Vec<ListSummary>, ApiError> {
        check_status(&response)?;
        parse_summaries(&response.body)
    }

    pub fn parse_create_list(&self, response: HttpResponse) -> Result<ListSummary, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The delete endpoint answers with the remaining list summaries.
    pub fn parse_delete_list(&self, response: HttpResponse) -> Result<Vec<ListSummary>, ApiError> {
        check_status(&response)?;
        parse_summaries(&response.body)
    }

    pub fn parse_get_list(&self, response: HttpResponse) -> Result<ListDetail, ApiError> {
        check_status(&response)?;
        parse_detail(&response.body)
    }

    pub fn parse_add_item(&self, response: HttpResponse) -> Result<ListDetail, ApiError> {
        check_status(&response)?;
        parse_detail(&response.body)
    }

    pub fn parse_edit_item(&self, response: HttpResponse) -> Result<ListDetail, ApiError> {
        check_status(&response)?;
        parse_detail(&response.body)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<ListDetail, ApiError> {
        check_status(&response)?;
        parse_detail(&response.body)
    }
}

/// The server marshals an empty store as JSON `null` rather than `[]`.
fn parse_summaries(body: &str) -> Result<Vec<ListSummary>, ApiError> {
    let summaries: Option<Vec<ListSummary>> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(summaries.unwrap_or_default())
}

fn parse_detail(body: &str) -> Result<ListDetail, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Server {
        status: response.status,
        body: response.body.clone(),
    })
}
