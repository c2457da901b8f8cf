//! Domain DTOs for the list service.
//!
//! # Design
//! Field names are mapped to the service's wire format with serde renames;
//! the Go-derived contract capitalizes most keys but serializes item text
//! under lowercase `"value"`. The mock-server crate defines its own types
//! independently; integration tests catch any schema drift between the two.
//!
//! Identifiers are opaque server-assigned strings. The client never
//! fabricates one and never assumes UUID syntax.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A list as returned by the collection endpoints: name and identity only,
/// no items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSummary {
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Created")]
    pub created: DateTime<Utc>,
}

/// A single list with its embedded item collection, as returned by the
/// detail and item-mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListDetail {
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Created")]
    pub created: DateTime<Utc>,
    #[serde(rename = "List", default)]
    pub items: ItemCollection,
}

/// The item collection embedded in a `ListDetail`, with the server-reported
/// counters. The counters are informational; the client does not enforce
/// them. The server serializes an empty collection as `{}`, so every field
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemCollection {
    #[serde(rename = "Items", default)]
    pub items: Vec<Item>,
    #[serde(rename = "MaxTotal", default)]
    pub max_total: u64,
    #[serde(rename = "MaxTextLength", default)]
    pub max_text_length: u64,
    #[serde(rename = "Total", default)]
    pub total: u64,
}

/// A single text entry belonging to exactly one list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "value")]
    pub text: String,
}
