//
//  kongo
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Kong Admin API Responses
//!
//! Kong list endpoints return a page of entities wrapped in a `data` array,
//! plus an opaque `offset` cursor and a ready-made `next` link when more
//! entities exist:
//!
//! ```json
//! {
//!     "data": [{"id": "4e13f54a-bbf1-47a8-8777-255fed7116f2", "name": "foo"}],
//!     "next": "/services?offset=6378122c-a0a1-438d-a5c6-efabae9fb969",
//!     "offset": "6378122c-a0a1-438d-a5c6-efabae9fb969"
//! }
//! ```
//!
//! The client never follows the cursor on its own. Callers that want the
//! next page pass [`ListResponse::next_offset`] back in [`ListOptions::offset`].
//!
//! # Example
//!
//! ```rust
//! use kongo::api::common::{ListOptions, ListResponse};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Service {
//!     name: String,
//! }
//!
//! let json = r#"{"data": [{"name": "foo"}], "offset": "abc"}"#;
//! let page: ListResponse<Service> = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(page.data.len(), 1);
//! assert!(page.has_next());
//!
//! let options = ListOptions::default().offset(page.next_offset().unwrap()).size(50);
//! assert_eq!(options.to_query().unwrap(), "offset=abc&size=50");
//! ```

use serde::{Deserialize, Serialize};

/// One page of entities from a Kong list endpoint.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `data` | `Vec<T>` | Entities in this page |
/// | `next` | `Option<String>` | Relative link to the next page |
/// | `offset` | `Option<String>` | Cursor identifying the next page |
/// | `total` | `Option<u64>` | Total entity count (older Kong releases only) |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Entities in this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    /// Relative link to the next page, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Cursor for the next page, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,

    /// Total entity count, reported by older Kong releases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> ListResponse<T> {
    /// Returns `true` if the server reported another page.
    pub fn has_next(&self) -> bool {
        self.offset.is_some() || self.next.is_some()
    }

    /// The cursor to pass as [`ListOptions::offset`] for the next page.
    pub fn next_offset(&self) -> Option<&str> {
        self.offset.as_deref()
    }

    /// Number of entities in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this page holds no entities.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the page, returning its entities.
    pub fn into_items(self) -> Vec<T> {
        self.data
    }
}

/// Paging options accepted by Kong list endpoints.
///
/// Unset options are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Cursor returned by a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,

    /// Page size. Kong defaults to 100 and caps it at 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl ListOptions {
    /// Sets the cursor.
    pub fn offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Sets the page size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Encodes the options as a query string (without the leading `?`).
    pub fn to_query(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_defaults() {
        let page: ListResponse<String> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next());
        assert!(page.next_offset().is_none());
    }

    #[test]
    fn test_list_response_cursor_passthrough() {
        let json = r#"{"data": ["a", "b"], "next": "/routes?offset=xyz", "offset": "xyz", "total": 2}"#;
        let page: ListResponse<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.next_offset(), Some("xyz"));
        assert_eq!(page.total, Some(2));
        assert_eq!(page.into_items(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_list_options_omit_unset_fields() {
        assert_eq!(ListOptions::default().to_query().unwrap(), "");
        assert_eq!(ListOptions::default().size(10).to_query().unwrap(), "size=10");
        assert_eq!(
            ListOptions::default().offset("a b").to_query().unwrap(),
            "offset=a+b"
        );
    }
}
