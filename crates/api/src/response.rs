//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Paginated listings use
//! [`PageResponse`], which adds the page cursor fields next to the data.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated `{ "data": [...], "page": n, ... }` response envelope.
///
/// `page` is the resolved page actually served, which may differ from the
/// requested one when the request was out of range.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub page: i64,
    pub total_pages: i64,
    pub total_items: i64,
}
