//! Shared type aliases used across the workspace.

/// Internal database identifier (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp as stored in TIMESTAMPTZ columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
