//! Row structs and request DTOs for every table.
//!
//! Rows derive `sqlx::FromRow` + `Serialize`; create/update DTOs derive
//! `Deserialize` and contain only the client-mutable subset of fields.
//! Audit fields are never client-supplied: the acting user is passed to the
//! repository explicitly and dates are assigned by the database.

pub mod band;
pub mod genre;
pub mod label;
pub mod owned_record;
pub mod record;
pub mod review;
pub mod track;
pub mod user;
