//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod bands;
pub mod collection;
pub mod contact;
pub mod genres;
pub mod labels;
pub mod panel;
pub mod records;
pub mod reviews;
pub mod tracks;
