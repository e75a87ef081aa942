//! Pure domain logic for the waxlog catalogue: shared types, validation
//! rules, slug derivation, and pagination arithmetic. No I/O lives here.

pub mod collection;
pub mod contact;
pub mod error;
pub mod pagination;
pub mod review;
pub mod slug;
pub mod types;
