//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Mutations additionally take
//! the acting user's id so audit columns are always explicit.

pub mod band_repo;
pub mod genre_repo;
pub mod label_repo;
pub mod owned_record_repo;
pub mod record_repo;
pub mod review_repo;
pub mod track_repo;
pub mod user_repo;

pub use band_repo::BandRepo;
pub use genre_repo::GenreRepo;
pub use label_repo::LabelRepo;
pub use owned_record_repo::OwnedRecordRepo;
pub use record_repo::RecordRepo;
pub use review_repo::ReviewRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
