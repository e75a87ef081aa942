pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
///
/// /bands/page/{page}                  paginated listing (public)
/// /bands/{slug}                       detail (public), update, delete
/// /bands                              full listing (public), create
///
/// /labels/page/{page}                 paginated listing (public)
/// /labels/{slug}                      detail (public), update, delete
/// /labels                             full listing (public), create
///
/// /genres/page/{page}                 paginated listing (public)
/// /genres/{slug}                      detail (public), update, delete
/// /genres                             full listing (public), create
///
/// /records/page/{page}                paginated listing (public)
/// /records/{slug}                     composite detail (public), update, delete
/// /records                            create
/// /records/{slug}/tracks              list (public), create
/// /records/{slug}/reviews             create review
///
/// /tracks/{id}                        update, delete
///
/// /reviews/{id}                       update, delete (author only)
/// /reviews/{id}/like                  increment like counter
///
/// /collection                         list, add (own collection)
/// /collection/recent                  entries purchased up to today
/// /collection/{id}                    remove (own collection)
///
/// /panel                              signed-in user's dashboard
///
/// /contact                            contact form (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // --- Auth ---
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        // --- Bands ---
        .route(
            "/bands",
            get(handlers::bands::list_bands).post(handlers::bands::create_band),
        )
        .route("/bands/page/{page}", get(handlers::bands::list_bands_page))
        .route(
            "/bands/{slug}",
            get(handlers::bands::get_band)
                .put(handlers::bands::update_band)
                .delete(handlers::bands::delete_band),
        )
        // --- Labels ---
        .route(
            "/labels",
            get(handlers::labels::list_labels).post(handlers::labels::create_label),
        )
        .route(
            "/labels/page/{page}",
            get(handlers::labels::list_labels_page),
        )
        .route(
            "/labels/{slug}",
            get(handlers::labels::get_label)
                .put(handlers::labels::update_label)
                .delete(handlers::labels::delete_label),
        )
        // --- Genres ---
        .route(
            "/genres",
            get(handlers::genres::list_genres).post(handlers::genres::create_genre),
        )
        .route(
            "/genres/page/{page}",
            get(handlers::genres::list_genres_page),
        )
        .route(
            "/genres/{slug}",
            get(handlers::genres::get_genre)
                .put(handlers::genres::update_genre)
                .delete(handlers::genres::delete_genre),
        )
        // --- Records ---
        .route("/records", post(handlers::records::create_record))
        .route(
            "/records/page/{page}",
            get(handlers::records::list_records_page),
        )
        .route(
            "/records/{slug}",
            get(handlers::records::get_record)
                .put(handlers::records::update_record)
                .delete(handlers::records::delete_record),
        )
        .route(
            "/records/{slug}/tracks",
            get(handlers::tracks::list_tracks).post(handlers::tracks::create_track),
        )
        .route(
            "/records/{slug}/reviews",
            post(handlers::reviews::create_review),
        )
        // --- Tracks ---
        .route(
            "/tracks/{id}",
            put(handlers::tracks::update_track).delete(handlers::tracks::delete_track),
        )
        // --- Reviews ---
        .route(
            "/reviews/{id}",
            put(handlers::reviews::update_review).delete(handlers::reviews::delete_review),
        )
        .route("/reviews/{id}/like", post(handlers::reviews::like_review))
        // --- Collection ---
        .route(
            "/collection",
            get(handlers::collection::list_collection)
                .post(handlers::collection::add_to_collection),
        )
        .route(
            "/collection/recent",
            get(handlers::collection::list_recent_collection),
        )
        .route(
            "/collection/{id}",
            delete(handlers::collection::remove_from_collection),
        )
        // --- Panel ---
        .route("/panel", get(handlers::panel::get_panel))
        // --- Contact ---
        .route("/contact", post(handlers::contact::send_contact))
}
