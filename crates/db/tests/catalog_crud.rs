//! Integration tests for the catalogue repositories.
//!
//! Exercises bands, labels, and genres against a real database:
//! - Slug derivation at creation and stability across renames
//! - Duplicate slugs resolving to the oldest row
//! - Update and delete behaviour, including the label -> records cascade

use sqlx::PgPool;
use waxlog_db::models::band::{CreateBand, UpdateBand};
use waxlog_db::models::genre::CreateGenre;
use waxlog_db::models::label::{CreateLabel, UpdateLabel};
use waxlog_db::models::record::CreateRecord;
use waxlog_db::models::user::CreateUser;
use waxlog_db::repositories::{BandRepo, GenreRepo, LabelRepo, RecordRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$fake".to_string(),
        },
    )
    .await
    .expect("user insert should succeed")
    .id
}

fn new_band(name: &str) -> CreateBand {
    CreateBand {
        name: name.to_string(),
        origin: "Birmingham, UK".to_string(),
    }
}

fn new_label(name: &str) -> CreateLabel {
    CreateLabel {
        name: name.to_string(),
        city: "London".to_string(),
        country: "UK".to_string(),
        website: None,
    }
}

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn band_create_derives_slug(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;

    let band = BandRepo::create(&pool, actor, &new_band("Black  Sabbath"))
        .await
        .unwrap();

    assert_eq!(band.slug, "black-sabbath");
    assert_eq!(band.create_by, actor);
    assert_eq!(band.modify_by, actor);

    let found = BandRepo::find_by_slug(&pool, "black-sabbath").await.unwrap();
    assert_eq!(found.unwrap().id, band.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn band_rename_keeps_slug(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;
    let band = BandRepo::create(&pool, actor, &new_band("Warsaw")).await.unwrap();

    let updated = BandRepo::update_by_slug(
        &pool,
        actor,
        "warsaw",
        &UpdateBand {
            name: Some("Joy Division".to_string()),
            origin: None,
        },
    )
    .await
    .unwrap()
    .expect("band should exist");

    assert_eq!(updated.id, band.id);
    assert_eq!(updated.name, "Joy Division");
    // The slug survives the rename so existing URLs keep working.
    assert_eq!(updated.slug, "warsaw");
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_slug_resolves_to_oldest(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;

    let first = BandRepo::create(&pool, actor, &new_band("Nirvana")).await.unwrap();
    let second = BandRepo::create(&pool, actor, &new_band("Nirvana")).await.unwrap();
    assert_eq!(first.slug, second.slug);

    let found = BandRepo::find_by_slug(&pool, "nirvana").await.unwrap().unwrap();
    assert_eq!(found.id, first.id, "lookup should return the oldest row");
}

#[sqlx::test(migrations = "./migrations")]
async fn band_detail_lists_records_newest_first(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;
    let band = BandRepo::create(&pool, actor, &new_band("Iron Maiden")).await.unwrap();
    let label = LabelRepo::create(&pool, actor, &new_label("EMI")).await.unwrap();

    for (title, date) in [
        ("Iron Maiden", "1980-04-14"),
        ("Killers", "1981-02-02"),
        ("The Number of the Beast", "1982-03-22"),
    ] {
        RecordRepo::create(
            &pool,
            actor,
            &CreateRecord {
                title: title.to_string(),
                release_date: date.parse().unwrap(),
                label_id: label.id,
                band_ids: vec![band.id],
                genre_ids: vec![],
            },
        )
        .await
        .unwrap();
    }

    let detail = BandRepo::detail_by_slug(&pool, "iron-maiden")
        .await
        .unwrap()
        .expect("band should exist");

    assert_eq!(detail.create_by, "curator");
    assert_eq!(
        detail.record_list,
        "The Number of the Beast, Killers, Iron Maiden"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn band_delete_by_slug(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;
    BandRepo::create(&pool, actor, &new_band("Ghost")).await.unwrap();

    assert!(BandRepo::delete_by_slug(&pool, "ghost").await.unwrap());
    assert!(!BandRepo::delete_by_slug(&pool, "ghost").await.unwrap());
    assert!(BandRepo::find_by_slug(&pool, "ghost").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn label_update_is_partial(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;
    LabelRepo::create(&pool, actor, &new_label("Sub Pop")).await.unwrap();

    let updated = LabelRepo::update_by_slug(
        &pool,
        actor,
        "sub-pop",
        &UpdateLabel {
            name: None,
            city: Some("Seattle".to_string()),
            country: Some("USA".to_string()),
            website: None,
        },
    )
    .await
    .unwrap()
    .expect("label should exist");

    assert_eq!(updated.name, "Sub Pop");
    assert_eq!(updated.city, "Seattle");
    assert_eq!(updated.country, "USA");
}

#[sqlx::test(migrations = "./migrations")]
async fn label_delete_cascades_to_records(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;
    let label = LabelRepo::create(&pool, actor, &new_label("Factory")).await.unwrap();

    let record = RecordRepo::create(
        &pool,
        actor,
        &CreateRecord {
            title: "Unknown Pleasures".to_string(),
            release_date: "1979-06-15".parse().unwrap(),
            label_id: label.id,
            band_ids: vec![],
            genre_ids: vec![],
        },
    )
    .await
    .unwrap();

    assert!(LabelRepo::delete_by_slug(&pool, "factory").await.unwrap());

    let gone = RecordRepo::find_by_slug(&pool, &record.slug).await.unwrap();
    assert!(gone.is_none(), "records should be deleted with their label");
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn genre_optional_fields_default_empty(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;

    let genre = GenreRepo::create(
        &pool,
        actor,
        &CreateGenre {
            name: "Post-Punk".to_string(),
            description: None,
            source_url: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(genre.slug, "post-punk");
    assert_eq!(genre.description, "");
    assert_eq!(genre.source_url, "");
}

#[sqlx::test(migrations = "./migrations")]
async fn listing_pages_are_name_ordered(pool: PgPool) {
    let actor = seed_user(&pool, "curator").await;
    for name in ["Zeta", "Alpha", "Mid"] {
        BandRepo::create(&pool, actor, &new_band(name)).await.unwrap();
    }

    assert_eq!(BandRepo::count(&pool).await.unwrap(), 3);

    let page = BandRepo::list_page(&pool, 2, 0).await.unwrap();
    let names: Vec<_> = page.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Mid"]);

    let rest = BandRepo::list_page(&pool, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].name, "Zeta");
}
