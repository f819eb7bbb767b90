//! Catalog bootstrap shared by the database-backed tests. The search crate
//! only reads these tables; creating them is the test harness's job.

use sqlx::PgPool;

const SCHEMA_LOCK_KEY: i64 = 0x7068_6f74_6f73;

const SEARCH_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS cameras (
        id UUID PRIMARY KEY,
        camera_make TEXT NOT NULL DEFAULT '',
        camera_model TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS lenses (
        id UUID PRIMARY KEY,
        lens_make TEXT NOT NULL DEFAULT '',
        lens_model TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS countries (
        id TEXT PRIMARY KEY,
        country_name TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS locations (
        id UUID PRIMARY KEY,
        loc_display_name TEXT NOT NULL DEFAULT '',
        loc_name TEXT NOT NULL DEFAULT '',
        loc_city TEXT NOT NULL DEFAULT '',
        loc_postcode TEXT NOT NULL DEFAULT '',
        loc_county TEXT NOT NULL DEFAULT '',
        loc_state TEXT NOT NULL DEFAULT '',
        loc_country TEXT NOT NULL DEFAULT '',
        loc_country_code TEXT NOT NULL DEFAULT '',
        loc_category TEXT NOT NULL DEFAULT '',
        loc_type TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS photos (
        id UUID PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        deleted_at TIMESTAMPTZ NULL,
        taken_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        photo_title TEXT NOT NULL DEFAULT '',
        photo_description TEXT NOT NULL DEFAULT '',
        photo_notes TEXT NOT NULL DEFAULT '',
        photo_artist TEXT NOT NULL DEFAULT '',
        photo_keywords TEXT NOT NULL DEFAULT '',
        photo_colors TEXT NOT NULL DEFAULT '',
        photo_color TEXT NOT NULL DEFAULT '',
        photo_canonical_name TEXT NOT NULL DEFAULT '',
        photo_lat DOUBLE PRECISION NOT NULL DEFAULT 0,
        photo_long DOUBLE PRECISION NOT NULL DEFAULT 0,
        photo_favorite BOOLEAN NOT NULL DEFAULT FALSE,
        photo_aperture REAL NOT NULL DEFAULT 0,
        camera_id UUID NOT NULL REFERENCES cameras (id),
        lens_id UUID NOT NULL REFERENCES lenses (id),
        country_id TEXT NULL REFERENCES countries (id),
        location_id UUID NULL REFERENCES locations (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS files (
        id UUID PRIMARY KEY,
        photo_id UUID NOT NULL REFERENCES photos (id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        deleted_at TIMESTAMPTZ NULL,
        file_primary BOOLEAN NOT NULL DEFAULT FALSE,
        file_missing BOOLEAN NOT NULL DEFAULT FALSE,
        file_duplicate BOOLEAN NOT NULL DEFAULT FALSE,
        file_portrait BOOLEAN NOT NULL DEFAULT FALSE,
        file_name TEXT NOT NULL DEFAULT '',
        file_hash TEXT NOT NULL DEFAULT '',
        file_perceptual_hash TEXT NOT NULL DEFAULT '',
        file_type TEXT NOT NULL DEFAULT '',
        file_mime TEXT NOT NULL DEFAULT '',
        file_width INTEGER NOT NULL DEFAULT 0,
        file_height INTEGER NOT NULL DEFAULT 0,
        file_orientation INTEGER NOT NULL DEFAULT 0,
        file_aspect_ratio DOUBLE PRECISION NOT NULL DEFAULT 0,
        file_main_color TEXT NOT NULL DEFAULT '',
        file_colors TEXT NOT NULL DEFAULT '',
        file_luminance TEXT NOT NULL DEFAULT '',
        file_chroma INTEGER NOT NULL DEFAULT 0
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_files_photo_primary ON files (photo_id) WHERE file_primary",
    "CREATE INDEX IF NOT EXISTS ix_files_hash ON files (file_hash)",
    r#"
    CREATE TABLE IF NOT EXISTS tags (
        id UUID PRIMARY KEY,
        tag_label TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS photo_tags (
        photo_id UUID NOT NULL REFERENCES photos (id) ON DELETE CASCADE,
        tag_id UUID NOT NULL REFERENCES tags (id) ON DELETE CASCADE,
        PRIMARY KEY (photo_id, tag_id)
    )
    "#,
];

/// Creates the catalog tables the search join reads, if missing. Concurrent
/// callers are serialized on an advisory lock.
pub async fn ensure_search_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    for statement in SEARCH_SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await
}

/// Connects to `DATABASE_URL` and makes sure the catalog exists. Returns
/// `None` when no database is configured so callers can skip.
pub async fn setup_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPool::connect(&url).await.ok()?;
    ensure_search_schema(&pool)
        .await
        .expect("search schema setup failed");
    Some(pool)
}
