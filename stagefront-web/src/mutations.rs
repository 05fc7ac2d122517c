//! Mutation layer
//!
//! Create/update/delete operations over venues, artists, and shows. Every
//! operation runs its unit of work through [`with_transaction`]: commit on
//! success, roll back on any error, and the pooled connection is returned
//! on every exit path. Handlers translate the `Result` into a user-facing
//! flash message; raw database errors never reach the page.

use futures::future::BoxFuture;
use sqlx::{Sqlite, SqlitePool, Transaction};
use stagefront_common::genres::join_genres;
use stagefront_common::{Error, Result};

use crate::forms::{NewArtist, NewShow, NewVenue};

/// Scoped transaction: begin, run the unit of work, commit on success,
/// roll back on any raised error.
///
/// Implemented once and shared by every mutation rather than repeating the
/// begin/commit/rollback dance per operation.
pub async fn with_transaction<T, F>(pool: &SqlitePool, op: F) -> Result<T>
where
    F: for<'t> FnOnce(&'t mut Transaction<'static, Sqlite>) -> BoxFuture<'t, Result<T>>,
{
    let mut tx = pool.begin().await?;
    match op(&mut tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tx.rollback().await?;
            Err(err)
        }
    }
}

/// Insert a new venue; returns the assigned id
pub async fn create_venue(pool: &SqlitePool, venue: NewVenue) -> Result<i64> {
    with_transaction(pool, move |tx| {
        Box::pin(async move {
            let result = sqlx::query(
                "INSERT INTO venues \
                 (name, city, state, address, phone, website, image_link, facebook_link, \
                  genres, seeking_talent, seeking_description) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&venue.name)
            .bind(&venue.city)
            .bind(&venue.state)
            .bind(&venue.address)
            .bind(&venue.phone)
            .bind(&venue.website)
            .bind(&venue.image_link)
            .bind(&venue.facebook_link)
            .bind(join_genres(&venue.genres))
            .bind(venue.seeking_talent)
            .bind(&venue.seeking_description)
            .execute(&mut **tx)
            .await?;
            Ok(result.last_insert_rowid())
        })
    })
    .await
}

/// Overwrite every editable field of an existing venue (full replace)
pub async fn update_venue(pool: &SqlitePool, id: i64, venue: NewVenue) -> Result<()> {
    with_transaction(pool, move |tx| {
        Box::pin(async move {
            let result = sqlx::query(
                "UPDATE venues SET \
                 name = ?, city = ?, state = ?, address = ?, phone = ?, website = ?, \
                 image_link = ?, facebook_link = ?, genres = ?, seeking_talent = ?, \
                 seeking_description = ? \
                 WHERE id = ?",
            )
            .bind(&venue.name)
            .bind(&venue.city)
            .bind(&venue.state)
            .bind(&venue.address)
            .bind(&venue.phone)
            .bind(&venue.website)
            .bind(&venue.image_link)
            .bind(&venue.facebook_link)
            .bind(join_genres(&venue.genres))
            .bind(venue.seeking_talent)
            .bind(&venue.seeking_description)
            .bind(id)
            .execute(&mut **tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(Error::NotFound(format!("venue {id}")));
            }
            Ok(())
        })
    })
    .await
}

/// Delete a venue by id; dependent shows go with it via cascade.
///
/// Deleting an id that does not exist is a successful no-op.
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<u64> {
    with_transaction(pool, move |tx| {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM venues WHERE id = ?")
                .bind(id)
                .execute(&mut **tx)
                .await?;
            Ok(result.rows_affected())
        })
    })
    .await
}

/// Insert a new artist; returns the assigned id
pub async fn create_artist(pool: &SqlitePool, artist: NewArtist) -> Result<i64> {
    with_transaction(pool, move |tx| {
        Box::pin(async move {
            let result = sqlx::query(
                "INSERT INTO artists \
                 (name, city, state, phone, website, image_link, facebook_link, \
                  genres, seeking_venue, seeking_description) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&artist.name)
            .bind(&artist.city)
            .bind(&artist.state)
            .bind(&artist.phone)
            .bind(&artist.website)
            .bind(&artist.image_link)
            .bind(&artist.facebook_link)
            .bind(join_genres(&artist.genres))
            .bind(artist.seeking_venue)
            .bind(&artist.seeking_description)
            .execute(&mut **tx)
            .await?;
            Ok(result.last_insert_rowid())
        })
    })
    .await
}

/// Overwrite every editable field of an existing artist (full replace)
pub async fn update_artist(pool: &SqlitePool, id: i64, artist: NewArtist) -> Result<()> {
    with_transaction(pool, move |tx| {
        Box::pin(async move {
            let result = sqlx::query(
                "UPDATE artists SET \
                 name = ?, city = ?, state = ?, phone = ?, website = ?, image_link = ?, \
                 facebook_link = ?, genres = ?, seeking_venue = ?, seeking_description = ? \
                 WHERE id = ?",
            )
            .bind(&artist.name)
            .bind(&artist.city)
            .bind(&artist.state)
            .bind(&artist.phone)
            .bind(&artist.website)
            .bind(&artist.image_link)
            .bind(&artist.facebook_link)
            .bind(join_genres(&artist.genres))
            .bind(artist.seeking_venue)
            .bind(&artist.seeking_description)
            .bind(id)
            .execute(&mut **tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(Error::NotFound(format!("artist {id}")));
            }
            Ok(())
        })
    })
    .await
}

/// Insert a new show; returns the assigned id.
///
/// Both foreign keys must reference existing rows; a violation surfaces as
/// a database error, which the caller reports as a generic creation
/// failure after the rollback.
pub async fn create_show(pool: &SqlitePool, show: NewShow) -> Result<i64> {
    with_transaction(pool, move |tx| {
        Box::pin(async move {
            let result = sqlx::query(
                "INSERT INTO shows (start_time, artist_id, venue_id) VALUES (?, ?, ?)",
            )
            .bind(show.start_time)
            .bind(show.artist_id)
            .bind(show.venue_id)
            .execute(&mut **tx)
            .await?;
            Ok(result.last_insert_rowid())
        })
    })
    .await
}
