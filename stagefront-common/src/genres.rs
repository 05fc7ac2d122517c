//! Genre tag codec
//!
//! Genres are a set of tags on venues and artists, stored as one
//! comma-joined string column. The codec is lossless as long as no tag
//! contains the comma delimiter; form validation rejects such tags before
//! they reach storage.

/// Delimiter used in the storage form
pub const GENRE_DELIMITER: char = ',';

/// Join an ordered tag list into the storage form
pub fn join_genres(genres: &[String]) -> String {
    genres.join(",")
}

/// Split the storage form back into an ordered tag list
///
/// An empty storage string yields an empty list (not a single empty tag).
pub fn split_genres(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(GENRE_DELIMITER).map(str::to_string).collect()
}
