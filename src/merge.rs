use std::collections::HashMap;

use crate::models::song::{SongGenreRow, SongWithGenres};

/// Collapses flat song×genre join rows into one record per song with a
/// list-valued genre field.
///
/// Output order follows the first occurrence of each song id in the input.
/// Every row for an id contributes its genre value in input order,
/// duplicates and nulls included; a left-joined song with no genre rows
/// comes out as `genre: [null]`. Rows for the same id are not assumed
/// contiguous, so lookup is keyed by id rather than by comparing with the
/// previous row. Non-genre fields are taken from the first row seen for
/// each id.
pub fn merge_song_genres(rows: Vec<SongGenreRow>) -> Vec<SongWithGenres> {
    let mut merged: Vec<SongWithGenres> = Vec::new();
    let mut index_by_id: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        match index_by_id.get(&row.id) {
            Some(&i) => merged[i].genre.push(row.genre),
            None => {
                index_by_id.insert(row.id, merged.len());
                merged.push(SongWithGenres {
                    id: row.id,
                    title: row.title,
                    artist: row.artist,
                    youtube_url: row.youtube_url,
                    spotify_url: row.spotify_url,
                    userid: row.userid,
                    username: row.username,
                    created_at: row.created_at,
                    genre: vec![row.genre],
                });
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::chrono::Utc;

    fn row(id: i32, title: &str, genre: Option<&str>) -> SongGenreRow {
        SongGenreRow {
            id,
            title: title.to_string(),
            artist: Some("artist".to_string()),
            youtube_url: Some("https://youtu.be/x".to_string()),
            spotify_url: None,
            userid: Some(1),
            username: Some("alice".to_string()),
            created_at: Utc::now(),
            genre: genre.map(|g| g.to_string()),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge_song_genres(vec![]).is_empty());
    }

    #[test]
    fn rows_sharing_an_id_merge_into_one_record() {
        let merged = merge_song_genres(vec![
            row(1, "one", Some("rock")),
            row(1, "one", Some("jazz")),
            row(2, "two", Some("pop")),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, 1);
        assert_eq!(
            merged[0].genre,
            vec![Some("rock".to_string()), Some("jazz".to_string())]
        );
        assert_eq!(merged[1].id, 2);
        assert_eq!(merged[1].genre, vec![Some("pop".to_string())]);
    }

    #[test]
    fn output_follows_first_occurrence_order_of_ids() {
        let merged = merge_song_genres(vec![
            row(3, "three", Some("rock")),
            row(1, "one", Some("jazz")),
            row(2, "two", Some("pop")),
        ]);

        let ids: Vec<i32> = merged.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn non_contiguous_rows_for_the_same_id_still_merge() {
        let merged = merge_song_genres(vec![
            row(1, "one", Some("rock")),
            row(2, "two", Some("pop")),
            row(1, "one", Some("jazz")),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged[0].genre,
            vec![Some("rock".to_string()), Some("jazz".to_string())]
        );
    }

    #[test]
    fn song_without_genres_keeps_a_null_placeholder() {
        let merged = merge_song_genres(vec![row(1, "one", None)]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].genre, vec![None]);
    }

    #[test]
    fn duplicate_genres_are_not_deduplicated() {
        let merged = merge_song_genres(vec![
            row(1, "one", Some("rock")),
            row(1, "one", Some("rock")),
        ]);

        assert_eq!(
            merged[0].genre,
            vec![Some("rock".to_string()), Some("rock".to_string())]
        );
    }

    #[test]
    fn non_genre_fields_come_from_the_first_row_seen() {
        let mut later = row(1, "renamed", Some("jazz"));
        later.username = Some("bob".to_string());

        let merged = merge_song_genres(vec![row(1, "one", Some("rock")), later]);

        assert_eq!(merged[0].title, "one");
        assert_eq!(merged[0].username, Some("alice".to_string()));
    }
}
