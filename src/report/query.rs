//! Predefined query templates and the rules choosing between them.
//!
//! User-supplied values only ever travel in [`BoundQuery::params`]; template
//! text is static.

use super::row::Value;

#[derive(Debug, PartialEq, Eq)]
pub struct QueryTemplate {
    pub name: &'static str,
    pub sql: &'static str,
}

pub static SINGER_PRIMARY: QueryTemplate = QueryTemplate {
    name: "singer_primary",
    sql: "SELECT artist.name, artist.surname, singer.is_winner_artist, singer.singer_id \
          FROM artist JOIN singer ON artist.artist_id = singer.singer_id \
          WHERE singer.singer_id = ?",
};

// Same lookup without the award flag; rows render the placeholder status.
pub static SINGER_FALLBACK: QueryTemplate = QueryTemplate {
    name: "singer_fallback",
    sql: "SELECT artist.name, artist.surname, singer.singer_id \
          FROM artist JOIN singer ON artist.artist_id = singer.singer_id \
          WHERE singer.singer_id = ?",
};

pub static SONGS_BY_GENRE: QueryTemplate = QueryTemplate {
    name: "songs_by_genre",
    sql: "SELECT song.song_id, song.song_title, music.genre, music.language, music.version \
          FROM song JOIN music ON song.song_id = music.music_id \
          WHERE UPPER(music.genre) = UPPER(?) \
          ORDER BY song.song_id DESC",
};

pub static SONG_DETAIL: QueryTemplate = QueryTemplate {
    name: "song_detail",
    sql: "SELECT song.song_id, song.song_title, music.genre, music.language, music.version \
          FROM song LEFT JOIN music ON song.song_id = music.music_id \
          WHERE song.song_id = ?",
};

pub static AWARD_REPORT: QueryTemplate = QueryTemplate {
    name: "award_report",
    sql: "SELECT artist_award.winner_artist, artist_award.artist_title, award.year \
          FROM artist_award JOIN award ON artist_award.award_id = award.award_id \
          ORDER BY award.award_id, artist_award.winner_artist",
};

/// A template together with the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    pub template: &'static QueryTemplate,
    pub params: Vec<Value>,
}

impl BoundQuery {
    pub fn new(template: &'static QueryTemplate, params: Vec<Value>) -> Self {
        Self { template, params }
    }

    pub fn name(&self) -> &'static str {
        self.template.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingerVariant {
    Primary,
    Fallback,
}

/// Picks the singer lookup variant by comparing the id against a cutoff.
#[derive(Debug, Clone, Copy)]
pub struct SingerQuerySelector {
    cutoff: i64,
}

impl Default for SingerQuerySelector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CUTOFF)
    }
}

impl SingerQuerySelector {
    pub const DEFAULT_CUTOFF: i64 = 30000;

    pub fn new(cutoff: i64) -> Self {
        Self { cutoff }
    }

    /// Ids strictly above the cutoff use the primary variant, all others the fallback.
    pub fn select(&self, singer_id: i64) -> (SingerVariant, BoundQuery) {
        let (variant, template) = if singer_id > self.cutoff {
            (SingerVariant::Primary, &SINGER_PRIMARY)
        } else {
            (SingerVariant::Fallback, &SINGER_FALLBACK)
        };
        (variant, BoundQuery::new(template, vec![Value::Int(singer_id)]))
    }
}

pub fn songs_by_genre(genre: &str) -> BoundQuery {
    BoundQuery::new(&SONGS_BY_GENRE, vec![Value::Text(genre.to_string())])
}

pub fn song_detail(song_id: i64) -> BoundQuery {
    BoundQuery::new(&SONG_DETAIL, vec![Value::Int(song_id)])
}

pub fn award_report() -> BoundQuery {
    BoundQuery::new(&AWARD_REPORT, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_above_cutoff_is_primary() {
        let selector = SingerQuerySelector::default();
        let (variant, query) = selector.select(30001);
        assert_eq!(variant, SingerVariant::Primary);
        assert_eq!(query.template, &SINGER_PRIMARY);
        assert_eq!(query.params, vec![Value::Int(30001)]);
    }

    #[test]
    fn test_select_at_cutoff_is_fallback() {
        let selector = SingerQuerySelector::default();
        let (variant, query) = selector.select(30000);
        assert_eq!(variant, SingerVariant::Fallback);
        assert_eq!(query.template, &SINGER_FALLBACK);
        assert_eq!(query.params, vec![Value::Int(30000)]);
    }

    #[test]
    fn test_select_binds_input_for_every_id() {
        let selector = SingerQuerySelector::new(10);
        for id in [i64::MIN, -1, 0, 9, 10, 11, 30000, i64::MAX] {
            let (variant, query) = selector.select(id);
            let expected = if id > 10 {
                SingerVariant::Primary
            } else {
                SingerVariant::Fallback
            };
            assert_eq!(variant, expected, "id {id}");
            assert_eq!(query.params, vec![Value::Int(id)], "id {id}");
        }
    }

    #[test]
    fn test_templates_use_placeholders() {
        for template in [&SINGER_PRIMARY, &SINGER_FALLBACK, &SONGS_BY_GENRE, &SONG_DETAIL] {
            assert_eq!(template.sql.matches('?').count(), 1, "{}", template.name);
        }
        assert_eq!(AWARD_REPORT.sql.matches('?').count(), 0);
    }

    #[test]
    fn test_genre_is_bound_not_interpolated() {
        let hostile = "pop') OR 1=1 --";
        let query = songs_by_genre(hostile);
        assert!(!query.template.sql.contains(hostile));
        assert_eq!(query.params, vec![Value::Text(hostile.to_string())]);
    }

    #[test]
    fn test_fallback_omits_award_flag() {
        assert!(SINGER_PRIMARY.sql.contains("is_winner_artist"));
        assert!(!SINGER_FALLBACK.sql.contains("is_winner_artist"));
    }
}
