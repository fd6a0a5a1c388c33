use std::sync::Arc;

use crate::config::ReportConfig;
use crate::ports::store::{AwardCreation, NewAward, ReportStore};
use crate::report::error::ReportResult;
use crate::report::params::RequestParams;
use crate::report::projector::{ColumnRule, PLACEHOLDER_LABEL, project_all};
use crate::report::query::{self, SingerQuerySelector};
use crate::report::render::{AWARD_FORM_HREF, Notice, Page, Table};

/// Request-scoped report flows: interpret, select, fetch, project.
///
/// Holds no per-request state; the store is the only shared resource.
pub struct ReportService {
    store: Arc<dyn ReportStore>,
    selector: SingerQuerySelector,
    song_detail_path: String,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>, config: &ReportConfig) -> Self {
        Self {
            store,
            selector: SingerQuerySelector::new(config.singer_id_cutoff),
            song_detail_path: config.song_detail_path.clone(),
        }
    }

    pub async fn singer_report(&self, params: &RequestParams) -> ReportResult<Page> {
        let singer_id = params.required_int::<i64>("singer_id")?;
        let (variant, query) = self.selector.select(singer_id);
        log::debug!("Singer lookup for {singer_id} using {variant:?} variant");

        let cursor = self.store.fetch(&query).await?;
        let rules = [
            ColumnRule::Concat {
                columns: &["name", "surname"],
            },
            ColumnRule::WinnerFlag {
                column: "is_winner_artist",
                placeholder: Some(PLACEHOLDER_LABEL),
            },
        ];
        let rows = project_all(cursor, &rules)?;

        Ok(Page {
            title: "Singer".to_string(),
            heading: "Here is more information about the selected singer:".to_string(),
            notices: Vec::new(),
            table: Table {
                headers: &["Singer", "State"],
                rows,
            },
            back_link: None,
        })
    }

    pub async fn genre_report(&self, params: &RequestParams) -> ReportResult<Page> {
        let genre = params.required_text("genre")?;
        log::debug!("Genre lookup for '{genre}'");

        let cursor = self.store.fetch(&query::songs_by_genre(&genre)).await?;
        if cursor.is_empty() {
            log::debug!("No songs found for genre '{genre}'");
        }
        let rules = [ColumnRule::Link {
            path: self.song_detail_path.clone(),
            key_column: "song_id",
            text_column: "song_title",
        }];
        let rows = project_all(cursor, &rules)?;

        Ok(Page {
            title: "Songs".to_string(),
            heading: "Here is a list of songs of the genre you chose:".to_string(),
            notices: Vec::new(),
            table: Table {
                headers: &["Song Title"],
                rows,
            },
            back_link: None,
        })
    }

    pub async fn song_report(&self, params: &RequestParams) -> ReportResult<Page> {
        let song_id = params.required_int::<i64>("song_id")?;
        log::debug!("Song lookup for {song_id}");

        let cursor = self.store.fetch(&query::song_detail(song_id)).await?;
        let rules = [
            ColumnRule::Text {
                column: "song_title",
            },
            ColumnRule::TextOr {
                column: "genre",
                fallback: "-",
            },
            ColumnRule::TextOr {
                column: "language",
                fallback: "-",
            },
            ColumnRule::TextOr {
                column: "version",
                fallback: "-",
            },
        ];
        let rows = project_all(cursor, &rules)?;

        Ok(Page {
            title: "Song".to_string(),
            heading: "Here is more information about the selected song:".to_string(),
            notices: Vec::new(),
            table: Table {
                headers: &["Title", "Genre", "Language", "Version"],
                rows,
            },
            back_link: None,
        })
    }

    /// Creates the award, then renders every award regardless of the write outcome.
    pub async fn award_report(&self, params: &RequestParams) -> ReportResult<Page> {
        let award = NewAward {
            year: params.required_int::<i32>("year")?,
            artist_title: params.required_text("artist_title")?,
            winner_artist: params.required_text("winner_artist")?,
        };

        let notice = match self.store.create_award(&award).await? {
            AwardCreation::Created { .. } => Notice::Success("Successfully added!".to_string()),
            AwardCreation::AwardInsertFailed { reason } => {
                Notice::Error(format!("Error: could not add award: {reason}"))
            }
            AwardCreation::ArtistAwardInsertFailed { reason, .. } => {
                Notice::Error(format!("Error: could not add award winner: {reason}"))
            }
            AwardCreation::CommitFailed { reason } => {
                Notice::Error(format!("Error: could not save award: {reason}"))
            }
        };

        let cursor = self.store.fetch(&query::award_report()).await?;
        let rules = [
            ColumnRule::Text {
                column: "winner_artist",
            },
            ColumnRule::Text {
                column: "artist_title",
            },
            ColumnRule::Text { column: "year" },
        ];
        let rows = project_all(cursor, &rules)?;

        Ok(Page {
            title: "Awards".to_string(),
            heading: "Input Feedback Page".to_string(),
            notices: vec![notice],
            table: Table {
                headers: &["Winner Artist", "Artist Prize", "Year"],
                rows,
            },
            back_link: Some((AWARD_FORM_HREF.to_string(), "Go back!".to_string())),
        })
    }
}
