use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        Form, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::Html,
};

use crate::http_server::state::AppState;
use crate::report::error::ReportError;
use crate::report::render::{render_index, render_page};

type Fields = HashMap<String, String>;

// Rejections are taken as values so they render through `ReportError`.
type QueryFields = Result<Query<Fields>, QueryRejection>;
type FormFields = Result<Form<Fields>, FormRejection>;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn singer_page(
    State(app_state): State<Arc<AppState>>,
    fields: QueryFields,
) -> Result<Html<String>, ReportError> {
    let Query(fields) = fields?;
    let page = app_state.reports.singer_report(&fields.into()).await?;
    Ok(Html(render_page(&page)))
}

pub async fn genre_page(
    State(app_state): State<Arc<AppState>>,
    fields: QueryFields,
) -> Result<Html<String>, ReportError> {
    let Query(fields) = fields?;
    let page = app_state.reports.genre_report(&fields.into()).await?;
    Ok(Html(render_page(&page)))
}

pub async fn genre_form(
    State(app_state): State<Arc<AppState>>,
    fields: FormFields,
) -> Result<Html<String>, ReportError> {
    let Form(fields) = fields?;
    let page = app_state.reports.genre_report(&fields.into()).await?;
    Ok(Html(render_page(&page)))
}

pub async fn song_page(
    State(app_state): State<Arc<AppState>>,
    fields: QueryFields,
) -> Result<Html<String>, ReportError> {
    let Query(fields) = fields?;
    let page = app_state.reports.song_report(&fields.into()).await?;
    Ok(Html(render_page(&page)))
}

pub async fn award_form(
    State(app_state): State<Arc<AppState>>,
    fields: FormFields,
) -> Result<Html<String>, ReportError> {
    let Form(fields) = fields?;
    let page = app_state.reports.award_report(&fields.into()).await?;
    Ok(Html(render_page(&page)))
}
