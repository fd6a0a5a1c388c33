use axum::{
    body::Body,
    extract::rejection::{FormRejection, QueryRejection},
    http::{Response, StatusCode},
    response::{Html, IntoResponse},
};

use crate::ports::store::StoreError;
use crate::report::error::ReportError;
use crate::report::render::render_error_page;

impl ReportError {
    fn status(&self) -> StatusCode {
        match self {
            ReportError::Parameter(_) => StatusCode::BAD_REQUEST,
            ReportError::Malformed { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            ReportError::Store(StoreError::Connection(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ReportError::Store(_) | ReportError::Projection(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the client. Store internals stay in the log.
    fn client_message(&self) -> String {
        match self {
            ReportError::Parameter(e) => e.to_string(),
            ReportError::Malformed { message, .. } => message.clone(),
            ReportError::Store(StoreError::Connection(_)) => {
                "Connection failed. Please try again later.".to_string()
            }
            ReportError::Store(_) | ReportError::Projection(_) => {
                "Error executing query. Please try again later.".to_string()
            }
        }
    }
}

impl From<FormRejection> for ReportError {
    fn from(rejection: FormRejection) -> Self {
        ReportError::Malformed {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ReportError {
    fn from(rejection: QueryRejection) -> Self {
        ReportError::Malformed {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    }
}

// Tell axum how to convert `ReportError` into a terminal error page.
impl IntoResponse for ReportError {
    fn into_response(self) -> Response<Body> {
        let status = self.status();
        log::error!("{} {self}", status.as_u16());

        (status, Html(render_error_page(&self.client_message()))).into_response()
    }
}
