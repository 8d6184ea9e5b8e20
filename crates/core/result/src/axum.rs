use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error_type {
            ErrorType::LabelMe => StatusCode::INTERNAL_SERVER_ERROR,

            ErrorType::UnknownEvent => StatusCode::NOT_FOUND,
            ErrorType::InvalidSlug => StatusCode::BAD_REQUEST,
            ErrorType::SlugAlreadyExists => StatusCode::CONFLICT,

            ErrorType::InvalidEmail => StatusCode::BAD_REQUEST,

            ErrorType::MissingImage => StatusCode::BAD_REQUEST,
            ErrorType::FileTooLarge { .. } => StatusCode::BAD_REQUEST,
            ErrorType::FileTypeNotAllowed => StatusCode::BAD_REQUEST,

            ErrorType::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InvalidOperation => StatusCode::BAD_REQUEST,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::FailedValidation { .. } => StatusCode::BAD_REQUEST,
        };

        (status, Json(&self)).into_response()
    }
}
