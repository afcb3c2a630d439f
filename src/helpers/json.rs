use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde::Serialize;

/// Envelope used for error bodies and for mutations that echo an item back.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub status: String,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
}

pub struct JsonResponseBuilder<T> {
    item: Option<T>,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder { item: None }
    }
}

impl<T: Serialize> JsonResponseBuilder<T> {
    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn ok<I: Into<String>>(self, msg: I) -> web::Json<JsonResponse<T>> {
        let msg = msg.into();
        web::Json(JsonResponse {
            status: "OK".to_string(),
            code: StatusCode::OK.as_u16(),
            message: if msg.trim().is_empty() { "Success".to_string() } else { msg },
            item: self.item,
        })
    }

    pub fn bad_request<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::BAD_REQUEST, msg.into())
    }

    /// Validation failures from `serde_valid`, already rendered.
    pub fn form_error(self, errors: String) -> Error {
        self.error(StatusCode::BAD_REQUEST, errors)
    }

    pub fn unauthorized<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::UNAUTHORIZED, msg.into())
    }

    pub fn forbidden<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::FORBIDDEN, msg.into())
    }

    pub fn not_found<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::NOT_FOUND, msg.into())
    }

    pub fn conflict<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::CONFLICT, msg.into())
    }

    pub fn internal_server_error<I: Into<String>>(self, msg: I) -> Error {
        let msg = msg.into();
        let msg = if msg.trim().is_empty() {
            "Internal Server Error".to_string()
        } else {
            msg
        };
        self.error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    fn error(self, status: StatusCode, message: String) -> Error {
        let body = JsonResponse::<T> {
            status: "Error".to_string(),
            code: status.as_u16(),
            message: message.clone(),
            item: None,
        };

        InternalError::from_response(message, HttpResponse::build(status).json(body)).into()
    }
}
