use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<Uuid>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

#[derive(Default)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    message: String,
    id: Option<Uuid>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize + Default,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub(crate) fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_msg(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub(crate) fn body(self, code: StatusCode, message: String) -> JsonResponse<T> {
        let fallback = if code.is_success() { "Success" } else { "Error" };
        let message = if !message.trim().is_empty() {
            message
        } else if !self.message.trim().is_empty() {
            self.message
        } else {
            fallback.to_string()
        };

        JsonResponse {
            status: if code.is_success() { "OK" } else { "Error" }.to_string(),
            message,
            code: u32::from(code.as_u16()),
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub(crate) fn ok(self, message: impl ToString) -> HttpResponse {
        HttpResponse::Ok().json(self.body(StatusCode::OK, message.to_string()))
    }

    pub(crate) fn created(self, message: impl ToString) -> HttpResponse {
        HttpResponse::Created().json(self.body(StatusCode::CREATED, message.to_string()))
    }

    fn error(self, code: StatusCode, message: String) -> Error {
        let body = self.body(code, message);
        let text = serde_json::to_string(&body).unwrap_or_else(|_| body.message.clone());
        let response = HttpResponse::build(code)
            .content_type("application/json")
            .body(text.clone());
        InternalError::from_response(text, response).into()
    }

    pub(crate) fn bad_request(self, message: impl ToString) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.to_string())
    }

    pub(crate) fn form_error(self, message: impl ToString) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.to_string())
    }

    pub(crate) fn unauthorized(self, message: impl ToString) -> Error {
        self.error(StatusCode::UNAUTHORIZED, message.to_string())
    }

    pub(crate) fn not_found(self, message: impl ToString) -> Error {
        self.error(StatusCode::NOT_FOUND, message.to_string())
    }

    pub(crate) fn internal_server_error(self, message: impl ToString) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
    }
}
