//! The validator form: `GET /` renders it, `POST /` validates `id_number`.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::page;

/// Form body posted by the page.
#[derive(Debug, Deserialize)]
pub struct ValidateForm {
    pub id_number: Option<String>,
}

pub fn routes() -> Router {
    Router::new().route("/", get(show_form).post(submit))
}

async fn show_form() -> Html<String> {
    Html(page::render(None))
}

async fn submit(Form(form): Form<ValidateForm>) -> Response {
    let Some(id_number) = form.id_number else {
        warn!("Form submitted without id_number");
        return (
            StatusCode::BAD_REQUEST,
            Html(page::render(Some(page::MISSING_ID_NUMBER))),
        )
            .into_response();
    };

    let outcome = za_id_number::decode(&id_number);
    // The ID number itself is personal data and stays out of the logs.
    match &outcome {
        Ok(decoded) => debug!(
            gender = %decoded.gender,
            citizenship = %decoded.citizenship,
            checksum_valid = decoded.checksum.is_valid(),
            "ID number accepted"
        ),
        Err(e) => debug!(
            reason = e.code(),
            date_error = e.is_date_error(),
            "ID number rejected"
        ),
    }

    let message = za_id_number::describe(&outcome);
    Html(page::render(Some(&message))).into_response()
}
