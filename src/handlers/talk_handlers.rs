use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppContext;
use crate::errors::{AppError, html, plain};
use crate::models::talk::{self, StoreError, TalkForm};
use crate::render::{View, ViewPayload};

/// GET /talk/new
/// Renders the submission form with the current time zone list.
pub async fn new_form(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, AppError> {
    if req.method() != Method::GET {
        return Ok(plain("Only accepts get requests"));
    }

    let payload = ViewPayload {
        time_zones: ctx.time_zones.load_time_zones(""),
        ..Default::default()
    };
    html(ctx.renderer.render(View::NewTalk, Some(payload))?)
}

/// POST /talk/new
/// Validates and stores a submission, then redirects to the stored talk.
/// Mounted for POST only; other methods on the path reach `new_form`.
pub async fn submit(
    ctx: web::Data<AppContext>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let candidate = TalkForm::from_body(&body).into_talk();

    // Entered values are not echoed back on re-render.
    let time_zones = ctx.time_zones.load_time_zones("");
    let errors = talk::validate_talk(&candidate, &time_zones);
    if !errors.is_empty() {
        let payload = ViewPayload {
            time_zones,
            errors: talk::error_messages(&errors),
            ..Default::default()
        };
        return html(ctx.renderer.render(View::NewTalk, Some(payload))?);
    }

    match ctx.store.insert(&candidate).await {
        Ok(id) => Ok(HttpResponse::Found()
            .insert_header(("Location", format!("/talk?id={id}")))
            .finish()),
        Err(e) => {
            log::error!("Error inserting talk: {e}");
            Ok(HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Error inserting data"))
        }
    }
}

/// GET /talk?id=N
/// Shows a stored talk.
pub async fn detail(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, AppError> {
    if req.method() != Method::GET {
        return Ok(plain("Only accepts get requests"));
    }

    // A bad id keeps status 200.
    let Some(id) = query_id(req.query_string()) else {
        return Ok(plain("ID must be an int"));
    };

    match ctx.store.get_by_id(id).await {
        Ok(found) => {
            let payload = ViewPayload {
                talk: Some(found),
                ..Default::default()
            };
            html(ctx.renderer.render(View::TalkId, Some(payload))?)
        }
        Err(StoreError::NotFound) => Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Talk not found")),
        Err(e) => {
            log::error!("Error getting talk {id}: {e}");
            Ok(plain("Error getting talk"))
        }
    }
}

/// First `id` parameter of a query string, parsed as an integer.
fn query_id(query: &str) -> Option<i64> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
    pairs
        .into_iter()
        .find(|(key, _)| key == "id")
        .and_then(|(_, value)| value.parse().ok())
}
