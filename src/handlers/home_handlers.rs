use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppContext;
use crate::errors::{AppError, html, plain};
use crate::render::View;

/// GET /
pub async fn index(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, AppError> {
    if req.method() != Method::GET {
        return Ok(plain("Only accepts get requests"));
    }

    html(ctx.renderer.render(View::Index, None)?)
}
