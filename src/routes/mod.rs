//! HTTP routes and the helpers they share.

use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

pub mod main;

/// Anchor of the apply section on the landing page.
pub const FORM_ANCHOR: &str = "apply";

/// Largest accepted lead form body, matching the 1 MB server action limit of
/// the previous landing page.
pub const FORM_BODY_LIMIT: usize = 1024 * 1024;

/// Redirects with `303 See Other` so browsers follow up with a GET.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Landing page location carrying the `submitted` status marker.
pub fn status_location(accepted: bool) -> String {
    let marker = if accepted { "1" } else { "0" };
    format!("/?submitted={marker}#{FORM_ANCHOR}")
}

/// Maps the `submitted` query value to the banner shown above the form.
pub fn status_banner(submitted: Option<&str>) -> Option<&'static str> {
    match submitted {
        Some("1") => Some("submitted"),
        Some("0") => Some("missing"),
        _ => None,
    }
}

/// Registers the landing page routes. Expects `Data<Tera>` and
/// `Data<dyn LeadDispatcher>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .service(main::show_index)
        .service(main::submit_lead)
        .service(main::health);
}

/// Form extractor settings: undecodable or oversized bodies get the failure
/// redirect instead of a bare `400`.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_BODY_LIMIT)
        .error_handler(|err, _req| {
            log::info!("Rejected undecodable lead form: {err}");
            InternalError::from_response(err, redirect(&status_location(false))).into()
        })
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
