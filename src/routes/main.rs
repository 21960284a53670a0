use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tera::{Context, Tera};

use crate::dispatch::LeadDispatcher;
use crate::forms::lead::LeadForm;
use crate::routes::{FORM_ANCHOR, redirect, render_template, status_banner, status_location};
use crate::services::lead as lead_service;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    submitted: Option<String>,
}

#[get("/")]
/// Render the landing page with the apply form and its status banner.
///
/// A query string that does not decode (e.g. a repeated `submitted`) renders
/// the page without a banner.
pub async fn show_index(
    query: Option<web::Query<IndexQuery>>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.map(web::Query::into_inner).unwrap_or_default();
    let mut context = Context::new();
    context.insert("form_anchor", FORM_ANCHOR);
    context.insert(
        "banner",
        status_banner(query.submitted.as_deref()).unwrap_or_default(),
    );

    render_template(&tera, "index.html", &context)
}

#[post("/lead")]
/// Accept the apply form and redirect back to it with a status marker.
pub async fn submit_lead(
    dispatcher: web::Data<dyn LeadDispatcher>,
    web::Form(form): web::Form<LeadForm>,
) -> impl Responder {
    let outcome = lead_service::submit_lead(dispatcher.get_ref(), form, Utc::now()).await;

    redirect(&status_location(outcome.is_accepted()))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
