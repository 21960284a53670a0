#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use async_trait::async_trait;
use serde_json::Value;

use atlas_leads::dispatch::{DispatchOutcome, LeadDispatcher};
use atlas_leads::domain::lead::Lead;

/// Dispatcher that remembers every lead it was given.
pub struct RecordingDispatcher {
    leads: Mutex<Vec<Lead>>,
    outcome: DispatchOutcome,
}

impl RecordingDispatcher {
    pub fn new(outcome: DispatchOutcome) -> Self {
        Self {
            leads: Mutex::new(Vec::new()),
            outcome,
        }
    }

    pub fn leads(&self) -> Vec<Lead> {
        self.leads.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadDispatcher for RecordingDispatcher {
    async fn dispatch(&self, lead: &Lead) -> DispatchOutcome {
        self.leads.lock().unwrap().push(lead.clone());
        self.outcome.clone()
    }
}

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

struct ReceiverState {
    status: StatusCode,
    delay: Duration,
    requests: Mutex<Vec<ReceivedRequest>>,
}

/// Local HTTP server standing in for the external lead webhook.
pub struct WebhookReceiver {
    pub url: String,
    state: web::Data<ReceiverState>,
    handle: ServerHandle,
}

impl WebhookReceiver {
    pub fn start(status: StatusCode) -> Self {
        Self::start_with_delay(status, Duration::ZERO)
    }

    pub fn start_with_delay(status: StatusCode, delay: Duration) -> Self {
        let state = web::Data::new(ReceiverState {
            status,
            delay,
            requests: Mutex::new(Vec::new()),
        });

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/hook", web::post().to(receive))
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .unwrap()
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            url: format!("http://127.0.0.1:{port}/hook"),
            state,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn receive(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<ReceiverState>,
) -> HttpResponse {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .requests
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });

    if !state.delay.is_zero() {
        actix_web::rt::time::sleep(state.delay).await;
    }

    HttpResponse::build(state.status).finish()
}

/// Address nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/hook")
}

pub fn shared(dispatcher: Arc<dyn LeadDispatcher>) -> web::Data<dyn LeadDispatcher> {
    web::Data::from(dispatcher)
}
