//! Shared harness for HTTP integration tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, test, web};
use mockable::DefaultClock;
use serde_json::Value;

use taskplanner::inbound::http::health::HealthState;
use taskplanner::server::{AppDependencies, build_app, in_memory_http_state};

/// Initialise the full application over a fresh in-memory store.
pub async fn app() -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    test::init_service(build_app(AppDependencies {
        health_state,
        http_state: web::Data::new(in_memory_http_state(Arc::new(DefaultClock))),
    }))
    .await
}

/// Dispatch `req` and decode the JSON body.
pub async fn send<S>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let res = test::call_service(app, req).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

/// Build a JSON request.
pub fn json(method: actix_web::http::Method, uri: &str, body: &Value) -> Request {
    test::TestRequest::default()
        .method(method)
        .uri(uri)
        .set_json(body)
        .to_request()
}
