use actix_web::dev::ServiceRequest;
use sentry::Hub;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Sentry hub dedicated to the request being served.
///
/// The hub is forked from the current one and its scope carries the route,
/// url, method and headers of `req`. Bind the request future to it so events
/// raised while handling it never pick up another request's metadata.
pub fn hub_for_request(req: &ServiceRequest) -> Arc<Hub> {
    let hub = Arc::new(Hub::new_from_top(Hub::current()));

    let transaction = sentry_transaction_name(req);
    let url = request_url(req);
    let headers = request_headers(req);

    hub.configure_scope(|scope| {
        scope.set_transaction(transaction.as_deref());
        scope.set_tag("http.method", req.method());
        scope.set_tag("http.url", url);
        scope.set_extra("http.headers", Value::Object(headers));
    });

    hub
}

fn sentry_transaction_name(req: &ServiceRequest) -> Option<String> {
    if let Some(name) = req.match_name() {
        Some(String::from(name))
    } else {
        req.match_pattern()
    }
}

fn request_url(req: &ServiceRequest) -> String {
    let conn = req.connection_info();
    format!("{}://{}{}", conn.scheme(), conn.host(), req.uri())
}

fn request_headers(req: &ServiceRequest) -> Map<String, Value> {
    req.headers()
        .iter()
        .map(|(k, v)| {
            (
                k.to_string(),
                Value::String(v.to_str().unwrap_or_default().to_string()),
            )
        })
        .collect()
}
