use super::routes;
use crate::errors::GreetingError;
use crate::openapi_models::{GreetingResponse, Link};
use actix_web::error::QueryPayloadError;
use actix_web::http::Method;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use log::debug;

const DEFAULT_NAME: &str = "World";

/// Media type of the representations carrying `_links`.
pub const HAL_JSON: &str = "application/hal+json";

const NAME_PARAM: &str = "name";

/// Resolve the `name` parameter from the raw query pairs.
///
/// Repeated keys are joined with `,`. `?name=` is the empty name, only a
/// missing key falls back to the default.
fn resolve_name(pairs: &[(String, String)]) -> String {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == NAME_PARAM)
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        values.join(",")
    }
}

fn greeting_content(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Build the greeting for `name`, linked to itself through `self_href`.
pub fn greet(name: &str, self_href: &str) -> GreetingResponse {
    let mut greeting = GreetingResponse::new(greeting_content(name));
    greeting.add_link("self", Link::new(self_href.to_string()));
    greeting
}

async fn greeting(
    req: HttpRequest,
    q: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, GreetingError> {
    let name = resolve_name(&q);

    debug!("greeting {:?}", name);

    let self_url = routes::GREETING.url_for(&req, &[&name])?;

    Ok(HttpResponse::Ok()
        .content_type(HAL_JSON)
        .json(greet(&name, self_url.as_str())))
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    GreetingError::InvalidQuery {
        reason: err.to_string(),
    }
    .into()
}

/// 404 for GET requests, 405 for everything else
async fn fallback(req: HttpRequest) -> Result<HttpResponse, GreetingError> {
    if req.method() == Method::GET || req.method() == Method::HEAD {
        Err(GreetingError::NotFound)
    } else {
        Err(GreetingError::MethodNotAllowed)
    }
}

async fn method_not_allowed() -> Result<HttpResponse, GreetingError> {
    Err(GreetingError::MethodNotAllowed)
}

pub fn config_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(routes::GREETING.path)
            .name(routes::GREETING.name)
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .route(web::get().to(greeting))
            .route(web::head().to(greeting))
            .default_service(web::to(method_not_allowed)),
    )
    .default_service(web::to(fallback));
}
