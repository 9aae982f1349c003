use actix_cors::Cors;
use actix_web::dev::{Server, Service};
use actix_web::middleware::Logger;
use actix_web::{http, App, HttpServer};

use crate::http::handlers::config_handlers;
use crate::http::sentry_middleware::hub_for_request;
use sentry::SentryFutureExt;
use std::net::TcpListener;

pub struct AppData {
    pub cors_origin: String,
}

/// CORS policy of the api, `*` allows any origin.
pub fn cors_handler(cors_origin: &str) -> Cors {
    let cors_handler = Cors::default()
        .allowed_methods(vec!["HEAD", "OPTIONS", "GET"])
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(86400);

    if cors_origin == "*" {
        cors_handler.allow_any_origin()
    } else {
        cors_handler.allowed_origin(cors_origin)
    }
}

pub fn run(listener: TcpListener, data: AppData) -> Result<Server, std::io::Error> {
    let cors_origin = data.cors_origin;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors_handler(&cors_origin))
            .wrap_fn(|req, srv| {
                let hub = hub_for_request(&req);
                srv.call(req).bind_hub(hub)
            })
            .configure(config_handlers)
    })
    .listen(listener)?
    .run();

    // No .await here!
    Ok(server)
}
