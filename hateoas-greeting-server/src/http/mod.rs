pub mod handlers;
pub mod routes;
pub mod sentry_middleware;
