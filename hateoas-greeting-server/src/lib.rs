#[macro_use]
extern crate serde_derive;
pub mod errors;
pub mod http;
pub mod server;

pub use hateoas_greeting_openapi::models as openapi_models;
