mod greeting_response;
pub use self::greeting_response::GreetingResponse;
mod link;
pub use self::link::Link;
mod links;
pub use self::links::Links;
