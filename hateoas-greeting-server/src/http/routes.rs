use crate::errors::GreetingError;
use actix_web::HttpRequest;
use url::Url;

/// A named route: its path and the query parameters it is linked with.
///
/// Handlers register the resource from `name` and `path`, and links to it
/// are produced by filling the same template with concrete values, so the
/// two can never drift apart.
#[derive(Debug)]
pub struct RouteTemplate {
    pub name: &'static str,
    pub path: &'static str,
    pub query: &'static [&'static str],
}

pub const GREETING: RouteTemplate = RouteTemplate {
    name: "greeting",
    path: "/greeting",
    query: &["name"],
};

impl RouteTemplate {
    /// Absolute url of this route as seen by the client of `req`.
    ///
    /// Scheme and host come from the connection info, which honors the
    /// `Forwarded` and `X-Forwarded-*` headers set by reverse proxies.
    /// `args` are matched positionally with `query`.
    pub fn url_for(&self, req: &HttpRequest, args: &[&str]) -> Result<Url, GreetingError> {
        let mut url = req.url_for_static(self.name)?;
        self.fill_query(&mut url, args);
        Ok(url)
    }

    fn fill_query(&self, url: &mut Url, args: &[&str]) {
        debug_assert_eq!(self.query.len(), args.len());

        if self.query.is_empty() {
            return;
        }

        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in self.query.iter().zip(args) {
            pairs.append_pair(key, value);
        }
    }
}
