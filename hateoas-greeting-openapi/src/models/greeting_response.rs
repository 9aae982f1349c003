use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    #[serde(rename = "content")]
    pub content: String,
    #[serde(rename = "_links", default, skip_serializing_if = "super::Links::is_empty")]
    pub links: super::Links,
}

impl GreetingResponse {
    pub fn new(content: String) -> GreetingResponse {
        GreetingResponse {
            content,
            links: super::Links::new(),
        }
    }

    /// Attach `link` under `rel`, replacing any link already there.
    pub fn add_link<S: Into<String>>(&mut self, rel: S, link: super::Link) -> &mut Self {
        self.links.add(rel, link);
        self
    }
}
