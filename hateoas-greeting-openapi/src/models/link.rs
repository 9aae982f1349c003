use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "href")]
    pub href: String,
}

impl Link {
    pub fn new(href: String) -> Link {
        Link { href }
    }
}
