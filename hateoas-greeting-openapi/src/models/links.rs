use super::Link;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Hypermedia links of a representation, keyed by relation name.
///
/// Relations keep the order in which they were first added, so a
/// representation always serializes to the same bytes. Adding a relation
/// that is already present replaces its link in place.
///
/// Serialized as a JSON object, `{"self": {"href": "..."}}`. Representations
/// embed it under the `_links` key.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Links(Vec<(String, Link)>);

impl Links {
    pub fn new() -> Links {
        Links(Vec::new())
    }

    /// Add `link` under `rel`, returning the link it replaced, if any.
    pub fn add<S: Into<String>>(&mut self, rel: S, link: Link) -> Option<Link> {
        let rel = rel.into();
        match self.0.iter_mut().find(|(r, _)| *r == rel) {
            Some((_, existing)) => Some(std::mem::replace(existing, link)),
            None => {
                self.0.push((rel, link));
                None
            }
        }
    }

    pub fn with<S: Into<String>>(mut self, rel: S, link: Link) -> Links {
        self.add(rel, link);
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|(r, _)| r == rel).map(|(_, link)| link)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Link)> {
        self.0.iter().map(|(rel, link)| (rel.as_str(), link))
    }
}

impl Serialize for Links {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, link) in &self.0 {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

struct LinksVisitor;

impl<'de> Visitor<'de> for LinksVisitor {
    type Value = Links;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of relation names to links")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Links, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut links = Links::new();
        while let Some((rel, link)) = access.next_entry::<String, Link>()? {
            links.add(rel, link);
        }
        Ok(links)
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D>(deserializer: D) -> Result<Links, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LinksVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{Link, Links};

    fn link(href: &str) -> Link {
        Link::new(href.to_string())
    }

    #[test]
    fn keeps_insertion_order() {
        let links = Links::new()
            .with("self", link("/a"))
            .with("next", link("/b"))
            .with("prev", link("/c"));

        let rels: Vec<&str> = links.iter().map(|(rel, _)| rel).collect();
        assert_eq!(vec!["self", "next", "prev"], rels);
    }

    #[test]
    fn adding_an_existing_relation_overwrites_it_in_place() {
        let mut links = Links::new().with("self", link("/a")).with("next", link("/b"));

        let replaced = links.add("self", link("/c"));

        assert_eq!(Some(link("/a")), replaced);
        assert_eq!(2, links.len());
        assert_eq!(Some(&link("/c")), links.get("self"));
        assert_eq!(Some("self"), links.iter().next().map(|(rel, _)| rel));
    }

    #[test]
    fn serializes_as_an_object_keyed_by_relation() {
        let links = Links::new()
            .with("self", link("/greeting?name=World"))
            .with("about", link("/about"));

        assert_eq!(
            r#"{"self":{"href":"/greeting?name=World"},"about":{"href":"/about"}}"#,
            serde_json::to_string(&links).unwrap()
        );
    }

    #[test]
    fn deserializing_duplicate_relations_keeps_the_last_link() {
        let links: Links =
            serde_json::from_str(r#"{"self":{"href":"/a"},"self":{"href":"/b"}}"#).unwrap();

        assert_eq!(1, links.len());
        assert_eq!(Some(&link("/b")), links.get("self"));
    }

    #[test]
    fn unknown_relation_is_none() {
        assert_eq!(None, Links::new().get("self"));
    }
}
