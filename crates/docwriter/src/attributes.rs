//! Element attributes

use indexmap::IndexMap;

/// Attributes of an element, in the order the producer supplied them.
pub type Attributes = IndexMap<String, String>;

/// Build an attribute map from borrowed pairs.
pub fn attributes(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Look up an attribute, treating an empty value as missing.
pub(crate) fn non_empty<'a>(attributes: &'a Attributes, name: &str) -> Option<&'a str> {
    attributes
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}
