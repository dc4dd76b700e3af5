pub mod cities;
pub mod countries;
pub mod error;
pub mod health;
pub mod hierarchy;
pub mod states;

/// Raw query pairs in request order. Decoding into pairs never rejects, so a
/// repeated key is still a well-formed query.
type QueryPairs = Vec<(String, String)>;

/// First value given for `key`; an empty value counts as absent.
fn required(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
        .filter(|value| !value.is_empty())
}
