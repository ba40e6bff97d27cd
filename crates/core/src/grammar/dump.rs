use super::token::Token;

/// Serialize a token sequence to a pretty-printed JSON string.
pub fn to_pretty_json(tokens: &[Token]) -> String {
    serde_json::to_string_pretty(tokens).expect("token serialization cannot fail")
}
