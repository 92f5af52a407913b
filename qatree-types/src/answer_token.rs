use crate::ChoiceOption;

/// A decoded answer token.
///
/// Choice answers travel as `"<id>:<content>"` strings so a single value
/// carries both the option's identity and the text it was displayed as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerToken {
    id: String,
    content: String,
}

impl AnswerToken {
    /// Create a token from its parts.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Encode an id/label pair as an `"id:label"` string.
    ///
    /// There is no escaping: the id must not contain `:`. The label may,
    /// because decoding splits on the first occurrence only.
    pub fn encode(id: &str, label: &str) -> String {
        format!("{id}:{label}")
    }

    /// Decode an `"id:content"` token, splitting on the first `:`.
    ///
    /// Returns `None` when the separator is missing; the caller decides
    /// what to do with the unparsed string.
    pub fn decode(token: &str) -> Option<Self> {
        let (id, content) = token.split_once(':')?;
        Some(Self::new(id, content))
    }

    /// Get the option id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Re-encode this token to its wire form.
    pub fn to_wire(&self) -> String {
        Self::encode(&self.id, &self.content)
    }
}

/// Find the display label for an option id.
///
/// Linear scan; the first match wins. Used when an answer carries a bare id
/// without an attached label.
pub fn resolve_label<'a>(options: &'a [ChoiceOption], id: &str) -> Option<&'a str> {
    options.iter().find(|o| o.id() == id).map(ChoiceOption::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let encoded = AnswerToken::encode("a", "Red");
        assert_eq!(encoded, "a:Red");

        let token = AnswerToken::decode(&encoded).unwrap();
        assert_eq!(token.id(), "a");
        assert_eq!(token.content(), "Red");
        assert_eq!(token.to_wire(), encoded);
    }

    #[test]
    fn decode_without_separator() {
        assert_eq!(AnswerToken::decode("malformed"), None);
        assert_eq!(AnswerToken::decode(""), None);
    }

    #[test]
    fn content_may_contain_separator() {
        let token = AnswerToken::decode("a:Red: or so").unwrap();
        assert_eq!(token.id(), "a");
        assert_eq!(token.content(), "Red: or so");
    }

    #[test]
    fn resolve_label_finds_first_match() {
        let options = vec![
            ChoiceOption::new("a", "Red"),
            ChoiceOption::new("b", "Blue"),
        ];
        assert_eq!(resolve_label(&options, "b"), Some("Blue"));
        assert_eq!(resolve_label(&options, "c"), None);
        assert_eq!(resolve_label(&[], "a"), None);
    }
}
