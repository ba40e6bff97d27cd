//! GS1 application-identifier payloads.
//!
//! Renders the parenthesized element-string form that Code 128 mode `D`
//! consumes, e.g. `(01)09501101530003(17)260131`.

use super::FieldError;

/// An ordered GS1 element string: `(application identifier, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gs1Payload {
    elements: Vec<(String, String)>,
}

impl Gs1Payload {
    /// An empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `(ai) value` element.
    #[must_use]
    pub fn element(mut self, ai: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements.push((ai.into(), value.into()));
        self
    }

    /// Render the element string, validating every AI and value.
    pub fn to_field_data(&self) -> Result<String, FieldError> {
        if self.elements.is_empty() {
            return Err(FieldError::Invalid {
                what: "GS1 payload",
                reason: "no elements".into(),
            });
        }
        let mut out = String::new();
        for (ai, value) in &self.elements {
            if ai.len() < 2 || ai.len() > 4 || !ai.chars().all(|c| c.is_ascii_digit()) {
                return Err(FieldError::Invalid {
                    what: "GS1 application identifier",
                    reason: format!("'{ai}' is not 2-4 digits"),
                });
            }
            if value.is_empty() {
                return Err(FieldError::Invalid {
                    what: "GS1 element value",
                    reason: format!("AI ({ai}) has an empty value"),
                });
            }
            if value.contains(['(', ')']) {
                return Err(FieldError::Invalid {
                    what: "GS1 element value",
                    reason: format!("AI ({ai}) value contains parentheses"),
                });
            }
            out.push('(');
            out.push_str(ai);
            out.push(')');
            out.push_str(value);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_parenthesized_elements_in_order() {
        let payload = Gs1Payload::new()
            .element("01", "09501101530003")
            .element("17", "260131")
            .element("10", "LOT42");
        assert_eq!(
            payload.to_field_data().unwrap(),
            "(01)09501101530003(17)260131(10)LOT42"
        );
    }

    #[test]
    fn rejects_non_numeric_ai() {
        let payload = Gs1Payload::new().element("ab", "1");
        assert!(matches!(
            payload.to_field_data(),
            Err(FieldError::Invalid { what: "GS1 application identifier", .. })
        ));
    }

    #[test]
    fn rejects_bad_ai_width() {
        assert!(Gs1Payload::new().element("1", "x").to_field_data().is_err());
        assert!(Gs1Payload::new().element("12345", "x").to_field_data().is_err());
    }

    #[test]
    fn rejects_empty_payload_and_values() {
        assert!(Gs1Payload::new().to_field_data().is_err());
        assert!(Gs1Payload::new().element("01", "").to_field_data().is_err());
        assert!(
            Gs1Payload::new()
                .element("10", "a(b)c")
                .to_field_data()
                .is_err()
        );
    }
}
