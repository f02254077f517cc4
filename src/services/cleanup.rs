use regex::Regex;

/// Removes every comma that sits directly before a closing `]` or `}`,
/// whitespace allowed in between. The remote document routinely carries
/// this one malformation; anything else stays untouched and is left for
/// the JSON parser to reject.
pub fn strip_trailing_commas(text: &str) -> String {
    let trailing_re = Regex::new(r",(\s*[\]}])").unwrap();
    trailing_re.replace_all(text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_before_bracket_and_brace() {
        let raw = r#"{"data":[{"answers":["hi",],"utterances":["hey",]},]}"#;
        let cleaned = strip_trailing_commas(raw);
        assert_eq!(
            cleaned,
            r#"{"data":[{"answers":["hi"],"utterances":["hey"]}]}"#
        );
    }

    #[test]
    fn strips_across_whitespace() {
        let raw = "{\"data\": [\n  {\"answers\": [\"a\"],\n   \"utterances\": [\"b\"]} ,\n ]\n}";
        let cleaned = strip_trailing_commas(raw);
        assert!(serde_json::from_str::<serde_json::Value>(&cleaned).is_ok());
    }

    #[test]
    fn leaves_commas_inside_strings_and_lists() {
        let raw = r#"{"data":[{"answers":["a, b","c"],"utterances":["x"]}]}"#;
        assert_eq!(strip_trailing_commas(raw), raw);
    }
}
