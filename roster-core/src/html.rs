/// Escapes text for safe interpolation into HTML content and quoted
/// attribute values.
///
/// Existing entities are escaped again, not passed through.
#[must_use]
pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(
            escape_html(r#"<b class="x">Tom & 'Jerry'</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_html_escapes_existing_entities() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("Matrícula 2024"), "Matrícula 2024");
        assert_eq!(escape_html(""), "");
    }

    proptest::proptest! {
        #[test]
        fn proptest_escaped_text_has_no_raw_markup(input in "\\PC{0,64}") {
            let escaped = escape_html(&input);
            proptest::prop_assert!(!escaped.contains('<'));
            proptest::prop_assert!(!escaped.contains('>'));
            proptest::prop_assert!(!escaped.contains('"'));
            proptest::prop_assert!(!escaped.contains('\''));
        }

        #[test]
        fn proptest_escape_is_identity_without_special_chars(input in "[a-zA-Z0-9 áéíóúç]{0,64}") {
            proptest::prop_assert_eq!(escape_html(&input), input);
        }
    }
}
