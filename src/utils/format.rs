/// Replaces every `{key}` in `template` with its value.
///
/// The template is walked once, left to right. Substituted values are copied verbatim and
/// never scanned for placeholders. Unknown placeholders are left as-is.
///
/// # Example
/// ```
/// use rainbow_poll_bot::utils::format::fill_template;
///
/// let text = fill_template("{name} answered '{choice}'.", &[("name", "@kate"), ("choice", "yes")]);
/// assert_eq!(text, "@kate answered 'yes'.");
/// ```
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Joins display names the way result lists are shown in chat.
pub fn join_names(names: &[String]) -> String {
    names.join(", ")
}

/// Upper-cases the first character, for keyboard button labels.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_repeats_and_unknown_keys() {
        let text = fill_template("{a}-{a}-{b}", &[("a", "x")]);
        assert_eq!(text, "x-x-{b}");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let text = fill_template(
            "Yes: {yes}\nNo: {no}\nLater: {later}",
            &[("yes", "{later}"), ("no", "@bob"), ("later", "@carol")],
        );
        assert_eq!(text, "Yes: {later}\nNo: @bob\nLater: @carol");

        let text = fill_template("{name} answered '{choice}'.", &[("name", "{choice}"), ("choice", "yes")]);
        assert_eq!(text, "{choice} answered 'yes'.");
    }

    #[test]
    fn test_fill_template_unbalanced_braces() {
        assert_eq!(fill_template("{{a}", &[("a", "x")]), "{x");
        assert_eq!(fill_template("tail {a", &[("a", "x")]), "tail {a");
        assert_eq!(fill_template("}{a}{", &[("a", "x")]), "}x{");
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(&[]), "");
        assert_eq!(
            join_names(&["@ann".to_string(), "Player 7".to_string()]),
            "@ann, Player 7"
        );
    }

    #[test]
    fn test_capitalize_cyrillic() {
        assert_eq!(capitalize("кто играть в радугу?"), "Кто играть в радугу?");
        assert_eq!(capitalize("yes"), "Yes");
        assert_eq!(capitalize(""), "");
    }
}
