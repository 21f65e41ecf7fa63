use std::fmt;

/// Join class-name fragments into one class string.
///
/// Empty and whitespace-only fragments are skipped, every other fragment is
/// trimmed and appended in order with a single space between them. Nothing
/// is deduplicated or overridden: a later fragment never removes an earlier
/// one.
///
/// ```
/// use leafdom::class_names;
///
/// assert_eq!(class_names(["px-4 py-2", "", " text-sm "]), "px-4 py-2 text-sm");
/// ```
pub fn class_names<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref().trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Ordered list of utility class tokens.
///
/// Tokens are opaque strings. Order is preserved and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a whitespace separated class string into tokens.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend_str(classes);
        list
    }

    /// Append every token of a whitespace separated class string.
    pub fn extend_str(&mut self, classes: &str) {
        self.tokens
            .extend(classes.split_whitespace().map(str::to_string));
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_skips_empty_parts() {
        assert_eq!(class_names(["a", "", "   ", "b"]), "a b");
    }

    #[test]
    fn test_class_names_keeps_conflicting_tokens() {
        // Pure concatenation: the later size token does not replace the earlier one.
        assert_eq!(
            class_names(["text-base", "text-lg"]),
            "text-base text-lg"
        );
    }

    #[test]
    fn test_class_list_preserves_order_and_duplicates() {
        let mut list = ClassList::parse("p-2  rounded\tp-2");
        list.extend_str("shadow");
        assert_eq!(list.len(), 4);
        assert_eq!(list.to_string(), "p-2 rounded p-2 shadow");
        assert!(list.contains("rounded"));
        assert!(!list.contains("round"));
    }
}
