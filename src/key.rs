use regex::Regex;

/// Return the comparison key of `line`: the suffix starting at the first match of `pattern`.
/// A line without a match is its own key.
pub(crate) fn key_of<'a>(line: &'a str, pattern: &Regex) -> &'a str {
    match pattern.find(line) {
        Some(m) => &line[m.start()..],
        None => line,
    }
}
