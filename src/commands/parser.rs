//! Command-line splitting into `(keyword, remainder)`.

/// Known command keywords, multi-word keywords first so that `add birth`
/// wins over `add` and `show all` over an unknown `show`.
pub const COMMAND_KEYWORDS: [&str; 14] = [
    "add birth",
    "good bye",
    "show all",
    "birthdays",
    "add",
    "birth",
    "change",
    "close",
    "del",
    "exit",
    "find",
    "hello",
    "help",
    "phone",
];

/// Split one input line into a lowercase command keyword and the remainder
/// message.
///
/// The line is matched against the known keywords by longest prefix, with a
/// word boundary after the keyword; anything else falls back to "first token
/// is the keyword". The remainder keeps its original casing.
pub fn parse_input(line: &str) -> (String, String) {
    let trimmed = line.trim();
    let bytes = trimmed.as_bytes();

    for keyword in COMMAND_KEYWORDS {
        let len = keyword.len();
        let prefix_matches =
            bytes.len() >= len && bytes[..len].eq_ignore_ascii_case(keyword.as_bytes());

        if prefix_matches && (bytes.len() == len || bytes[len].is_ascii_whitespace()) {
            return (keyword.to_string(), trimmed[len..].trim().to_string());
        }
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_lowercase(), rest.trim().to_string()),
        None => (trimmed.to_lowercase(), String::new()),
    }
}
