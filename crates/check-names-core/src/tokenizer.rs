//! Identifier splitting.

/// Splits an identifier into sub-word tokens.
///
/// Scanning left to right:
/// - `_` ends the current token and is dropped;
/// - an uppercase letter starts a new token when the token being built is
///   non-empty and does not itself end in an uppercase letter, so runs of
///   capitals stay attached to the word that follows them;
/// - every other character is appended.
///
/// The token in progress at the end is always emitted, so leading, trailing
/// and doubled underscores produce empty tokens.
///
/// ```
/// use check_names_core::tokenize;
///
/// assert_eq!(tokenize("max_http_count"), ["max", "http", "count"]);
/// assert_eq!(tokenize("getHTTPResponse"), ["get", "HTTPResponse"]);
/// ```
#[must_use]
pub fn tokenize(name: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut token = String::new();

    for ch in name.chars() {
        if ch == '_' {
            tokens.push(std::mem::take(&mut token));
            continue;
        }
        if ch.is_ascii_uppercase()
            && token.chars().last().is_some_and(|c| !c.is_ascii_uppercase())
        {
            tokens.push(std::mem::take(&mut token));
        }
        token.push(ch);
    }
    tokens.push(token);

    tokens
}
