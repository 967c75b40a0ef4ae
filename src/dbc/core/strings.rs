// Helpers for DBC quoted strings.
//
// Phrases may span lines and contain escaped quotes (\") and escaped backslashes (\\),
// which are common in CM_ comments and attribute values.

// Strip the surrounding quotes of a phrase token and resolve \" and \\.
// Any other backslash is kept as written.
pub(crate) fn unquote(token: &str) -> String {
    let inner: &str = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(token);
    if !inner.contains('\\') {
        return inner.to_string();
    }

    let mut out: String = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('"' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

// Parse the index of a multiplexed-signal marker: `m3` -> 3, `m3M` -> 3.
pub(crate) fn mux_index(token: &str) -> &str {
    token.trim_start_matches('m').trim_end_matches('M')
}
