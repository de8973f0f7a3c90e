/// Appends `source` as a double quoted string literal, backslash escaping the
/// characters that would otherwise end the literal or be mangled in transit.
///
/// Note that `0x1A` is written as `\n`, so it decodes back as a newline.
pub fn escape(source: &str, dst: &mut String) {
    dst.reserve(source.len() + 2);
    dst.push('"');

    for c in source.chars() {
        match c {
            '\0' => dst.push_str("\\0"),
            '\'' => dst.push_str("\\'"),
            '"' => dst.push_str("\\\""),
            '\x08' => dst.push_str("\\b"),
            '\n' => dst.push_str("\\n"),
            '\r' => dst.push_str("\\r"),
            '\t' => dst.push_str("\\t"),
            '\x1A' => dst.push_str("\\n"),
            '\\' => dst.push_str("\\\\"),
            c => dst.push(c),
        }
    }

    dst.push('"');
}

/// Reverses [`escape`], reading the body of a literal without its quotes.
///
/// Unknown escape sequences keep the escaped character.
pub fn unescape(source: &str) -> String {
    let mut ret = String::with_capacity(source.len());
    let mut chars = source.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            ret.push(c);
            continue;
        }

        match chars.next() {
            Some('0') => ret.push('\0'),
            Some('b') => ret.push('\x08'),
            Some('n') => ret.push('\n'),
            Some('r') => ret.push('\r'),
            Some('t') => ret.push('\t'),
            Some(c) => ret.push(c),
            None => ret.push('\\'),
        }
    }

    ret
}
