use super::escape;
use crate::driver::Flavor;

use std::fmt;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// A native value lowered to one of the kinds of SQL literal.
///
/// Numbers and dates have the same text in every dialect. Strings do not:
/// MySQL reads a double quoted literal with backslash escapes while SQLite
/// only knows single quoted literals with doubled quotes. The text is
/// therefore produced when the target dialect is known, by
/// [`Value::append_sql`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,

    /// An integer, float, or boolean in its decimal text form
    Number(String),

    String(String),

    Bytes(Vec<u8>),

    /// `YYYY-MM-DD HH:MM:SS[.fff]`
    DateTime(String),
}

impl Value {
    /// Appends the literal as `flavor` reads it.
    pub fn append_sql(&self, flavor: Flavor, dst: &mut String) {
        match self {
            Value::Null => dst.push_str("NULL"),
            Value::Number(text) => dst.push_str(text),
            Value::String(text) => match flavor {
                Flavor::Mysql => escape(text, dst),
                Flavor::Sqlite => quote_sqlite(text, dst),
            },
            Value::Bytes(bytes) => {
                dst.reserve(bytes.len() * 2 + 3);
                dst.push_str("X'");
                for byte in bytes {
                    dst.push(HEX[(byte >> 4) as usize] as char);
                    dst.push(HEX[(byte & 0xf) as usize] as char);
                }
                dst.push('\'');
            }
            Value::DateTime(text) => {
                dst.push('\'');
                dst.push_str(text);
                dst.push('\'');
            }
        }
    }

    /// The literal as `flavor` reads it.
    pub fn render(&self, flavor: Flavor) -> String {
        let mut dst = String::new();
        self.append_sql(flavor, &mut dst);
        dst
    }
}

/// Displays the backslash escaped form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Flavor::Mysql))
    }
}

/// Writes `text` as a single quoted SQLite literal.
///
/// SQLite has no escape sequences. A quote is doubled and every control
/// character, NUL included, is spliced in with `char(n)`. A literal made of
/// several pieces is parenthesized: `('a'||char(10)||'b')`.
fn quote_sqlite(text: &str, dst: &mut String) {
    let start = dst.len();
    let mut pieces = 0;
    let mut quoted = false;

    for c in text.chars() {
        if c < ' ' {
            if quoted {
                dst.push('\'');
                quoted = false;
            }
            if pieces > 0 {
                dst.push_str("||");
            }
            dst.push_str(&format!("char({})", c as u32));
            pieces += 1;
            continue;
        }

        if !quoted {
            if pieces > 0 {
                dst.push_str("||");
            }
            dst.push('\'');
            quoted = true;
            pieces += 1;
        }

        if c == '\'' {
            dst.push_str("''");
        } else {
            dst.push(c);
        }
    }

    match pieces {
        0 => dst.push_str("''"),
        1 => {
            if quoted {
                dst.push('\'');
            }
        }
        _ => {
            if quoted {
                dst.push('\'');
            }
            dst.insert(start, '(');
            dst.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite(text: &str) -> String {
        Value::String(text.to_string()).render(Flavor::Sqlite)
    }

    #[test]
    fn sqlite_strings_are_single_quoted() {
        assert_eq!(sqlite("abc"), "'abc'");
        assert_eq!(sqlite(""), "''");
        assert_eq!(sqlite("it's"), "'it''s'");
        assert_eq!(sqlite(r#"say "hi" \ there"#), r#"'say "hi" \ there'"#);
    }

    #[test]
    fn sqlite_control_characters_are_spliced() {
        assert_eq!(sqlite("line\nbreak"), "('line'||char(10)||'break')");
        assert_eq!(sqlite("\0"), "char(0)");
        assert_eq!(sqlite("a\0"), "('a'||char(0))");
        assert_eq!(sqlite("\t\tx"), "(char(9)||char(9)||'x')");
        assert_eq!(sqlite("\x1A"), "char(26)");
    }

    #[test]
    fn mysql_strings_are_backslash_escaped() {
        let value = Value::String("it's\n".to_string());
        assert_eq!(value.render(Flavor::Mysql), r#""it\'s\n""#);
        assert_eq!(value.to_string(), r#""it\'s\n""#);
    }

    #[test]
    fn same_text_in_every_dialect() {
        for value in [
            Value::Null,
            Value::Number("-1.500000".to_string()),
            Value::Bytes(vec![0, 0xab]),
            Value::DateTime("2012-05-09 02:06:14".to_string()),
        ] {
            assert_eq!(value.render(Flavor::Sqlite), value.render(Flavor::Mysql));
        }

        assert_eq!(Value::Bytes(vec![0, 0xab, 0x10]).to_string(), "X'00AB10'");
        assert_eq!(Value::Null.to_string(), "NULL");
    }
}
