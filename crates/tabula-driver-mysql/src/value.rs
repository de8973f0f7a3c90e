use mysql_async::Value;

/// Converts a fetched MySQL value to the raw cell handed to the row mapping.
///
/// The text protocol delivers almost everything as bytes. Binary values are
/// rendered as the text MySQL itself would send.
pub(crate) fn to_cell(value: &Value) -> Option<Vec<u8>> {
    let text = match value {
        Value::NULL => return None,
        Value::Bytes(bytes) => return Some(bytes.clone()),
        Value::Int(value) => value.to_string(),
        Value::UInt(value) => value.to_string(),
        Value::Float(value) => value.to_string(),
        Value::Double(value) => value.to_string(),
        Value::Date(year, month, day, hour, minute, second, micros) => {
            let mut text = format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            );
            if *micros != 0 {
                text.push_str(&format!(".{micros:06}"));
            }
            text
        }
        Value::Time(negative, days, hours, minutes, seconds, micros) => {
            let sign = if *negative { "-" } else { "" };
            let hours = u32::from(*hours) + days * 24;
            let mut text = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
            if *micros != 0 {
                text.push_str(&format!(".{micros:06}"));
            }
            text
        }
    };

    Some(text.into_bytes())
}
