use super::Dynamic;

/// Format a Dynamic value for display.
pub fn format_dynamic(value: &Dynamic) -> String {
    if value.is_unit() {
        String::new()
    } else if let Ok(n) = value.as_float() {
        format_number(n)
    } else if let Ok(n) = value.as_int() {
        n.to_string()
    } else if let Ok(b) = value.as_bool() {
        if b { "TRUE" } else { "FALSE" }.to_string()
    } else if let Ok(s) = value.clone().into_string() {
        s
    } else {
        format!("{:?}", value)
    }
}

/// Format a number for display.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "#NAN!".to_string()
    } else if n.is_infinite() {
        "#INF!".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e10 {
        format!("{:.0}", n)
    } else {
        format!("{:.2}", n)
    }
}

/// Spill a result into display lines.
///
/// Arrays spill down one element per line; an array of arrays spills one row
/// per line with tab-separated columns. Anything else is a single line, and
/// an empty array spills nothing.
pub fn spill_lines(value: &Dynamic) -> Vec<String> {
    let Some(items) = value.read_lock::<rhai::Array>() else {
        return vec![format_dynamic(value)];
    };
    items
        .iter()
        .map(|item| match item.read_lock::<rhai::Array>() {
            Some(row) => row
                .iter()
                .map(format_dynamic)
                .collect::<Vec<_>>()
                .join("\t"),
            None => format_dynamic(item),
        })
        .collect()
}
