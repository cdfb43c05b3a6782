/// Abbreviate counts of a thousand or more: `1500` -> `1.5K`, `2000` -> `2K`.
///
/// One decimal, rounded the way `Number.prototype.toFixed(1)` rounds: on the
/// exact binary value of `n / 1000`, with exact ties going up. A trailing
/// `.0` is dropped.
pub fn format_number(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }

    let thousands = n as f64 / 1000.0;
    // x.x25 and x.x75 are the only exact binary ties; they round up
    let fixed = if n % 500 == 250 {
        format!("{:.1}", thousands + 0.05)
    } else {
        format!("{:.1}", thousands)
    };

    match fixed.strip_suffix(".0") {
        Some(whole) => format!("{}K", whole),
        None => format!("{}K", fixed),
    }
}

/// Escape text for interpolation into HTML content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
