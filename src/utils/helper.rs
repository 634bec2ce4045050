/// Strip trailing slashes so paths can be appended directly
pub fn normalize_base_url(s: &str) -> String {
    s.trim().trim_end_matches('/').to_string()
}

/// Truncate a string to a maximum length (in characters)
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Format a dollar amount with thousands separators, e.g. `$52,340.00`
pub fn format_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Format a percentage with an explicit sign, e.g. `+1.03%`
pub fn format_signed_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}
