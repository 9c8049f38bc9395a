//! Display formatting for numeric snapshot fields

/// Format a price as currency
///
/// Sub-dollar prices keep six decimals, everything else gets two decimals
/// with thousands separators.
///
/// # Examples
///
/// ```
/// use gotham_domain::format::price;
///
/// assert_eq!(price(0.123456789), "$0.123457");
/// assert_eq!(price(64250.5), "$64,250.50");
/// ```
pub fn price(value: f64) -> String {
    if value < 1.0 {
        return format!("${:.6}", value);
    }
    format!("${}", grouped(value, 2))
}

/// Format a market capitalization with a T/B/M suffix
///
/// # Examples
///
/// ```
/// use gotham_domain::format::market_cap;
///
/// assert_eq!(market_cap(2.5e12), "$2.50T");
/// assert_eq!(market_cap(7.25e9), "$7.25B");
/// assert_eq!(market_cap(12_345.0), "$12,345");
/// ```
pub fn market_cap(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${}", grouped(value, 0))
    }
}

/// Format a percentage with an explicit sign and two decimals
pub fn signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Two decimals, no grouping
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Group the integer part of a number in threes
fn grouped(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (rendered, None),
    };

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    if value < 0.0 {
        out.insert(0, '-');
    }
    out
}
