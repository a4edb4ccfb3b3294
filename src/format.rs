use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{} {}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100),
        cents % 100
    )
}

/// Renders a server timestamp as a short date, or echoes it when unparsable.
pub fn format_date(raw: &str) -> String {
    const SHORT: &str = "%d %b %Y";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(SHORT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(SHORT).to_string();
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format(SHORT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0, "₹"), "₹ 0.00");
        assert_eq!(format_currency(500.0, "₹"), "₹ 500.00");
        assert_eq!(format_currency(1234.5, "₹"), "₹ 1,234.50");
        assert_eq!(format_currency(1234567.891, "₹"), "₹ 1,234,567.89");
    }

    #[test]
    fn currency_keeps_sign() {
        assert_eq!(format_currency(-75.25, "₹"), "-₹ 75.25");
        assert_eq!(format_currency(-0.001, "₹"), "₹ 0.00");
    }

    #[test]
    fn dates_in_common_server_shapes() {
        assert_eq!(format_date("2024-03-05T10:00:00.000Z"), "05 Mar 2024");
        assert_eq!(format_date("2024-03-05T10:00:00+05:30"), "05 Mar 2024");
        assert_eq!(format_date("2024-03-05 10:00:00"), "05 Mar 2024");
        assert_eq!(format_date("2024-03-05T10:00:00.123456"), "05 Mar 2024");
        assert_eq!(format_date("2024-03-05"), "05 Mar 2024");
    }

    #[test]
    fn unparsable_date_is_echoed() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
