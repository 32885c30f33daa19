/// Renders seconds as `HH:MM:SS`. Hours are not wrapped at 24 and simply
/// grow past two digits.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}

pub fn format_money(amount: f64, symbol: &str, decimals: usize) -> String {
    if symbol.is_empty() {
        format!("{amount:.decimals$}")
    } else {
        format!("{amount:.decimals$} {symbol}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_elapsed_time() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(3661), "01:01:01");
        assert_eq!(format_elapsed(86_400), "24:00:00");
        assert_eq!(format_elapsed(360_000), "100:00:00");
    }

    #[test]
    fn formats_money_and_hours() {
        assert_eq!(format_money(150.0, "€", 2), "150.00 €");
        assert_eq!(format_money(3.14159, "", 3), "3.142");
        assert_eq!(format_hours(1.0 / 3.0), "0.33");
    }
}
