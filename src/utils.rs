//! Utility functions

use chrono::NaiveDate;
use std::path::PathBuf;

// Bank-pillar mark. Sidebar header rendering scales this to fit.
pub const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 224"><defs><style>.p1{fill:#818cf8}.p2{fill:#fff}</style></defs><path class="p1" d="M128 0 8 64v24h240V64L128 0Z"/><rect class="p2" x="28" y="104" width="32" height="84" rx="6"/><rect class="p2" x="84" y="104" width="32" height="84" rx="6"/><rect class="p2" x="140" y="104" width="32" height="84" rx="6"/><rect class="p2" x="196" y="104" width="32" height="84" rx="6"/><path class="p1" d="M8 200h240v24H8z"/></svg>"#;

// Square variant for the window/taskbar icon.
pub const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><defs><style>.p1{fill:#818cf8}.p2{fill:#fff}</style></defs><g transform="translate(0,16)"><path class="p1" d="M128 0 8 64v24h240V64L128 0Z"/><rect class="p2" x="28" y="104" width="32" height="84" rx="6"/><rect class="p2" x="84" y="104" width="32" height="84" rx="6"/><rect class="p2" x="140" y="104" width="32" height="84" rx="6"/><rect class="p2" x="196" y="104" width="32" height="84" rx="6"/><path class="p1" d="M8 200h240v24H8z"/></g></svg>"#;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_logo_square(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the application data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(crate::constants::APP_NAME)
}

/// Format a currency amount with thousands separators and 2 decimals.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-₹{}.{:02}", grouped, frac)
    } else {
        format!("₹{}.{:02}", grouped, frac)
    }
}

/// Render an ISO-8601 timestamp or date as "15 Jan 2023", "N/A" when malformed.
pub fn format_date(timestamp: &str) -> String {
    let date_part = timestamp.split('T').next().unwrap_or(timestamp);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => "N/A".to_string(),
    }
}

/// Parse a user-typed filter date, accepting only full ISO dates.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Mask an account number down to its last four characters. Counted in
/// chars, so unexpected non-ASCII input cannot split a codepoint.
pub fn mask_account(number: &str) -> String {
    let count = number.chars().count();
    if count <= 4 {
        number.to_string()
    } else {
        let suffix: String = number.chars().skip(count - 4).collect();
        format!("••••{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(0.0), "₹0.00");
        assert_eq!(format_money(999.5), "₹999.50");
        assert_eq!(format_money(105499.08), "₹105,499.08");
        assert_eq!(format_money(1234567.89), "₹1,234,567.89");
        assert_eq!(format_money(-250.0), "-₹250.00");
    }

    #[test]
    fn date_trims_timestamps() {
        assert_eq!(format_date("2023-01-15T10:30:00Z"), "15 Jan 2023");
        assert_eq!(format_date("2023-01-15"), "15 Jan 2023");
        assert_eq!(format_date("garbage"), "N/A");
    }

    #[test]
    fn filter_dates_must_be_iso() {
        assert!(parse_date("2024-02-29").is_some());
        assert!(parse_date(" 2024-01-01 ").is_some());
        assert!(parse_date("01/02/2024").is_none());
        assert!(parse_date("2023-02-29").is_none());
    }

    #[test]
    fn account_masking_keeps_last_four() {
        assert_eq!(mask_account("1234567890"), "••••7890");
        assert_eq!(mask_account("1234"), "1234");
    }

    #[test]
    fn account_masking_handles_multibyte_input() {
        assert_eq!(mask_account("héllo12345"), "••••2345");
        assert_eq!(mask_account("счёт-999"), "••••-999");
        assert_eq!(mask_account("№999"), "№999");
    }
}
