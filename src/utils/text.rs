use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Group digits with commas: `250000` -> `250,000`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_rupiah(value: u64) -> String {
    format!("Rp {}", format_thousands(value))
}

/// Cut `text` so it occupies at most `max_width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(50000), "50,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_rupiah(250000), "Rp 250,000");
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("Perusahaan", 20), "Perusahaan");
        assert_eq!(truncate_to_width("Perusahaan", 5), "Peru…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }
}
