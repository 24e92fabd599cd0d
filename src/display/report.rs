//! Shared pieces for the dashboard and budget views

const FILLED: char = '█';
const EMPTY: char = '░';
const OVERFLOW: char = '▓';

/// A percentage as shown next to a bar
///
/// Whole numbers from 10% up, one decimal below that, and "<0.1%" for any
/// share too small to show.
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        "<0.1%".to_string()
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A fixed-width bar for a percentage
///
/// Anything past 100% fills the bar with the overflow glyph so an exceeded
/// budget stands out without widening the row.
pub fn percent_bar(pct: f64, width: usize) -> String {
    if pct > 100.0 {
        return OVERFLOW.to_string().repeat(width);
    }
    if pct.is_nan() || pct <= 0.0 {
        return EMPTY.to_string().repeat(width);
    }

    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.clamp(1, width);

    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

/// A titled section heading followed by a rule of `width` characters
pub fn section(title: &str, width: usize) -> String {
    format!("\n{}\n{}\n", title, "─".repeat(width))
}

/// Shorten `s` to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept = max_len.saturating_sub(3);
    let mut out: String = s.chars().take(kept).collect();
    out.push_str(&"...".chars().take(max_len - kept).collect::<String>());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "<0.1%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(5.55), "5.5%");
        assert_eq!(format_percentage(70.0), "70%");
        assert_eq!(format_percentage(120.4), "120%");
    }

    #[test]
    fn test_percent_bar() {
        let half = percent_bar(50.0, 10);
        assert_eq!(half.chars().filter(|c| *c == FILLED).count(), 5);
        assert_eq!(half.chars().count(), 10);

        assert_eq!(percent_bar(0.0, 4), "░░░░");
        assert_eq!(percent_bar(100.0, 4), "████");
        assert_eq!(percent_bar(130.0, 4), "▓▓▓▓");
    }

    #[test]
    fn test_tiny_share_still_shows() {
        assert!(percent_bar(0.5, 20).starts_with(FILLED));
    }

    #[test]
    fn test_section() {
        assert_eq!(section("Budgets", 3), "\nBudgets\n───\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Café au lait", 7), "Café...");
        assert_eq!(truncate("Groceries", 2), "..");
    }
}
