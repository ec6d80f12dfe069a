//! Pure formatting helpers shared by the TUI and the one-shot CLI
//!
//! Everything here is a function of its arguments: percentage strings,
//! similarity tiers, digit grouping, truncation notes, and byte sizes.

/// Color/severity tier for a similarity score. Thresholds are inclusive on
/// the lower bound: 0.8 is high, 0.5 is medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityTier {
    High,
    Medium,
    Low,
}

impl SimilarityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            SimilarityTier::High
        } else if score >= 0.5 {
            SimilarityTier::Medium
        } else {
            SimilarityTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimilarityTier::High => "high",
            SimilarityTier::Medium => "medium",
            SimilarityTier::Low => "low",
        }
    }
}

/// Similarity score as a percentage, one decimal place: 0.85 -> "85.0%".
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Format an integer with grouping separators: 1234567 -> "1,234,567".
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Note for a server-truncated list: the service returns at most the first
/// few items but reports the untruncated total.
pub fn truncation_note(shown: usize, total: usize) -> Option<String> {
    if total > shown {
        Some(format!("... and {} more", total - shown))
    } else {
        None
    }
}

/// Human-readable byte size: 1258291 -> "1.2 MB".
pub fn format_bytes(size: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let size = size as f64;
    if size >= MB {
        format!("{:.1} MB", size / MB)
    } else if size >= KB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{} B", size as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_percent(0.85), "85.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(0.123), "12.3%");
    }

    #[test]
    fn test_tier_thresholds_inclusive_on_lower_bound() {
        assert_eq!(SimilarityTier::from_score(0.85), SimilarityTier::High);
        assert_eq!(SimilarityTier::from_score(0.8), SimilarityTier::High);
        assert_eq!(SimilarityTier::from_score(0.79999), SimilarityTier::Medium);
        assert_eq!(SimilarityTier::from_score(0.5), SimilarityTier::Medium);
        assert_eq!(SimilarityTier::from_score(0.49999), SimilarityTier::Low);
        assert_eq!(SimilarityTier::from_score(0.0), SimilarityTier::Low);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(SimilarityTier::High.label(), "high");
        assert_eq!(SimilarityTier::Medium.label(), "medium");
        assert_eq!(SimilarityTier::Low.label(), "low");
    }

    #[test]
    fn test_digit_grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(45120), "45,120");
        assert_eq!(group_digits(1234567), "1,234,567");
    }

    #[test]
    fn test_truncation_note() {
        assert_eq!(truncation_note(2, 5), Some("... and 3 more".to_string()));
        assert_eq!(truncation_note(5, 5), None);
        assert_eq!(truncation_note(0, 0), None);
    }

    #[test]
    fn test_byte_formatting() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(1258291), "1.2 MB");
    }
}
