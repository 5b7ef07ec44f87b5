//! Common utilities and helpers

use std::time::Duration;

pub mod logging;
pub mod style;

/// Formatting helpers for reports
pub struct Utils;

impl Utils {
    /// Format elapsed wall-clock time: whole seconds up to a minute, rounded minutes beyond
    pub fn format_elapsed(elapsed: Duration) -> String {
        let seconds = elapsed.as_secs();
        if seconds > 60 {
            format!("{}min", (seconds as f64 / 60.0).round() as u64)
        } else {
            format!("{}sec", seconds)
        }
    }

    /// Format file size for display
    pub fn format_file_size(size: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(Utils::format_file_size(0), "0 B");
        assert_eq!(Utils::format_file_size(1023), "1023 B");
        assert_eq!(Utils::format_file_size(1536), "1.50 KB");
        assert_eq!(Utils::format_file_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(Utils::format_elapsed(Duration::from_millis(400)), "0sec");
        assert_eq!(Utils::format_elapsed(Duration::from_secs(42)), "42sec");
        assert_eq!(Utils::format_elapsed(Duration::from_secs(60)), "60sec");
        assert_eq!(Utils::format_elapsed(Duration::from_secs(150)), "3min");
    }
}
