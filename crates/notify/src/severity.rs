//! Notification severities and their display colors.

use std::fmt;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// The operation succeeded.
    Success,
    /// Something needs attention but nothing failed outright.
    Warning,
    /// The operation failed.
    Error,
    /// Neutral information.
    #[default]
    Info,
}

impl Severity {
    /// Returns the Discord embed color as a 24-bit RGB integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghrm_notify::Severity;
    ///
    /// assert_eq!(Severity::Error.discord_color(), 0xFF0000);
    /// ```
    #[must_use]
    pub const fn discord_color(self) -> u32 {
        match self {
            Self::Success => 0x2ECC71,
            Self::Warning => 0xFFA500,
            Self::Error => 0xFF0000,
            Self::Info => 0x7289DA,
        }
    }

    /// Returns the Slack attachment color as a hex string.
    #[must_use]
    pub const fn slack_color(self) -> &'static str {
        match self {
            Self::Success => "#36a64f",
            Self::Warning => "#ffcc00",
            Self::Error => "#ff0000",
            Self::Info => "#0000ff",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_distinct() {
        let all = [
            Severity::Success,
            Severity::Warning,
            Severity::Error,
            Severity::Info,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.discord_color(), b.discord_color());
                assert_ne!(a.slack_color(), b.slack_color());
            }
        }
    }

    #[test]
    fn slack_colors() {
        assert_eq!(Severity::Success.slack_color(), "#36a64f");
        assert_eq!(Severity::Warning.slack_color(), "#ffcc00");
        assert_eq!(Severity::Error.slack_color(), "#ff0000");
        assert_eq!(Severity::Info.slack_color(), "#0000ff");
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::default().to_string(), "info");
    }
}
