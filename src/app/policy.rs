//! Request policies: timeout and response ordering.
//!
//! Both are parsed from plugin configuration values. Unrecognised values
//! fall back to the defaults and log a warning.

/// How long a search may stay in the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutPolicy {
    /// Wait for the response indefinitely.
    #[default]
    NoTimeout,
    /// Fail the search once this many seconds have passed since submit.
    After {
        /// Timeout in whole seconds, always greater than zero.
        seconds: u32,
    },
}

impl TimeoutPolicy {
    /// Parses `none` (or `0`) and positive integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use breed_search::app::TimeoutPolicy;
    ///
    /// assert_eq!(TimeoutPolicy::parse("none"), Some(TimeoutPolicy::NoTimeout));
    /// assert_eq!(TimeoutPolicy::parse("15"), Some(TimeoutPolicy::After { seconds: 15 }));
    /// assert_eq!(TimeoutPolicy::parse("soon"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            return Some(Self::NoTimeout);
        }
        match value.parse::<u32>().ok()? {
            0 => Some(Self::NoTimeout),
            seconds => Some(Self::After { seconds }),
        }
    }

    /// Seconds until expiry, if the policy has one.
    #[must_use]
    pub const fn seconds(self) -> Option<u32> {
        match self {
            Self::NoTimeout => None,
            Self::After { seconds } => Some(seconds),
        }
    }
}

/// Which completions may change the search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Only the response to the most recent submit is applied; responses to
    /// earlier submits are discarded.
    #[default]
    LatestOnly,
    /// Every response is applied as it resolves, so the last one to arrive
    /// wins even if it belongs to an older submit.
    LastToResolve,
}

impl ResponseOrdering {
    /// Parses `discard` / `latest` and `accept` / `last`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "discard" | "latest" => Some(Self::LatestOnly),
            "accept" | "last" => Some(Self::LastToResolve),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seconds_means_no_timeout() {
        assert_eq!(TimeoutPolicy::parse("0"), Some(TimeoutPolicy::NoTimeout));
        assert_eq!(TimeoutPolicy::parse(" NONE "), Some(TimeoutPolicy::NoTimeout));
    }

    #[test]
    fn negative_timeout_is_rejected() {
        assert_eq!(TimeoutPolicy::parse("-5"), None);
    }

    #[test]
    fn seconds_accessor() {
        assert_eq!(TimeoutPolicy::NoTimeout.seconds(), None);
        assert_eq!(TimeoutPolicy::After { seconds: 3 }.seconds(), Some(3));
    }

    #[test]
    fn ordering_aliases() {
        assert_eq!(ResponseOrdering::parse("Discard"), Some(ResponseOrdering::LatestOnly));
        assert_eq!(ResponseOrdering::parse("accept"), Some(ResponseOrdering::LastToResolve));
        assert_eq!(ResponseOrdering::parse("sometimes"), None);
    }
}
