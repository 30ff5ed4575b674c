//! Deployment slot identity and the labels derived from it.

use std::fmt;

/// One of the two interchangeable deployment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    Blue,
    Green,
}

impl Pool {
    /// Lowercase identifier used in headers and JSON (`blue`, `green`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Capitalized label used in human-readable bodies (`Blue`, `Green`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Blue => "💙",
            Self::Green => "💚",
        }
    }

    /// Release id reported when `RELEASE_ID` is not set.
    pub fn default_release_id(self) -> &'static str {
        match self {
            Self::Blue => "blue-v1",
            Self::Green => "green-v1",
        }
    }

    /// Body of the fallback route.
    pub fn banner(self) -> String {
        format!("{} {} App - Version 1", self.emoji(), self.label())
    }

    /// Body returned for every intercepted request while chaos mode is on.
    pub fn failure_message(self) -> String {
        format!("💥 Simulated {} failure", self.label())
    }

    pub fn chaos_enabled_message(self) -> String {
        format!("Chaos mode enabled for {}", self.label())
    }

    pub fn chaos_disabled_message(self) -> String {
        format!("Chaos mode disabled for {}", self.label())
    }

    /// Startup line announced once the listener is bound.
    pub fn startup_message(self, port: u16) -> String {
        format!("{} {} app running on port {port}", self.emoji(), self.label())
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banners_are_verbatim() {
        assert_eq!(Pool::Blue.banner(), "💙 Blue App - Version 1");
        assert_eq!(Pool::Green.banner(), "💚 Green App - Version 1");
    }

    #[test]
    fn test_chaos_messages_name_the_pool() {
        assert_eq!(Pool::Blue.failure_message(), "💥 Simulated Blue failure");
        assert_eq!(Pool::Green.failure_message(), "💥 Simulated Green failure");
        assert_eq!(Pool::Blue.chaos_enabled_message(), "Chaos mode enabled for Blue");
        assert_eq!(Pool::Green.chaos_disabled_message(), "Chaos mode disabled for Green");
    }

    #[test]
    fn test_default_release_ids() {
        assert_eq!(Pool::Blue.default_release_id(), "blue-v1");
        assert_eq!(Pool::Green.default_release_id(), "green-v1");
    }

    #[test]
    fn test_startup_message() {
        assert_eq!(Pool::Green.startup_message(3000), "💚 Green app running on port 3000");
    }

    #[test]
    fn test_display_is_lowercase_name() {
        assert_eq!(Pool::Blue.to_string(), "blue");
        assert_eq!(Pool::Green.to_string(), "green");
    }
}
