//! Routed chat actions and their trigger patterns.

/// Callback data carried by the "Enter ETH Address" inline button.
pub const ENTER_ADDRESS_CALLBACK: &str = "enter_address";

/// Label of the inline button that opens the withdrawal prompt.
pub const ENTER_ADDRESS_LABEL: &str = "Enter ETH Address";

/// Actions reachable from text messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Deposit,
    Trade,
    ToggleTrading,
    Withdraw,
}

impl Action {
    /// Actions in match order. The first pattern found in the text wins.
    pub const ALL: [Action; 5] = [
        Action::Start,
        Action::Deposit,
        Action::Trade,
        Action::ToggleTrading,
        Action::Withdraw,
    ];

    /// Actions shown on the persistent reply keyboard, one per row.
    pub const KEYBOARD: [Action; 4] = [
        Action::Deposit,
        Action::Trade,
        Action::ToggleTrading,
        Action::Withdraw,
    ];

    /// Case-sensitive pattern searched for anywhere in the message text.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Start => "/start",
            Self::Deposit => "1️⃣ Deposit ETH",
            Self::Trade => "2️⃣ Trade ETH",
            Self::ToggleTrading => "3️⃣ Start/Stop Trading",
            Self::Withdraw => "4️⃣ Withdraw Profit",
        }
    }

    /// Stable name used in logs and outcomes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Deposit => "deposit",
            Self::Trade => "trade",
            Self::ToggleTrading => "toggle",
            Self::Withdraw => "withdraw",
        }
    }

    /// Find the action triggered by a message, if any.
    #[must_use]
    pub fn match_text(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| text.contains(action.pattern()))
    }
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![("start", "Show the trading desk keyboard")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_exact_patterns() {
        assert_eq!(Action::match_text("/start"), Some(Action::Start));
        assert_eq!(Action::match_text("1️⃣ Deposit ETH"), Some(Action::Deposit));
        assert_eq!(Action::match_text("2️⃣ Trade ETH"), Some(Action::Trade));
        assert_eq!(
            Action::match_text("3️⃣ Start/Stop Trading"),
            Some(Action::ToggleTrading)
        );
        assert_eq!(
            Action::match_text("4️⃣ Withdraw Profit"),
            Some(Action::Withdraw)
        );
    }

    #[test]
    fn match_is_substring() {
        assert_eq!(Action::match_text("/start@desk_bot"), Some(Action::Start));
        assert_eq!(
            Action::match_text("please 2️⃣ Trade ETH now"),
            Some(Action::Trade)
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(Action::match_text("/START"), None);
        assert_eq!(Action::match_text("2️⃣ trade eth"), None);
    }

    #[test]
    fn first_pattern_wins() {
        let text = "4️⃣ Withdraw Profit then /start";
        assert_eq!(Action::match_text(text), Some(Action::Start));
    }

    #[test]
    fn unmatched_text_returns_none() {
        assert_eq!(Action::match_text(""), None);
        assert_eq!(Action::match_text("hello"), None);
        assert_eq!(Action::match_text("Trade ETH"), None);
    }

    #[test]
    fn keyboard_lists_four_actions_without_start() {
        assert_eq!(Action::KEYBOARD.len(), 4);
        assert!(!Action::KEYBOARD.contains(&Action::Start));
    }

    #[test]
    fn bot_commands_are_lowercase_without_slash() {
        for (command, description) in bot_commands() {
            assert!(!command.starts_with('/'));
            assert_eq!(command, command.to_lowercase());
            assert!(!description.is_empty());
        }
    }
}
