//! Reply templates.
//!
//! Every message the desk sends is built here. Rich-text bodies are
//! Telegram MarkdownV2: static text is pre-escaped and dynamic values go
//! through [`escape_markdown`] or, inside code spans, [`escape_code`].

use rust_decimal::Decimal;

use crate::domain::{
    Action, ConversationId, InlineButton, Keyboard, OutboundMessage, ENTER_ADDRESS_CALLBACK,
    ENTER_ADDRESS_LABEL,
};

/// Minimum deposit shown on the deposit card.
pub const DEPOSIT_MINIMUM: &str = "0.1 ETH";
/// Network shown on the deposit card.
pub const DEPOSIT_NETWORK: &str = "Ethereum Mainnet";
/// Market shown on trade alerts.
pub const TRADE_MARKET: &str = "ETH/USDT";
/// Side shown on trade alerts.
pub const TRADE_SIDE: &str = "BUY";
/// Position size shown on trade alerts.
pub const TRADE_POSITION_SIZE: &str = "5 ETH";
/// Balance shown on the withdrawal card.
pub const WITHDRAW_BALANCE: &str = "10.25 ETH";
/// Last-trade profit shown on the withdrawal card.
pub const WITHDRAW_LAST_PROFIT: &str = "1.75 ETH";
/// Arrival estimate shown on withdrawal confirmations.
pub const WITHDRAW_ARRIVAL: &str = "5-10 minutes";

/// Escape special characters for Telegram MarkdownV2.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Escape text placed inside a MarkdownV2 code span.
#[must_use]
pub fn escape_code(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '`' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Welcome message with the persistent action keyboard.
#[must_use]
pub fn welcome(conversation: ConversationId) -> OutboundMessage {
    let rows = Action::KEYBOARD
        .iter()
        .map(|action| vec![action.pattern().to_string()])
        .collect();

    OutboundMessage::plain(
        conversation,
        "🚀 Welcome to Demo ETH Trading Bot!\n\nSelect an option below:",
    )
    .with_keyboard(Keyboard::Reply { rows })
}

/// Deposit card for a freshly generated address.
#[must_use]
pub fn deposit(conversation: ConversationId, address: &str) -> OutboundMessage {
    OutboundMessage::rich(
        conversation,
        format!(
            "📥 *Deposit ETH Here*\n\
            \n\
            Send your ETH to this address:\n\
            `{}`\n\
            \n\
            *Minimum: {}*\n\
            *Network: {}*",
            escape_code(address),
            escape_markdown(DEPOSIT_MINIMUM),
            escape_markdown(DEPOSIT_NETWORK),
        ),
    )
}

/// Immediate alert sent when a trade starts.
#[must_use]
pub fn trade_alert(conversation: ConversationId, local_time: &str) -> OutboundMessage {
    OutboundMessage::rich(
        conversation,
        format!(
            "⚡ *Trade Alert\\!*\n\
            \n\
            🕒 {}\n\
            🚀 Hurry\\! I'm going into the ETH market NOW to make profit for you\\!\n\
            \n\
            *Executing trade\\.\\.\\.*\n\
            *Market: {}*\n\
            *Action: {}*\n\
            *Position size: {}*",
            escape_markdown(local_time),
            escape_markdown(TRADE_MARKET),
            escape_markdown(TRADE_SIDE),
            escape_markdown(TRADE_POSITION_SIZE),
        ),
    )
}

/// Delayed message reporting a finished trade.
#[must_use]
pub fn trade_completed(conversation: ConversationId, profit: Decimal) -> OutboundMessage {
    OutboundMessage::plain(
        conversation,
        format!("✅ Trade completed! Estimated profit: {profit:.2} ETH"),
    )
}

/// Descriptive message after the trading switch flips.
#[must_use]
pub fn trading_switched(conversation: ConversationId, active: bool) -> OutboundMessage {
    let body = if active {
        "✅ Trading Started\n\nAuto-trading is now ACTIVE.\nI will execute trades based on market signals."
    } else {
        "⛔ Trading Stopped\n\nAll trading activities have been paused.\nNo new positions will be opened."
    };
    OutboundMessage::plain(conversation, body)
}

/// One-line status summary.
#[must_use]
pub fn trading_status(conversation: ConversationId, active: bool) -> OutboundMessage {
    let status = if active { "ACTIVE 🟢" } else { "STOPPED 🔴" };
    OutboundMessage::plain(conversation, format!("📊 Current Status: {status}"))
}

/// Withdrawal card with the inline "Enter ETH Address" button.
#[must_use]
pub fn withdraw_offer(conversation: ConversationId) -> OutboundMessage {
    OutboundMessage::rich(
        conversation,
        format!(
            "💰 *Withdraw Profits*\n\
            \n\
            Available balance: *{}*\n\
            Profit from last trade: *{}*\n\
            \n\
            Click below to enter your withdrawal address:",
            escape_markdown(WITHDRAW_BALANCE),
            escape_markdown(WITHDRAW_LAST_PROFIT),
        ),
    )
    .with_keyboard(Keyboard::Inline {
        rows: vec![vec![InlineButton {
            label: ENTER_ADDRESS_LABEL.to_string(),
            data: ENTER_ADDRESS_CALLBACK.to_string(),
        }]],
    })
}

/// Prompt asking for a destination address.
#[must_use]
pub fn address_prompt(conversation: ConversationId) -> OutboundMessage {
    OutboundMessage::rich(
        conversation,
        "Please send your ETH address where you want to receive funds\\.\n\
        \n\
        Format: `0x742d35Cc6634C0532925a3b844Bc9e...`",
    )
}

/// Reply when a prompt is already open for the conversation.
#[must_use]
pub fn withdrawal_pending(conversation: ConversationId) -> OutboundMessage {
    OutboundMessage::plain(
        conversation,
        "⏳ A withdrawal request is already pending. Send your ETH address to continue.",
    )
}

/// Demo confirmation for an accepted address.
#[must_use]
pub fn withdrawal_confirmed(
    conversation: ConversationId,
    address: &str,
    tx_hash: &str,
) -> OutboundMessage {
    OutboundMessage::rich(
        conversation,
        format!(
            "✅ *Withdrawal Processed\\!*\n\
            \n\
            🎉 Congratulations\\! 10 ETH profit is coming your way\\!\n\
            \n\
            📤 Sent to: `{}`\n\
            ⏱️ Estimated arrival: {}\n\
            📋 Transaction ID: `0x{}`\n\
            \n\
            *Note: This is a DEMO\\. No actual ETH has been sent\\.*",
            escape_code(address),
            escape_markdown(WITHDRAW_ARRIVAL),
            escape_code(tx_hash),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Formatting;
    use rust_decimal_macros::dec;

    const CHAT: ConversationId = ConversationId::new(42);

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("0.1 ETH"), "0\\.1 ETH");
        assert_eq!(escape_markdown("5-10"), "5\\-10");
    }

    #[test]
    fn test_escape_markdown_all_special_chars() {
        let special = "_*[]()~`>#+-=|{}.!";
        let escaped = escape_markdown(special);
        assert_eq!(
            escaped,
            "\\_\\*\\[\\]\\(\\)\\~\\`\\>\\#\\+\\-\\=\\|\\{\\}\\.\\!"
        );
    }

    #[test]
    fn test_escape_code_only_touches_backtick_and_backslash() {
        assert_eq!(escape_code("0xab.c_d"), "0xab.c_d");
        assert_eq!(escape_code("a`b\\c"), "a\\`b\\\\c");
    }

    #[test]
    fn welcome_has_four_button_reply_keyboard() {
        let message = welcome(CHAT);
        assert_eq!(message.formatting, Formatting::Plain);
        match message.keyboard {
            Some(Keyboard::Reply { ref rows }) => {
                assert_eq!(rows.len(), 4);
                assert!(rows.iter().all(|row| row.len() == 1));
                assert_eq!(rows[0][0], "1️⃣ Deposit ETH");
                assert_eq!(rows[3][0], "4️⃣ Withdraw Profit");
            }
            other => panic!("expected reply keyboard, got {other:?}"),
        }
    }

    #[test]
    fn deposit_shows_address_in_code_span() {
        let address = format!("0x{}", "a".repeat(40));
        let message = deposit(CHAT, &address);
        assert_eq!(message.formatting, Formatting::RichText);
        assert!(message.body.contains(&format!("`{address}`")));
        assert!(message.body.contains("Minimum: 0\\.1 ETH"));
        assert!(message.body.contains("Ethereum Mainnet"));
    }

    #[test]
    fn trade_alert_is_stamped() {
        let message = trade_alert(CHAT, "12:34:56");
        assert!(message.body.contains("🕒 12:34:56"));
        assert!(message.body.contains("ETH/USDT"));
        assert!(message.body.contains("Position size: 5 ETH"));
    }

    #[test]
    fn trade_completed_shows_two_decimals() {
        let message = trade_completed(CHAT, dec!(1.5));
        assert_eq!(
            message.body,
            "✅ Trade completed! Estimated profit: 1.50 ETH"
        );
        assert_eq!(message.formatting, Formatting::Plain);
    }

    #[test]
    fn trading_status_reflects_flag() {
        assert!(trading_status(CHAT, true).body.contains("ACTIVE 🟢"));
        assert!(trading_status(CHAT, false).body.contains("STOPPED 🔴"));
        assert!(trading_switched(CHAT, true).body.contains("Trading Started"));
        assert!(trading_switched(CHAT, false).body.contains("Trading Stopped"));
    }

    #[test]
    fn withdraw_offer_has_single_inline_button() {
        let message = withdraw_offer(CHAT);
        assert!(message.body.contains("10\\.25 ETH"));
        match message.keyboard {
            Some(Keyboard::Inline { ref rows }) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].len(), 1);
                assert_eq!(rows[0][0].data, ENTER_ADDRESS_CALLBACK);
                assert_eq!(rows[0][0].label, ENTER_ADDRESS_LABEL);
            }
            other => panic!("expected inline keyboard, got {other:?}"),
        }
    }

    #[test]
    fn confirmation_echoes_address_and_hash() {
        let address = format!("0x{}", "A".repeat(40));
        let hash = "f".repeat(64);
        let message = withdrawal_confirmed(CHAT, &address, &hash);
        assert!(message.body.contains(&format!("`{address}`")));
        assert!(message.body.contains(&format!("`0x{hash}`")));
        assert!(message.body.contains("5\\-10 minutes"));
        assert!(message.body.contains("DEMO"));
    }
}
