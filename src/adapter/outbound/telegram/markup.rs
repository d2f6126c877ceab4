//! Keyboard conversion into Telegram markup.

use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ReplyMarkup,
};

use crate::domain::Keyboard;

/// Map a channel-agnostic keyboard to Telegram reply markup.
///
/// Reply keyboards are resized and persistent so the desk buttons stay
/// under the input field.
pub fn reply_markup(keyboard: &Keyboard) -> ReplyMarkup {
    match keyboard {
        Keyboard::Reply { rows } => {
            let rows = rows
                .iter()
                .map(|row| row.iter().map(|label| KeyboardButton::new(label.as_str())));
            ReplyMarkup::Keyboard(KeyboardMarkup::new(rows).resize_keyboard().persistent())
        }
        Keyboard::Inline { rows } => {
            let rows = rows.iter().map(|row| {
                row.iter().map(|button| {
                    InlineKeyboardButton::callback(button.label.as_str(), button.data.as_str())
                })
            });
            ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(rows))
        }
    }
}
