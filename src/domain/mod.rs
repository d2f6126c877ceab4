//! Channel-agnostic domain types.

mod action;
mod event;
mod id;
mod message;
mod synthetic;
mod withdrawal;

pub use action::{bot_commands, Action, ENTER_ADDRESS_CALLBACK, ENTER_ADDRESS_LABEL};
pub use event::InboundEvent;
pub use id::ConversationId;
pub use message::{Formatting, InlineButton, Keyboard, OutboundMessage};
pub use synthetic::{
    deposit_address, random_hex, transaction_hash, ProfitRange, ADDRESS_HEX_LEN, TX_HASH_HEX_LEN,
};
pub use withdrawal::{
    parse_address_reply, AddressReply, WithdrawalState, ADDRESS_PREFIX, ADDRESS_REPLY_LEN,
};
