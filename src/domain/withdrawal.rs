//! Withdrawal sub-dialogue states and address-reply parsing.

use chrono::{DateTime, Utc};

/// Characters kept from an address reply, including the `0x` prefix.
pub const ADDRESS_REPLY_LEN: usize = 42;

/// Prefix an address reply must start with.
pub const ADDRESS_PREFIX: &str = "0x";

/// Per-conversation withdrawal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalState {
    Idle,
    AwaitingAddress { since: DateTime<Utc> },
}

/// Result of consuming a pending expectation with a text reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressReply {
    /// Reply started with `0x`; holds at most the first 42 characters.
    Accepted(String),
    /// Reply did not look like an address.
    Rejected,
}

/// Interpret a reply to the address prompt.
#[must_use]
pub fn parse_address_reply(text: &str) -> AddressReply {
    if !text.starts_with(ADDRESS_PREFIX) {
        return AddressReply::Rejected;
    }
    let end = text
        .char_indices()
        .nth(ADDRESS_REPLY_LEN)
        .map_or(text.len(), |(idx, _)| idx);
    AddressReply::Accepted(text[..end].to_string())
}
