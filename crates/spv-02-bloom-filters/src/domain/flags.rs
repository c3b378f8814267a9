//! Filter update policy
//!
//! Tells the serving peer how to grow the filter when an output matches.
//! The filter stores the raw byte; `BloomFlags` is the serving side's reading
//! of it.

use serde::{Deserialize, Serialize};

/// Mask applied to the raw policy byte.
pub const BLOOM_UPDATE_MASK: u8 = 0x03;

/// Update policy carried alongside a filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BloomFlags {
    /// Never update the filter on a match.
    #[default]
    None = 0,
    /// Insert the outpoint of every matched output.
    All = 1,
    /// Only insert outpoints of pay-to-pubkey and multisig outputs.
    P2PubKeyOnly = 2,
}

impl BloomFlags {
    /// Read a raw policy byte the way a serving peer does. Bits above the
    /// mask are ignored and the unassigned value `3` reads as `None`.
    ///
    /// Lossy; keep the raw byte when it has to be sent on.
    pub fn from_byte(byte: u8) -> Self {
        match byte & BLOOM_UPDATE_MASK {
            1 => Self::All,
            2 => Self::P2PubKeyOnly,
            _ => Self::None,
        }
    }

    /// Raw policy byte.
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}
