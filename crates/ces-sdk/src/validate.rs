/*
[INPUT]:  Caller-supplied correlate inputs
[OUTPUT]: Pre-flight validation result naming the first invalid slot
[POS]:    Validation layer - runs before any network access
[UPDATE]: When an input gains a new identifying form or a new operation is added
*/

//! Mutually exclusive identifier forms.
//!
//! Every correlate input identifies three things: the source exchange, the
//! target exchanges and the subject (coin, network or ticker). Each of these
//! slots accepts several alternative forms and exactly one of them must be
//! filled. The server re-checks the same rule.

use std::fmt;

use thiserror::Error;

/// Remote operation exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ExchangeList,
    CoinCorrelate,
    NetworkCorrelate,
    TickerCorrelate,
}

impl Operation {
    /// Endpoint path relative to the base URL
    pub fn path(self) -> &'static str {
        match self {
            Operation::ExchangeList => "/api/v1/exchange/list",
            Operation::CoinCorrelate => "/api/v1/coin/correlate",
            Operation::NetworkCorrelate => "/api/v1/network/correlate",
            Operation::TickerCorrelate => "/api/v1/ticker/correlate",
        }
    }

    /// Wire names of the alternative forms accepted by a slot
    pub fn slot_fields(self, slot: Slot) -> &'static [&'static str] {
        match (slot, self) {
            (Slot::From, _) => &["ExchangeFrom", "ExchangeFromID"],
            (Slot::To, _) => &["ExchangeTo", "ExchangeToID"],
            (Slot::Subject, Operation::CoinCorrelate) => {
                &["ExchangeCoin", "ExchangeCoinBase", "ExchangeCoinID"]
            }
            (Slot::Subject, Operation::NetworkCorrelate) => {
                &["ExchangeNetwork", "ExchangeNetworkCode", "ExchangeNetworkID"]
            }
            (Slot::Subject, Operation::TickerCorrelate) => &["ExchangeTicker", "ExchangeTickerID"],
            (Slot::Subject, Operation::ExchangeList) => &[],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ExchangeList => "exchange list",
            Operation::CoinCorrelate => "coin correlate",
            Operation::NetworkCorrelate => "network correlate",
            Operation::TickerCorrelate => "ticker correlate",
        };
        f.write_str(name)
    }
}

/// Identifying slot of a correlate input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Source exchange
    From,
    /// Target exchanges
    To,
    /// Coin, network or ticker being correlated
    Subject,
}

impl Slot {
    /// Slots in the order they are checked
    pub const ALL: [Slot; 3] = [Slot::From, Slot::To, Slot::Subject];
}

/// Input rejected because a slot has zero or several filled forms
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("input not valid: one of {} should be provided", slot_fields_text(.operation, .slot))]
pub struct InputError {
    pub operation: Operation,
    pub slot: Slot,
}

impl InputError {
    pub fn new(operation: Operation, slot: Slot) -> Self {
        Self { operation, slot }
    }
}

fn slot_fields_text(operation: &Operation, slot: &Slot) -> String {
    match operation.slot_fields(*slot).split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Number of filled candidate forms
pub fn filled_count(candidates: &[bool]) -> usize {
    candidates.iter().filter(|filled| **filled).count()
}

/// True when exactly one candidate form is filled
pub fn exactly_one(candidates: &[bool]) -> bool {
    filled_count(candidates) == 1
}

/// Inputs made of mutually exclusive identifier slots
pub trait Validate {
    /// Operation the input belongs to
    const OPERATION: Operation;

    /// Fill state of each alternative form of `slot`, in wire-field order
    fn candidates(&self, slot: Slot) -> Vec<bool>;

    /// Reject the input at the first empty slot, or failing that at the first
    /// slot with several filled forms
    fn validate(&self) -> Result<(), InputError> {
        let counts = Slot::ALL.map(|slot| (slot, filled_count(&self.candidates(slot))));
        let invalid = counts
            .iter()
            .find(|(_, filled)| *filled == 0)
            .or_else(|| counts.iter().find(|(_, filled)| *filled > 1));
        match invalid {
            Some((slot, _)) => Err(InputError::new(Self::OPERATION, *slot)),
            None => Ok(()),
        }
    }
}
