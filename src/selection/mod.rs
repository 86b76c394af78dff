//! Random selection of participants.
//!
//! - `shuffle`: `ShuffleStrategy` trait with a uniform and a legacy strategy
//! - `selector`: `Selector` and the `SelectionResult` it produces

pub mod shuffle;
pub mod selector;

pub use shuffle::{CoinFlipInsertion, FisherYates, ShuffleStrategy};
pub use selector::{SelectionResult, Selector};
