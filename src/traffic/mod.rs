//! Station traffic computation.
//!
//! This module reduces a trip set into per-station arrival and departure
//! counts, selects the trips relevant to a time-of-day window, and combines
//! the two into the snapshot the map renderer draws from.

pub mod aggregate;
pub mod filter;
pub mod recompute;
pub mod scale;
