//! Shared test doubles.

mod clock;

pub use clock::{MutableClock, fixture_timestamp};
