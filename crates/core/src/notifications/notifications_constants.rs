use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fraction of the initial balance below which a low-balance warning fires.
pub const LOW_BALANCE_RATIO: Decimal = dec!(0.1);

/// Days without a recorded transaction before an investment counts as
/// inactive.
pub const INACTIVITY_DAYS: i64 = 90;

/// Days a notification stays in the active set before a sweep removes it.
pub const RETENTION_DAYS: i64 = 30;
