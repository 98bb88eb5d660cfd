/// Persistence slot holding the serialized investment collection.
pub const INVESTMENTS_SLOT: &str = "investments";

/// Persistence slot holding the serialized transaction collection.
pub const TRANSACTIONS_SLOT: &str = "transactions";
