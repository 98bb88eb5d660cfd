mod repository;

pub use repository::SqliteLedgerRepository;
