//! System-wide constants for the Curio marketplace ledger.

/// Platform share of every sale, in whole percent.
pub const PLATFORM_FEE_PERCENT: u32 = 2;

/// Denominator for the percentage split.
pub const PERCENT_DENOMINATOR: u32 = 100;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Curio";
