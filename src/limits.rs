//! Fixed business bounds. All ranges are strict on both ends: an id or score
//! must be greater than zero and strictly below its ceiling.

/// Agent count must stay below this.
pub const MAX_AGENTS: usize = 1000;

/// Customer count must stay below this.
pub const MAX_CUSTOMERS: usize = 1_000_000;

/// Agent ids live in (0, AGENT_ID_CEIL).
pub const AGENT_ID_CEIL: u32 = 1000;

/// Customer ids live in (0, CUSTOMER_ID_CEIL).
pub const CUSTOMER_ID_CEIL: u32 = 1_000_000;

/// Agent scores live in (0, AGENT_SCORE_CEIL).
pub const AGENT_SCORE_CEIL: u32 = 10_000;

/// Customer scores live in (0, CUSTOMER_SCORE_CEIL). Note this ceiling is
/// higher than the agent score ceiling, so a valid customer can still be
/// unassignable; allocation drops such customers silently.
pub const CUSTOMER_SCORE_CEIL: u32 = 100_000;
