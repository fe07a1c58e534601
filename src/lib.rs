//! cs_balancer_core
//!
//! Pure customer-success balancing core. One `execute` call runs the whole
//! sequential pipeline over three caller-supplied collections:
//! - validate the raw agents, customers, and away ids against fixed bounds
//! - drop away agents, rank the rest ascending by score
//! - greedily partition the customer pool across the ranked agents
//! - report the unique largest-portfolio holder, or `NO_WINNER` on a tie
//!
//! Non-goals:
//! - no IO
//! - no async
//! - no load fairness (the partition is greedy by score ceiling only)
//! - no cross-call state; every run rebuilds from its inputs

pub mod allocate;
pub mod decide;
pub mod error;
pub mod limits;
pub mod roster;
pub mod types;
pub mod validate;

pub use allocate::allocate;
pub use decide::{decide, standings};
pub use error::BalancingError;
pub use roster::{active_roster, rank};
pub use types::{Agent, AgentId, Customer, CustomerId, Portfolio, PortfolioCount, NO_WINNER};
pub use validate::validate;

use tracing::debug;

/// Run the full pipeline: validate → filter → rank → allocate → decide.
///
/// Returns the winning agent id, `NO_WINNER` (0) when the largest portfolio
/// size is not unique, or a [`BalancingError`] naming the violated
/// constraint. Inputs are read-only; the core works on private copies.
pub fn execute(
    agents: &[Agent],
    customers: &[Customer],
    away_ids: &[AgentId],
) -> Result<AgentId, BalancingError> {
    validate::validate(agents, customers, away_ids)?;
    let ranked = roster::rank(roster::active_roster(agents, away_ids));
    debug!(active = ranked.len(), away = away_ids.len(), "roster filtered");
    let portfolios = allocate::allocate(&ranked, customers);
    let standings = decide::standings(&portfolios);
    decide::decide(&standings)
}
