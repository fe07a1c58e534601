use tracing::debug;

use crate::error::BalancingError;
use crate::types::{AgentId, Portfolio, PortfolioCount, NO_WINNER};

/// One portfolio size per active agent, in allocation order.
pub fn standings(portfolios: &[Portfolio]) -> Vec<PortfolioCount> {
    portfolios
        .iter()
        .map(|p| PortfolioCount {
            agent_id: p.agent.id,
            count: p.customers.len(),
        })
        .collect()
}

/// The unique holder of the largest portfolio.
///
/// Returns `NO_WINNER` (0) when two or more agents tie at the maximum count,
/// including the degenerate all-empty case with more than one agent. A lone
/// agent is a unique maximum even with an empty portfolio. An empty roster
/// fails with `NoActiveAgents` rather than taking a max over nothing.
pub fn decide(standings: &[PortfolioCount]) -> Result<AgentId, BalancingError> {
    let top = standings
        .iter()
        .max_by_key(|s| s.count)
        .ok_or(BalancingError::NoActiveAgents)?;
    let holders = standings.iter().filter(|s| s.count == top.count).count();
    debug!(max_count = top.count, holders, "standings decided");
    if holders > 1 {
        Ok(NO_WINNER)
    } else {
        Ok(top.agent_id)
    }
}
