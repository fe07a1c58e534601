use std::collections::HashSet;

use crate::error::BalancingError;
use crate::limits::{
    AGENT_ID_CEIL, AGENT_SCORE_CEIL, CUSTOMER_ID_CEIL, CUSTOMER_SCORE_CEIL, MAX_AGENTS,
    MAX_CUSTOMERS,
};
use crate::types::{Agent, AgentId, Customer};

#[inline]
fn in_open_range(v: u32, ceil: u32) -> bool {
    v > 0 && v < ceil
}

fn first_duplicate_score(agents: &[Agent]) -> Option<u32> {
    let mut seen = HashSet::with_capacity(agents.len());
    agents.iter().find_map(|a| (!seen.insert(a.score)).then_some(a.score))
}

/// Check the eight business constraints on the raw input collections.
///
/// The check order is fixed and the first violation wins. Validation always
/// reads the full, unfiltered collections; away-agent filtering only happens
/// after this passes. The abstention ceiling counts the away list as given,
/// without intersecting it against the roster.
pub fn validate(
    agents: &[Agent],
    customers: &[Customer],
    away_ids: &[AgentId],
) -> Result<(), BalancingError> {
    if let Some(score) = first_duplicate_score(agents) {
        return Err(BalancingError::DuplicateAgentScore(score));
    }
    if agents.len() >= MAX_AGENTS {
        return Err(BalancingError::TooManyAgents(agents.len()));
    }
    if customers.len() >= MAX_CUSTOMERS {
        return Err(BalancingError::TooManyCustomers(customers.len()));
    }
    if let Some(a) = agents.iter().find(|a| !in_open_range(a.id, AGENT_ID_CEIL)) {
        return Err(BalancingError::AgentIdOutOfRange(a.id));
    }
    if let Some(c) = customers.iter().find(|c| !in_open_range(c.id, CUSTOMER_ID_CEIL)) {
        return Err(BalancingError::CustomerIdOutOfRange(c.id));
    }
    if let Some(a) = agents.iter().find(|a| !in_open_range(a.score, AGENT_SCORE_CEIL)) {
        return Err(BalancingError::AgentScoreOutOfRange(a.score));
    }
    if let Some(c) = customers
        .iter()
        .find(|c| !in_open_range(c.score, CUSTOMER_SCORE_CEIL))
    {
        return Err(BalancingError::CustomerScoreOutOfRange(c.score));
    }
    if away_ids.len() > agents.len() / 2 {
        return Err(BalancingError::ExcessiveAbstention {
            away: away_ids.len(),
            total: agents.len(),
        });
    }
    Ok(())
}
