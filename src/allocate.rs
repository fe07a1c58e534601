use tracing::debug;

use crate::types::{Agent, Customer, Portfolio};

/// Greedily partition the customer pool across agents already ranked
/// ascending by score: each agent takes every still-unassigned customer
/// whose score does not exceed its own.
///
/// The pool is sorted by score once and consumed by an advancing cursor, so
/// the whole phase touches each customer a constant number of times even at
/// the million-customer ceiling. Membership only depends on the score
/// ceiling, so the sort never changes which agent a customer lands on.
///
/// Customers scoring above every active ceiling stay unassigned; that is
/// business policy, not an error. An empty roster yields no portfolios.
pub fn allocate(ranked: &[Agent], customers: &[Customer]) -> Vec<Portfolio> {
    let mut pool = customers.to_vec();
    pool.sort_by_key(|c| c.score);

    let mut portfolios = Vec::with_capacity(ranked.len());
    let mut start = 0usize;
    for agent in ranked {
        let taken = pool[start..].partition_point(|c| c.score <= agent.score);
        let end = start + taken;
        debug!(
            agent_id = agent.id,
            agent_score = agent.score,
            taken,
            remaining = pool.len() - end,
            "portfolio assigned"
        );
        portfolios.push(Portfolio {
            agent: *agent,
            customers: pool[start..end].to_vec(),
        });
        start = end;
    }
    if start < pool.len() {
        debug!(dropped = pool.len() - start, "customers above every active ceiling");
    }
    portfolios
}
