use std::collections::HashSet;

use crate::types::{Agent, AgentId};

/// Agents not marked away, input order preserved. Pure; inputs untouched.
pub fn active_roster(agents: &[Agent], away_ids: &[AgentId]) -> Vec<Agent> {
    let away: HashSet<AgentId> = away_ids.iter().copied().collect();
    agents.iter().filter(|a| !away.contains(&a.id)).copied().collect()
}

/// Sort the roster ascending by score, so the smallest ceiling claims
/// customers first and each larger agent absorbs the spillover. Validation
/// guarantees score uniqueness, so agent ordering ties never arise.
pub fn rank(mut roster: Vec<Agent>) -> Vec<Agent> {
    roster.sort_by_key(|a| a.score);
    roster
}
