use serde::{Deserialize, Serialize};

pub type AgentId = u32;
pub type CustomerId = u32;

/// Sentinel returned when no single agent uniquely holds the largest
/// portfolio. Never collides with a real id: agent ids live in the open
/// interval (0, 1000).
pub const NO_WINNER: AgentId = 0;

/// A customer-success agent, able to handle customers up to its own score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub score: u32,
}

impl Agent {
    pub fn new(id: AgentId, score: u32) -> Self {
        Self { id, score }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub score: u32,
}

impl Customer {
    pub fn new(id: CustomerId, score: u32) -> Self {
        Self { id, score }
    }
}

/// The customers one agent ends up holding for a single balancing run.
/// Built once, counted once, then discarded.
#[derive(Clone, Debug)]
pub struct Portfolio {
    pub agent: Agent,
    pub customers: Vec<Customer>,
}

/// Per-agent portfolio size, consumed only by the tie-break step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioCount {
    pub agent_id: AgentId,
    pub count: usize,
}
