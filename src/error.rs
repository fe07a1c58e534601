use thiserror::Error;

use crate::types::{AgentId, CustomerId};

/// Closed taxonomy of balancing failures. All of them are input-validation
/// failures except `NoActiveAgents`; none is recoverable within a run —
/// callers fix the input and re-run the whole computation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BalancingError {
    #[error("customer success agents with the same score are not allowed (score {0})")]
    DuplicateAgentScore(u32),

    #[error("max customer success agent count of 999 exceeded (got {0})")]
    TooManyAgents(usize),

    #[error("max customer count of 999999 exceeded (got {0})")]
    TooManyCustomers(usize),

    #[error("customer success agent id {0} out of range (1..=999)")]
    AgentIdOutOfRange(AgentId),

    #[error("customer id {0} out of range (1..=999999)")]
    CustomerIdOutOfRange(CustomerId),

    #[error("customer success agent score {0} out of range (1..=9999)")]
    AgentScoreOutOfRange(u32),

    #[error("customer score {0} out of range (1..=99999)")]
    CustomerScoreOutOfRange(u32),

    #[error("customer success abstention is too high ({away} away of {total} agents)")]
    ExcessiveAbstention { away: usize, total: usize },

    #[error("no active customer success agents remain after filtering")]
    NoActiveAgents,
}
