use soroban_sdk::Env;

use crate::storage_types::{CampaignConfig, CampaignPhase};

/// Get current ledger timestamp
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Half-open interval `[opens_at, closes_at)` in seconds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    pub opens_at: u64,
    pub closes_at: u64,
}

impl Window {
    pub fn contains(&self, at: u64) -> bool {
        self.opens_at <= at && at < self.closes_at
    }
}

impl CampaignConfig {
    pub fn funding_window(&self) -> Window {
        Window {
            opens_at: self.start_at,
            closes_at: self.funding_end_at,
        }
    }

    pub fn execution_window(&self) -> Window {
        Window {
            opens_at: self.funding_end_at,
            closes_at: self.end_at,
        }
    }

    pub fn is_within_funding(&self, at: u64) -> bool {
        self.funding_window().contains(at)
    }

    pub fn is_within_execution(&self, at: u64) -> bool {
        self.execution_window().contains(at)
    }

    pub fn is_ordered(&self) -> bool {
        self.start_at <= self.funding_end_at && self.funding_end_at <= self.end_at
    }

    pub fn phase(&self, at: u64) -> CampaignPhase {
        if at < self.start_at {
            CampaignPhase::PreFunding
        } else if self.is_within_funding(at) {
            CampaignPhase::Funding
        } else if self.is_within_execution(at) {
            CampaignPhase::Execution
        } else {
            CampaignPhase::Ended
        }
    }
}
