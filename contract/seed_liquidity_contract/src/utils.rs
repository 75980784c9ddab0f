use soroban_sdk::Env;

use crate::storage_types::CampaignPhase;

/// Check if the deadline has been reached
pub fn has_expired(env: &Env, deadline: u64) -> bool {
    env.ledger().timestamp() >= deadline
}

/// Earliest timestamp at which claims are accepted
pub fn unlock_time(provided_at: u64, unlock_delay: u64) -> u64 {
    provided_at.saturating_add(unlock_delay)
}

/// Check if claims are still locked after seeding
pub fn is_claim_locked(env: &Env, provided_at: u64, unlock_delay: u64) -> bool {
    env.ledger().timestamp() < unlock_time(provided_at, unlock_delay)
}

/// Derive the campaign phase from stored state and the ledger clock
pub fn phase(env: &Env, provided: bool, deadline: u64) -> CampaignPhase {
    if provided {
        CampaignPhase::Provided
    } else if has_expired(env, deadline) {
        CampaignPhase::Expired
    } else {
        CampaignPhase::Open
    }
}
