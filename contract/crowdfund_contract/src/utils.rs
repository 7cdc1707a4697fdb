use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE_THRESHOLD, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT_THRESHOLD, TTL_PERSISTENT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

/// Aborts with `NotInitialized` until `initialize` has run.
pub fn require_initialized(env: &Env) {
    if !is_initialized(env) {
        panic_with_error!(env, Error::NotInitialized);
    }
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn get_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Aborts with `CampaignNotFound` unless `campaign_id` was created.
pub fn require_campaign(env: &Env, campaign_id: CampaignId) {
    if !env
        .storage()
        .persistent()
        .has(&PersistentKey::Campaign(campaign_id))
    {
        panic_with_error!(env, Error::CampaignNotFound);
    }
}

pub fn get_campaign(env: &Env, campaign_id: CampaignId) -> Campaign {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound))
}

pub fn set_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Loads a request, treating any index outside `[0, requests_count)` as a fault.
pub fn get_request(env: &Env, campaign: &Campaign, index: RequestIndex) -> Request {
    if index >= campaign.requests_count {
        panic_with_error!(env, Error::RequestIndexOutOfRange);
    }
    env.storage()
        .persistent()
        .get(&PersistentKey::Request(campaign.id, index))
        .unwrap_or_else(|| panic_with_error!(env, Error::RequestIndexOutOfRange))
}

pub fn set_request(env: &Env, campaign_id: CampaignId, index: RequestIndex, request: &Request) {
    let key = PersistentKey::Request(campaign_id, index);
    env.storage().persistent().set(&key, request);
    extend_persistent(env, &key);
}

pub fn is_approver(env: &Env, campaign_id: CampaignId, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Approver(campaign_id, account.clone()))
}

pub fn has_voted(
    env: &Env,
    campaign_id: CampaignId,
    index: RequestIndex,
    account: &Address,
) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Voter(campaign_id, index, account.clone()))
}

/// Marks `key` as present in a keyed set.
pub fn insert_member(env: &Env, key: PersistentKey) {
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}

/// Amounts cross the contract boundary in the token's smallest unit and may never be negative.
pub fn validate_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Strict majority: exactly half of the approvers is not enough.
pub fn has_majority(approval_count: u32, approvers_count: u32) -> bool {
    2 * approval_count as u64 > approvers_count as u64
}
