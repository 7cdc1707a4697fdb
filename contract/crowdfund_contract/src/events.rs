use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{CampaignId, RequestIndex};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub manager: Address,
    pub minimum_contribution: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub new_approver: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RequestCreatedEvent {
    pub campaign_id: CampaignId,
    pub request_index: RequestIndex,
    pub value: i128,
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RequestApprovedEvent {
    pub campaign_id: CampaignId,
    pub request_index: RequestIndex,
    pub approver: Address,
    pub approval_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RequestFinalizedEvent {
    pub campaign_id: CampaignId,
    pub request_index: RequestIndex,
    pub value: i128,
    pub recipient: Address,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_contribution(env: &Env, event: ContributionEvent) {
    env.events().publish(
        (Symbol::new(env, "contribution"),),
        event,
    );
}

pub fn emit_request_created(env: &Env, event: RequestCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "request_created"),),
        event,
    );
}

pub fn emit_request_approved(env: &Env, event: RequestApprovedEvent) {
    env.events().publish(
        (Symbol::new(env, "request_approved"),),
        event,
    );
}

pub fn emit_request_finalized(env: &Env, event: RequestFinalizedEvent) {
    env.events().publish(
        (Symbol::new(env, "request_finalized"),),
        event,
    );
}
