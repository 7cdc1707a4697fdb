#![no_std]

mod campaign;
mod events;
mod registry;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

pub use events::*;
pub use storage_types::{
    Campaign, CampaignId, CampaignSummary, Error, Request, RequestIndex, MAX_PAGE_SIZE,
};
use storage_types::DataKey;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the contract with the token that all campaigns are funded in
    pub fn initialize(env: Env, admin: Address, token: Address) {
        if utils::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);

        utils::extend_instance(&env);
    }

    pub fn admin(env: Env) -> Address {
        utils::get_admin(&env)
    }

    pub fn token(env: Env) -> Address {
        utils::get_token(&env)
    }

    // Registry

    /// Create a new campaign managed by `caller`
    pub fn create_campaign(
        env: Env,
        caller: Address,
        minimum_contribution: i128,
    ) -> Result<CampaignId, Error> {
        utils::require_initialized(&env);
        caller.require_auth();

        registry::create_campaign(&env, caller, minimum_contribution)
    }

    /// Every campaign id ever created, oldest first
    pub fn get_deployed_campaigns(env: Env) -> Vec<CampaignId> {
        registry::get_deployed_campaigns(&env)
    }

    pub fn campaign_exists(env: Env, campaign_id: CampaignId) -> bool {
        registry::campaign_exists(&env, campaign_id)
    }

    // Campaign operations

    /// Contribute to a campaign; contributions at or above the minimum make the caller an approver
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
        amount: i128,
    ) -> Result<(), Error> {
        utils::require_initialized(&env);
        caller.require_auth();

        campaign::contribute(&env, campaign_id, caller, amount)
    }

    /// Propose a withdrawal (manager only), returns the new request index
    pub fn create_request(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
        description: String,
        value: i128,
        recipient: Address,
    ) -> Result<RequestIndex, Error> {
        utils::require_initialized(&env);
        caller.require_auth();

        campaign::create_request(&env, campaign_id, caller, description, value, recipient)
    }

    /// Vote yes on a request (approvers only, once per request)
    pub fn approve_request(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
        index: RequestIndex,
    ) -> Result<(), Error> {
        utils::require_initialized(&env);
        caller.require_auth();

        campaign::approve_request(&env, campaign_id, caller, index)
    }

    /// Pay out an approved request (manager only)
    pub fn finalize_request(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
        index: RequestIndex,
    ) -> Result<(), Error> {
        utils::require_initialized(&env);
        caller.require_auth();

        campaign::finalize_request(&env, campaign_id, caller, index)
    }

    // Read accessors

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Campaign {
        utils::get_campaign(&env, campaign_id)
    }

    pub fn manager(env: Env, campaign_id: CampaignId) -> Address {
        utils::get_campaign(&env, campaign_id).manager
    }

    pub fn minimum_contribution(env: Env, campaign_id: CampaignId) -> i128 {
        utils::get_campaign(&env, campaign_id).minimum_contribution
    }

    pub fn balance(env: Env, campaign_id: CampaignId) -> i128 {
        utils::get_campaign(&env, campaign_id).balance
    }

    pub fn approvers_count(env: Env, campaign_id: CampaignId) -> u32 {
        utils::get_campaign(&env, campaign_id).approvers_count
    }

    pub fn is_approver(env: Env, campaign_id: CampaignId, account: Address) -> bool {
        utils::require_campaign(&env, campaign_id);
        utils::is_approver(&env, campaign_id, &account)
    }

    pub fn requests_count(env: Env, campaign_id: CampaignId) -> u32 {
        utils::get_campaign(&env, campaign_id).requests_count
    }

    pub fn get_request(env: Env, campaign_id: CampaignId, index: RequestIndex) -> Request {
        let campaign = utils::get_campaign(&env, campaign_id);
        utils::get_request(&env, &campaign, index)
    }

    /// A page of requests in index order, at most `MAX_PAGE_SIZE` long
    pub fn get_requests(
        env: Env,
        campaign_id: CampaignId,
        start: RequestIndex,
        limit: u32,
    ) -> Vec<Request> {
        campaign::get_requests(&env, campaign_id, start, limit)
    }

    /// Whether `voter` has approved request `index`
    pub fn has_voted(
        env: Env,
        campaign_id: CampaignId,
        index: RequestIndex,
        voter: Address,
    ) -> bool {
        let campaign = utils::get_campaign(&env, campaign_id);
        if index >= campaign.requests_count {
            panic_with_error!(&env, Error::RequestIndexOutOfRange);
        }
        utils::has_voted(&env, campaign_id, index, &voter)
    }

    pub fn get_summary(env: Env, campaign_id: CampaignId) -> CampaignSummary {
        campaign::get_summary(&env, campaign_id)
    }
}
