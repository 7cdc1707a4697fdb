use soroban_sdk::{Address, Env, Vec};

use crate::events::{self, CampaignCreatedEvent};
use crate::storage_types::*;
use crate::utils::*;

/// Creates a campaign managed by `manager` under the next sequential id.
pub fn create_campaign(
    env: &Env,
    manager: Address,
    minimum_contribution: i128,
) -> Result<CampaignId, Error> {
    validate_amount(minimum_contribution)?;

    let campaign_id = next_campaign_id(env);
    let next_id = campaign_id
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;

    let campaign = Campaign {
        id: campaign_id,
        manager: manager.clone(),
        minimum_contribution,
        balance: 0,
        approvers_count: 0,
        requests_count: 0,
    };
    set_campaign(env, &campaign);

    env.storage().instance().set(&DataKey::NextCampaignId, &next_id);
    extend_instance(env);

    events::emit_campaign_created(
        env,
        CampaignCreatedEvent {
            campaign_id,
            manager,
            minimum_contribution,
        },
    );

    Ok(campaign_id)
}

fn next_campaign_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(1)
}

/// Ids are handed out in sequence from 1 and never removed, so the deployed
/// list is rebuilt from the counter rather than stored.
pub fn get_deployed_campaigns(env: &Env) -> Vec<CampaignId> {
    let mut deployed = Vec::new(env);
    for campaign_id in 1..next_campaign_id(env) {
        deployed.push_back(campaign_id);
    }
    deployed
}

pub fn campaign_exists(env: &Env, campaign_id: CampaignId) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Campaign(campaign_id))
}
