use soroban_sdk::{log, token, Address, Env, String, Vec};

use crate::events::{
    self, ContributionEvent, RequestApprovedEvent, RequestCreatedEvent, RequestFinalizedEvent,
};
use crate::storage_types::*;
use crate::utils::*;

/// Accepts `amount` from `contributor` into the campaign pool.
///
/// The first qualifying contribution makes the contributor an approver;
/// later ones only grow the balance.
pub fn contribute(
    env: &Env,
    campaign_id: CampaignId,
    contributor: Address,
    amount: i128,
) -> Result<(), Error> {
    let mut campaign = get_campaign(env, campaign_id);

    validate_amount(amount)?;
    if amount < campaign.minimum_contribution {
        log!(env, "contribution below minimum", campaign_id, amount);
        return Err(Error::ContributionTooLow);
    }

    campaign.balance = campaign
        .balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    let new_approver = !is_approver(env, campaign_id, &contributor);
    if new_approver {
        campaign.approvers_count = campaign
            .approvers_count
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
        insert_member(env, PersistentKey::Approver(campaign_id, contributor.clone()));
    }

    let token_client = token::Client::new(env, &get_token(env));
    token_client.transfer(&contributor, &env.current_contract_address(), &amount);

    set_campaign(env, &campaign);
    extend_instance(env);

    events::emit_contribution(
        env,
        ContributionEvent {
            campaign_id,
            contributor,
            amount,
            new_approver,
        },
    );

    Ok(())
}

/// Appends a withdrawal request. Only the manager may propose one.
///
/// `value` is not checked against the balance until finalization.
pub fn create_request(
    env: &Env,
    campaign_id: CampaignId,
    caller: Address,
    description: String,
    value: i128,
    recipient: Address,
) -> Result<RequestIndex, Error> {
    let mut campaign = get_campaign(env, campaign_id);

    if caller != campaign.manager {
        return Err(Error::NotManager);
    }
    validate_amount(value)?;
    if recipient == env.current_contract_address() {
        return Err(Error::InvalidRecipient);
    }

    let index = campaign.requests_count;
    let request = Request {
        description,
        value,
        recipient: recipient.clone(),
        complete: false,
        approval_count: 0,
    };

    campaign.requests_count = index.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    set_request(env, campaign_id, index, &request);
    set_campaign(env, &campaign);
    extend_instance(env);

    events::emit_request_created(
        env,
        RequestCreatedEvent {
            campaign_id,
            request_index: index,
            value,
            recipient,
        },
    );

    Ok(index)
}

/// Records a yes vote from `approver` on request `index`.
pub fn approve_request(
    env: &Env,
    campaign_id: CampaignId,
    approver: Address,
    index: RequestIndex,
) -> Result<(), Error> {
    let campaign = get_campaign(env, campaign_id);
    let mut request = get_request(env, &campaign, index);

    if !is_approver(env, campaign_id, &approver) {
        return Err(Error::NotApprover);
    }
    if has_voted(env, campaign_id, index, &approver) {
        return Err(Error::AlreadyVoted);
    }

    request.approval_count = request
        .approval_count
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;

    insert_member(env, PersistentKey::Voter(campaign_id, index, approver.clone()));
    set_request(env, campaign_id, index, &request);
    extend_instance(env);

    events::emit_request_approved(
        env,
        RequestApprovedEvent {
            campaign_id,
            request_index: index,
            approver,
            approval_count: request.approval_count,
        },
    );

    Ok(())
}

/// Pays out request `index` to its recipient and closes it for good.
///
/// `complete` and the balance are written before the token transfer. If the
/// transfer traps, the host discards both writes along with it.
pub fn finalize_request(
    env: &Env,
    campaign_id: CampaignId,
    caller: Address,
    index: RequestIndex,
) -> Result<(), Error> {
    let mut campaign = get_campaign(env, campaign_id);
    let mut request = get_request(env, &campaign, index);

    if caller != campaign.manager {
        return Err(Error::NotManager);
    }
    if request.complete {
        return Err(Error::RequestAlreadyComplete);
    }
    if campaign.balance < request.value {
        return Err(Error::InsufficientBalance);
    }
    if !has_majority(request.approval_count, campaign.approvers_count) {
        return Err(Error::InsufficientApprovals);
    }

    campaign.balance -= request.value;
    request.complete = true;
    set_request(env, campaign_id, index, &request);
    set_campaign(env, &campaign);
    extend_instance(env);

    let token_client = token::Client::new(env, &get_token(env));
    token_client.transfer(
        &env.current_contract_address(),
        &request.recipient,
        &request.value,
    );

    log!(env, "request finalized", campaign_id, index, request.value);

    events::emit_request_finalized(
        env,
        RequestFinalizedEvent {
            campaign_id,
            request_index: index,
            value: request.value,
            recipient: request.recipient,
        },
    );

    Ok(())
}

/// Up to `limit` requests starting at index `start`, capped at `MAX_PAGE_SIZE`.
/// A `start` past the end yields an empty page.
pub fn get_requests(
    env: &Env,
    campaign_id: CampaignId,
    start: RequestIndex,
    limit: u32,
) -> Vec<Request> {
    let campaign = get_campaign(env, campaign_id);
    let end = start
        .saturating_add(limit.min(MAX_PAGE_SIZE))
        .min(campaign.requests_count);

    let mut requests = Vec::new(env);
    for index in start..end {
        requests.push_back(get_request(env, &campaign, index));
    }
    requests
}

pub fn get_summary(env: &Env, campaign_id: CampaignId) -> CampaignSummary {
    let campaign = get_campaign(env, campaign_id);
    CampaignSummary {
        balance: campaign.balance,
        minimum_contribution: campaign.minimum_contribution,
        requests_count: campaign.requests_count,
        approvers_count: campaign.approvers_count,
        manager: campaign.manager,
    }
}
