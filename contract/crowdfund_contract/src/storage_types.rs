use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Approver(CampaignId, Address),
    Request(CampaignId, RequestIndex),
    Voter(CampaignId, RequestIndex, Address),
}

pub type CampaignId = u64;
pub type RequestIndex = u32;

/// A pool of contributed funds controlled by a single manager.
///
/// Approver membership and request ballots are kept under their own keys so
/// lookups stay O(1) no matter how many contributors a campaign has.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub manager: Address,
    pub minimum_contribution: i128,
    pub balance: i128,
    pub approvers_count: u32,
    pub requests_count: u32,
}

/// A proposed withdrawal. Once `complete` is set the request never changes again.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Request {
    pub description: String,
    pub value: i128,
    pub recipient: Address,
    pub complete: bool,
    pub approval_count: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignSummary {
    pub balance: i128,
    pub minimum_contribution: i128,
    pub requests_count: u32,
    pub approvers_count: u32,
    pub manager: Address,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // setup
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // authorization
    NotManager = 10,
    NotApprover = 11,

    // validation
    InvalidAmount = 20,
    ContributionTooLow = 21,
    AlreadyVoted = 22,
    RequestAlreadyComplete = 23,
    InsufficientBalance = 24,
    InsufficientApprovals = 25,
    ArithmeticOverflow = 26,
    InvalidRecipient = 27,

    // faults: caller misused an identifier, the invocation aborts
    CampaignNotFound = 100,
    RequestIndexOutOfRange = 101,
}

// Constants
pub const LEDGERS_PER_DAY: u32 = 17280;
pub const TTL_INSTANCE: u32 = LEDGERS_PER_DAY * 30; // 30 days
pub const TTL_INSTANCE_THRESHOLD: u32 = TTL_INSTANCE - LEDGERS_PER_DAY;
pub const TTL_PERSISTENT: u32 = LEDGERS_PER_DAY * 90; // 90 days
pub const TTL_PERSISTENT_THRESHOLD: u32 = TTL_PERSISTENT - LEDGERS_PER_DAY;
pub const MAX_PAGE_SIZE: u32 = 50;
