use anchor_lang::prelude::*;

#[event]
pub struct TreasuryInitialized {
    pub authority: Pubkey,
    pub x_mint: Pubkey,
    pub sol_price: u64,
    pub token_per_purchase: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub sol_paid: u64,
    pub tokens_minted: u64,
    pub timestamp: i64,
}

#[event]
pub struct SolWithdrawn {
    pub authority: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct VoterRegistered {
    pub voter: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VoterAccountClosed {
    pub voter: Pubkey,
    pub rent_recovered_to: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub creator: Pubkey,
    pub proposal_info: String,
    pub deadline: i64,
    pub stake_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub proposal_id: u64,
    pub voter: Pubkey,
    pub stake_amount: u64,
    pub number_of_votes: u64,
    pub timestamp: i64,
}

#[event]
pub struct WinnerDeclared {
    pub winning_proposal_id: u64,
    pub winning_votes: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProposalClosed {
    pub proposal_id: u64,
    pub authority: Pubkey,
    pub rent_recovered_to: Pubkey,
    pub timestamp: i64,
}
