use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Voter {
    pub voter_id: Pubkey,
    pub votes_cast: u64,
    pub registered_at: i64,
    pub bump: u8,
}

impl Voter {
    pub fn is_registered(&self) -> bool {
        self.voter_id != Pubkey::default()
    }
}

// One record per (voter, proposal) pairing, seeded by both.
// A populated record means the pairing is consumed.
#[account]
#[derive(InitSpace)]
pub struct VoteRecord {
    pub voter: Pubkey,
    pub proposal_id: u64,
    pub stake_amount: u64,
    pub voted_at: i64,
    pub bump: u8,
}

impl VoteRecord {
    pub fn is_consumed(&self) -> bool {
        self.voter != Pubkey::default()
    }
}
