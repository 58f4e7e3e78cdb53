use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_lang::{AccountDeserialize, AccountSerialize};

use crate::constants::MAX_PROPOSAL_INFO_LEN;
use crate::errors::VoteError;

#[account]
#[derive(InitSpace)]
pub struct ProposalCounter {
    pub authority: Pubkey,
    pub count: u64, // proposals ever created
    pub bump: u8,
}

impl ProposalCounter {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    // Id the next registered proposal will receive. Ids start at 1.
    pub fn next_id(&self) -> u64 {
        self.count.saturating_add(1)
    }

    pub fn increment(&mut self) -> Result<u64> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(VoteError::ProposalCounterOverflow)?;
        Ok(self.count)
    }
}

#[account]
#[derive(InitSpace)]
pub struct Proposal {
    pub proposal_id: u64,
    pub authority: Pubkey, // creator, the only one allowed to close it
    #[max_len(MAX_PROPOSAL_INFO_LEN)]
    pub proposal_info: String,
    pub deadline: i64,
    pub stake_amount: u64,
    pub number_of_votes: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl Proposal {
    // Voting is open strictly before the deadline
    pub fn is_voting_open(&self, now: i64) -> bool {
        now < self.deadline
    }

    // Resolution and closure become possible at the deadline
    pub fn has_ended(&self, now: i64) -> bool {
        !self.is_voting_open(now)
    }

    pub fn record_vote(&mut self) -> Result<()> {
        self.number_of_votes = self
            .number_of_votes
            .checked_add(1)
            .ok_or(VoteError::ProposalVotesOverflow)?;
        Ok(())
    }

    // Reads the proposal behind a seeds-checked address.
    // An id that was never registered, or whose proposal was closed,
    // leaves that address empty.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require!(
            !info.data_is_empty() && info.owner == &crate::ID,
            VoteError::ProposalNotFound
        );
        let data = info.try_borrow_data()?;
        Proposal::try_deserialize(&mut &data[..])
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    // Moves the rent to `destination` and returns the address to the
    // system program with zeroed data.
    pub fn close(info: &AccountInfo, destination: &AccountInfo) -> Result<()> {
        let recovered = info.lamports();
        let destination_balance = destination
            .lamports()
            .checked_add(recovered)
            .ok_or(VoteError::MathOverflow)?;

        **destination.try_borrow_mut_lamports()? = destination_balance;
        **info.try_borrow_mut_lamports()? = 0;

        info.try_borrow_mut_data()?.fill(0);
        info.assign(&system_program::ID);
        Ok(())
    }
}

pub fn validate_proposal_info(info: &str) -> Result<()> {
    require!(
        !info.is_empty() && info.len() <= MAX_PROPOSAL_INFO_LEN,
        VoteError::InvalidProposalInfo
    );
    Ok(())
}
