use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Close Proposal Instruction
//
// The creator reclaims the proposal's rent once voting has ended.
// The escrowed stake is not moved: it stays in the treasury token account.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CloseProposal<'info> {
    pub authority: Signer<'info>,

    /// CHECK: seeds pin the address; Proposal::load checks owner and discriminator
    #[account(
        mut,
        seeds = [PROPOSAL, &proposal_id.to_le_bytes()],
        bump
    )]
    pub proposal: UncheckedAccount<'info>,

    // Receives the reclaimed rent
    #[account(mut)]
    pub destination: SystemAccount<'info>,
}

impl<'info> CloseProposal<'info> {
    pub fn close_proposal(&mut self, proposal_id: u64) -> Result<()> {
        let proposal = Proposal::load(&self.proposal)?;
        let now = Clock::get()?.unix_timestamp;

        require_keys_eq!(
            proposal.authority,
            self.authority.key(),
            VoteError::Unauthorized
        );
        require!(proposal.has_ended(now), VoteError::VotingStillActive);

        msg!(
            "Closing proposal {} ({} votes), rent to {}",
            proposal_id,
            proposal.number_of_votes,
            self.destination.key()
        );

        Proposal::close(&self.proposal, &self.destination)?;

        emit!(ProposalClosed {
            proposal_id,
            authority: self.authority.key(),
            rent_recovered_to: self.destination.key(),
            timestamp: now,
        });

        Ok(())
    }
}
