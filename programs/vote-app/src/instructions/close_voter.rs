use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Closes the caller's voter record and refunds its rent.
// Vote records are separate accounts and stay behind, so re-registering
// does not allow a second vote on the same proposal.
#[derive(Accounts)]
pub struct CloseVoter<'info> {
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTER, voter.key().as_ref()],
        bump = voter_account.bump,
        constraint = voter_account.voter_id == voter.key() @ VoteError::Unauthorized,
        close = destination
    )]
    pub voter_account: Account<'info, Voter>,

    #[account(mut)]
    pub destination: SystemAccount<'info>,
}

impl<'info> CloseVoter<'info> {
    pub fn close_voter(&mut self) -> Result<()> {
        msg!(
            "Closing voter {} after {} votes",
            self.voter.key(),
            self.voter_account.votes_cast
        );

        emit!(VoterAccountClosed {
            voter: self.voter.key(),
            rent_recovered_to: self.destination.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        // Account closed by Anchor (close = destination)
        Ok(())
    }
}
