use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

// Register Proposal Instruction
//
// Creates proposal #(count + 1), escrows the creator's stake in the
// treasury token account and bumps the counter, all in one instruction.
// Two racing registrations derive the same proposal address; the runtime
// serializes them and the loser fails its seeds check.

#[derive(Accounts)]
pub struct RegisterProposal<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.bump
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [PROPOSAL_COUNTER],
        bump = proposal_counter.bump
    )]
    pub proposal_counter: Account<'info, ProposalCounter>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [PROPOSAL, &proposal_counter.next_id().to_le_bytes()],
        bump
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    #[account(
        address = treasury_config.x_mint @ VoteError::TokenMintMismatch
    )]
    pub x_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = x_mint,
        associated_token::authority = creator
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = treasury_config.treasury_token_account @ VoteError::InvalidTreasuryAccount
    )]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterProposal<'info> {
    pub fn register_proposal(
        &mut self,
        proposal_info: String,
        deadline: i64,
        stake_amount: u64,
        bumps: &RegisterProposalBumps,
    ) -> Result<()> {
        validate_proposal_info(&proposal_info)?;

        let now = Clock::get()?.unix_timestamp;
        require!(deadline > now, VoteError::DeadlineInPast);

        require!(stake_amount > 0, VoteError::InsufficientStake);
        require!(
            self.creator_token_account.amount >= stake_amount,
            VoteError::InsufficientStake
        );

        // Escrow the stake
        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.creator_token_account.to_account_info(),
                    to: self.treasury_token_account.to_account_info(),
                    authority: self.creator.to_account_info(),
                },
            ),
            stake_amount,
        )?;

        let proposal_id = self.proposal_counter.increment()?;

        self.proposal.set_inner(Proposal {
            proposal_id,
            authority: self.creator.key(),
            proposal_info: proposal_info.clone(),
            deadline,
            stake_amount,
            number_of_votes: 0,
            created_at: now,
            bump: bumps.proposal,
        });

        msg!(
            "Proposal {} registered by {} with deadline {}",
            proposal_id,
            self.creator.key(),
            deadline
        );

        emit!(ProposalCreated {
            proposal_id,
            creator: self.creator.key(),
            proposal_info,
            deadline,
            stake_amount,
            timestamp: now,
        });

        Ok(())
    }
}
