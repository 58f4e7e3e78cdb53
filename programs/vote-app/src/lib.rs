// Vote App Program
//
// Participants buy a utility token from the treasury, stake it to register
// proposals and to vote on them, and once a proposal's deadline passes
// anyone can resolve it against the standing winner.
//
// Instructions:
// - initialize_treasury / buy_tokens / withdraw_sol: token sale
// - register_voter / close_voter: voter identities
// - initialize_proposal_counter / register_proposal: proposal registry
// - proposal_to_vote: one staked ballot per voter per proposal
// - pick_winner: deadline-gated resolution
// - close_proposal: rent reclamation by the creator

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("35rA3njkouavTGNNSNrS16Pyppz4AYQaueseqwmsoqJv");

#[program]
pub mod vote_app {
    use super::*;

    // Create the treasury config, token mint, stake custody and SOL vault.
    // The signer becomes the treasury authority.
    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        sol_price: u64,
        token_per_purchase: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize_treasury(sol_price, token_per_purchase, &ctx.bumps)
    }

    // Pay sol_price lamports into the vault, receive token_per_purchase tokens
    pub fn buy_tokens(ctx: Context<BuyTokens>) -> Result<()> {
        ctx.accounts.buy_tokens()
    }

    // Treasury authority only
    pub fn withdraw_sol(ctx: Context<WithdrawSol>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_sol(amount)
    }

    pub fn register_voter(ctx: Context<RegisterVoter>) -> Result<()> {
        ctx.accounts.register_voter(&ctx.bumps)
    }

    pub fn close_voter(ctx: Context<CloseVoter>) -> Result<()> {
        ctx.accounts.close_voter()
    }

    // Treasury authority only; must run before the first proposal
    pub fn initialize_proposal_counter(ctx: Context<InitializeProposalCounter>) -> Result<()> {
        ctx.accounts.initialize_proposal_counter(&ctx.bumps)
    }

    // Stake tokens to register the next proposal
    pub fn register_proposal(
        ctx: Context<RegisterProposal>,
        proposal_info: String,
        deadline: i64,
        stake_amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .register_proposal(proposal_info, deadline, stake_amount, &ctx.bumps)
    }

    // Stake tokens to cast one vote before the proposal's deadline
    pub fn proposal_to_vote(
        ctx: Context<ProposalToVote>,
        proposal_id: u64,
        stake_amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .proposal_to_vote(proposal_id, stake_amount, &ctx.bumps)
    }

    // Compare an ended proposal against the recorded winner
    pub fn pick_winner(ctx: Context<PickWinner>, proposal_id: u64) -> Result<()> {
        ctx.accounts.pick_winner(proposal_id, &ctx.bumps)
    }

    // Proposal authority only, after the deadline
    pub fn close_proposal(ctx: Context<CloseProposal>, proposal_id: u64) -> Result<()> {
        ctx.accounts.close_proposal(proposal_id)
    }
}
