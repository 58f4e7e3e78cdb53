use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{mint_to, Mint, MintTo, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, state::*};

// Sells one purchase unit: sol_price lamports in, token_per_purchase out.
// Both legs run in this instruction, so either both land or neither does.
#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.bump
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [SOL_VAULT],
        bump = treasury_config.sol_vault_bump
    )]
    pub sol_vault: SystemAccount<'info>,

    /// CHECK: PDA signer for minting
    #[account(
        seeds = [MINT_AUTHORITY],
        bump = treasury_config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = treasury_config.x_mint @ VoteError::TokenMintMismatch
    )]
    pub x_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = x_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> BuyTokens<'info> {
    pub fn buy_tokens(&mut self) -> Result<()> {
        let sol_price = self.treasury_config.sol_price;
        let token_per_purchase = self.treasury_config.token_per_purchase;

        // Payment leg
        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.buyer.to_account_info(),
                    to: self.sol_vault.to_account_info(),
                },
            ),
            sol_price,
        )?;

        // Issuance leg
        let signer_seeds: &[&[&[u8]]] = &[&[
            MINT_AUTHORITY,
            &[self.treasury_config.mint_authority_bump],
        ]];

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.x_mint.to_account_info(),
                    to: self.buyer_token_account.to_account_info(),
                    authority: self.mint_authority.to_account_info(),
                },
                signer_seeds,
            ),
            token_per_purchase,
        )?;

        msg!(
            "{} bought {} tokens for {} lamports",
            self.buyer.key(),
            token_per_purchase,
            sol_price
        );

        emit!(TokensPurchased {
            buyer: self.buyer.key(),
            sol_paid: sol_price,
            tokens_minted: token_per_purchase,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
