use anchor_lang::prelude::*;

// Treasury sale configuration, one per deployment
#[account]
#[derive(InitSpace)]
pub struct TreasuryConfig {
    pub authority: Pubkey,
    pub x_mint: Pubkey,                 // utility token sold by the treasury
    pub treasury_token_account: Pubkey, // custody for proposal and vote stakes
    pub sol_price: u64,                 // lamports charged per purchase
    pub token_per_purchase: u64,        // base units minted per purchase
    pub bump: u8,
    pub sol_vault_bump: u8,
    pub mint_authority_bump: u8,
    pub x_mint_bump: u8,
}

impl TreasuryConfig {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}
