use anchor_lang::prelude::*;

// Best resolved proposal so far. There is one Winner per deployment and
// it is never reset.
#[account]
#[derive(InitSpace)]
pub struct Winner {
    pub winning_proposal_id: u64, // 0 until a proposal with votes is resolved
    pub winning_votes: u64,
    pub declared_at: i64,
    pub bump: u8,
}

impl Winner {
    // Takes the candidate only on a strict improvement, so ties keep the
    // earlier winner. Returns whether the record changed.
    pub fn consider(&mut self, proposal_id: u64, votes: u64, now: i64) -> bool {
        if votes <= self.winning_votes {
            return false;
        }
        self.winning_proposal_id = proposal_id;
        self.winning_votes = votes;
        self.declared_at = now;
        true
    }
}
