//! Shared voting primitives for GameAward contracts.
//!
//! The weight constants below are inferred from the behaviour of the deployed
//! GameAward contract (a single jury vote scores 30) and should be confirmed
//! against it before any change.
#![no_std]

/// Error codes for the shared helpers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    Overflow = 1,
}

/// Class of a voter, which decides the weight of their ballot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoterClass {
    Public = 0,
    Jury = 1,
}

/// Weight of a single public vote.
pub const BASE_VOTE_WEIGHT: u64 = 1;

/// Factor applied to the base weight for jury members.
pub const JURY_VOTE_MULTIPLIER: u64 = 30;

/// ~30 days at 5s/ledger.
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Weight carried by one ballot of the given class.
pub fn vote_weight(class: VoterClass) -> u64 {
    match class {
        VoterClass::Public => BASE_VOTE_WEIGHT,
        VoterClass::Jury => BASE_VOTE_WEIGHT * JURY_VOTE_MULTIPLIER,
    }
}

/// Add a ballot weight to a running score.
pub fn add_weight(score: u64, weight: u64) -> Result<u64, Error> {
    score.checked_add(weight).ok_or(Error::Overflow)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_jury_weight_is_thirty_times_public() {
        assert_eq!(vote_weight(VoterClass::Public), 1);
        assert_eq!(vote_weight(VoterClass::Jury), 30);
    }

    #[test]
    fn test_add_weight_overflow() {
        assert_eq!(add_weight(30, 1), Ok(31));
        assert_eq!(add_weight(u64::MAX, 1), Err(Error::Overflow));
    }
}
