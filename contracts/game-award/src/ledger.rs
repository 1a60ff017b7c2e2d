//! Vote ledger: one immutable ballot per (session, round, voter) and the
//! per-round tallies derived from them. Nothing else writes scores.

use gameaward_shared::{add_weight, vote_weight, VoterClass};
use soroban_sdk::{Address, Env, Vec};

use crate::storage::{set_persistent, DataKey};
use crate::{registry, Error, GameScore, Vote};

pub(crate) fn weight_of(env: &Env, voter: &Address) -> u64 {
    let class = if registry::is_jury_member(env, voter) {
        VoterClass::Jury
    } else {
        VoterClass::Public
    };
    vote_weight(class)
}

pub(crate) fn has_voted(env: &Env, session_id: u64, round: u32, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(session_id, round, voter.clone()))
}

pub(crate) fn get_vote(
    env: &Env,
    session_id: u64,
    round: u32,
    voter: &Address,
) -> Result<Vote, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(session_id, round, voter.clone()))
        .ok_or(Error::VoteNotFound)
}

/// Scores of the games voted for in a round, in first-vote order.
pub(crate) fn tally(env: &Env, session_id: u64, round: u32) -> Vec<GameScore> {
    env.storage()
        .persistent()
        .get(&DataKey::RoundTally(session_id, round))
        .unwrap_or(Vec::new(env))
}

pub(crate) fn score_in(tally: &Vec<GameScore>, game_id: u32) -> u64 {
    tally
        .iter()
        .find(|entry| entry.game_id == game_id)
        .map(|entry| entry.score)
        .unwrap_or(0)
}

pub(crate) fn score_of(env: &Env, session_id: u64, round: u32, game_id: u32) -> u64 {
    score_in(&tally(env, session_id, round), game_id)
}

pub(crate) fn voted_game_ids(env: &Env, session_id: u64, round: u32) -> Vec<u32> {
    let mut ids = Vec::new(env);
    for entry in tally(env, session_id, round).iter() {
        ids.push_back(entry.game_id);
    }
    ids
}

pub(crate) fn record(
    env: &Env,
    session_id: u64,
    round: u32,
    voter: &Address,
    game_id: u32,
) -> Result<Vote, Error> {
    if has_voted(env, session_id, round, voter) {
        return Err(Error::AlreadyVoted);
    }

    let weight = weight_of(env, voter);

    let mut scores = tally(env, session_id, round);
    let mut found = false;
    for i in 0..scores.len() {
        let mut entry = scores.get_unchecked(i);
        if entry.game_id == game_id {
            entry.score = add_weight(entry.score, weight)?;
            scores.set(i, entry);
            found = true;
            break;
        }
    }
    if !found {
        scores.push_back(GameScore {
            game_id,
            score: weight,
        });
    }

    let vote = Vote {
        session_id,
        round,
        voter: voter.clone(),
        game_id,
        weight,
    };

    set_persistent(env, DataKey::RoundTally(session_id, round), &scores);
    set_persistent(env, DataKey::Vote(session_id, round, voter.clone()), &vote);

    Ok(vote)
}
