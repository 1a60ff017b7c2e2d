//! Round engine: voting within the open round, leading-game resolution and
//! elimination between rounds.

use soroban_sdk::{Address, Env, Vec};

use crate::events::{RoundPassed, SessionEnded, VoteCast};
use crate::storage::{get_max_rounds, require_admin, set_persistent, DataKey};
use crate::{ledger, registry, session, Error, GameScore, LeadingGame, SessionState, Vote};

pub(crate) fn vote(
    env: &Env,
    voter: &Address,
    session_id: u64,
    game_id: u32,
) -> Result<Vote, Error> {
    voter.require_auth();

    let session = session::load(env, session_id)?;
    if session.state != SessionState::Active {
        return Err(Error::InvalidState);
    }
    if session.contending_game_ids.first_index_of(game_id).is_none() {
        return Err(Error::NotContending);
    }

    let vote = ledger::record(env, session_id, session.current_round, voter, game_id)?;

    VoteCast {
        session_id,
        voter: voter.clone(),
        round: vote.round,
        game_id,
        weight: vote.weight,
    }
    .publish(env);

    Ok(vote)
}

/// Game ids voted for in the session's open round.
pub(crate) fn round_game_ids(env: &Env, session_id: u64) -> Result<Vec<u32>, Error> {
    let session = session::load(env, session_id)?;
    if session.state == SessionState::Created {
        return Ok(Vec::new(env));
    }
    Ok(ledger::voted_game_ids(env, session_id, session.current_round))
}

/// Contenders of `round` sharing the top score, in contending-set order.
/// With no votes every contender ties at zero.
fn leading_scores(env: &Env, session_id: u64, round: u32) -> Result<Vec<GameScore>, Error> {
    let session = session::load(env, session_id)?;
    if session.state == SessionState::Created || round > session.current_round {
        return Err(Error::RoundNotFound);
    }

    let contenders: Vec<u32> = env
        .storage()
        .persistent()
        .get(&DataKey::RoundContenders(session_id, round))
        .ok_or(Error::RoundNotFound)?;
    let tally = ledger::tally(env, session_id, round);

    let mut best = 0u64;
    let mut leaders = Vec::new(env);
    for game_id in contenders.iter() {
        let score = ledger::score_in(&tally, game_id);
        if score > best {
            best = score;
            leaders = Vec::new(env);
        }
        if score == best {
            leaders.push_back(GameScore { game_id, score });
        }
    }

    Ok(leaders)
}

pub(crate) fn leading_games(
    env: &Env,
    session_id: u64,
    round: u32,
) -> Result<Vec<LeadingGame>, Error> {
    let mut games = Vec::new(env);
    for entry in leading_scores(env, session_id, round)?.iter() {
        games.push_back(LeadingGame {
            game: registry::get_game(env, entry.game_id)?,
            score: entry.score,
        });
    }
    Ok(games)
}

fn leading_ids(env: &Env, session_id: u64, round: u32) -> Result<Vec<u32>, Error> {
    let mut ids = Vec::new(env);
    for entry in leading_scores(env, session_id, round)?.iter() {
        ids.push_back(entry.game_id);
    }
    Ok(ids)
}

/// Closes the open round and keeps only its leading games. Every tied game
/// stays in contention. The session ends once the configured number of rounds
/// has been played; a lone survivor still gets its round.
pub(crate) fn pass_to_next_round(env: &Env, caller: &Address, session_id: u64) -> Result<(), Error> {
    require_admin(env, caller)?;

    let mut session = session::load(env, session_id)?;
    if session.state != SessionState::Active {
        return Err(Error::InvalidState);
    }

    let closed_round = session.current_round;
    let leaders = leading_ids(env, session_id, closed_round)?;
    let next_round = closed_round.checked_add(1).ok_or(Error::Overflow)?;
    let finished = next_round >= get_max_rounds(env)?;

    session.contending_game_ids = leaders.clone();
    session.current_round = next_round;
    if finished {
        session.state = SessionState::Ended;
    }

    set_persistent(
        env,
        DataKey::RoundContenders(session_id, next_round),
        &leaders,
    );
    session::save(env, &session);

    RoundPassed {
        session_id,
        closed_round,
        contending_game_ids: leaders.clone(),
    }
    .publish(env);

    if finished {
        SessionEnded {
            session_id,
            final_round: closed_round,
            winner_game_ids: leaders,
        }
        .publish(env);
    }

    Ok(())
}

/// Ends an active session early; the leaders of the open round become the
/// finalists. The round counter is left where it is.
pub(crate) fn end_session(env: &Env, caller: &Address, session_id: u64) -> Result<(), Error> {
    require_admin(env, caller)?;

    let mut session = session::load(env, session_id)?;
    if session.state != SessionState::Active {
        return Err(Error::InvalidState);
    }

    let leaders = leading_ids(env, session_id, session.current_round)?;
    session.contending_game_ids = leaders.clone();
    session.state = SessionState::Ended;
    session::save(env, &session);

    SessionEnded {
        session_id,
        final_round: session.current_round,
        winner_game_ids: leaders,
    }
    .publish(env);

    Ok(())
}

pub(crate) fn winners(env: &Env, session_id: u64) -> Result<Vec<u32>, Error> {
    let session = session::load(env, session_id)?;
    if session.state != SessionState::Ended {
        return Err(Error::InvalidState);
    }
    Ok(session.contending_game_ids)
}
