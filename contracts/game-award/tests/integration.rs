use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

use gameaward_contract::{GameAward, GameAwardClient, SessionState};

fn deploy<'a>(env: &'a Env, owner: &Address) -> GameAwardClient<'a> {
    let contract_id = env.register(GameAward, ());
    let client = GameAwardClient::new(env, &contract_id);

    env.mock_all_auths();
    client.init(owner, &2u32);
    client
}

fn add_game(env: &Env, client: &GameAwardClient, owner: &Address, name: &str) -> u32 {
    client.add_game(
        owner,
        &String::from_str(env, name),
        &String::from_str(env, "PS4"),
        &String::from_str(env, "130€"),
        &String::from_str(env, "jeu"),
        &String::from_str(env, "samedi"),
        &String::from_str(env, "photo"),
    )
}

#[test]
fn test_vote_for_a_game_in_two_rounds() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let client = deploy(&env, &owner);

    let g1 = add_game(&env, &client, &owner, "Game1");
    let g2 = add_game(&env, &client, &owner, "Game2");
    add_game(&env, &client, &owner, "Game3");

    let session_id = client.create_vote_session(&owner);
    assert_eq!(client.get_last_vote_session_id(), session_id);
    assert_eq!(client.get_vote_session(&session_id).id, session_id);
    client.start_vote_session(&owner, &session_id);

    let voter = Address::generate(&env);
    client.vote(&voter, &session_id, &g1);
    assert_eq!(client.get_vote_round_game_ids(&session_id), vec![&env, g1]);
    let leading = client.get_current_round_leading_games(&session_id, &0u32);
    assert_eq!(leading.get(0).unwrap().game.id, g1);
    assert_eq!(leading.get(0).unwrap().score, 1);

    client.pass_to_next_round(&owner, &session_id);
    assert_eq!(client.get_current_round(&session_id), 1);
    assert_eq!(
        client.get_vote_session(&session_id).contending_game_ids,
        vec![&env, g1]
    );
    assert!(client
        .try_vote(&Address::generate(&env), &session_id, &g2)
        .is_err());

    client.vote(&voter, &session_id, &g1);
    assert_eq!(client.get_vote_round_game_ids(&session_id), vec![&env, g1]);
    assert_eq!(client.get_score(&session_id, &1u32, &g1), 1);
}

#[test]
fn test_jury_vote_is_heavier() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let client = deploy(&env, &owner);

    add_game(&env, &client, &owner, "Game2");
    let g2 = add_game(&env, &client, &owner, "Game3");
    add_game(&env, &client, &owner, "Game4");

    // The owner sits on the jury too.
    client.add_jury_member(
        &owner,
        &owner,
        &String::from_str(&env, "name"),
        &String::from_str(&env, "pictureUrl"),
    );

    let session_id = client.create_vote_session(&owner);
    client.start_vote_session(&owner, &session_id);
    client.vote(&owner, &session_id, &g2);

    let round = client.get_current_round(&session_id);
    let leading = client.get_current_round_leading_games(&session_id, &round);
    assert_eq!(leading.len(), 1);
    assert_eq!(leading.get(0).unwrap().score, 30);
    assert_eq!(client.get_score(&session_id, &round, &g2), 30);
}

#[test]
fn test_full_tournament_to_a_winner() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let client = deploy(&env, &owner);

    let jury = Address::generate(&env);
    client.add_jury_member(
        &owner,
        &jury,
        &String::from_str(&env, "Jury"),
        &String::from_str(&env, "pictureUrl"),
    );

    let g1 = add_game(&env, &client, &owner, "Game1");
    let g2 = add_game(&env, &client, &owner, "Game2");
    let g3 = add_game(&env, &client, &owner, "Game3");
    let session_id = client.create_vote_session(&owner);
    client.start_vote_session(&owner, &session_id);

    // Round 0: g1 and g3 tie, g2 is out.
    for game_id in [g1, g3, g1, g3] {
        client.vote(&Address::generate(&env), &session_id, &game_id);
    }
    client.vote(&Address::generate(&env), &session_id, &g2);
    client.pass_to_next_round(&owner, &session_id);
    assert_eq!(
        client.get_vote_session(&session_id).contending_game_ids,
        vec![&env, g1, g3]
    );

    // Round 1: thirty public votes cannot beat one jury vote plus one.
    for _ in 0..30 {
        client.vote(&Address::generate(&env), &session_id, &g1);
    }
    client.vote(&jury, &session_id, &g3);
    client.vote(&Address::generate(&env), &session_id, &g3);
    client.pass_to_next_round(&owner, &session_id);

    let session = client.get_vote_session(&session_id);
    assert_eq!(session.state, SessionState::Ended);
    assert_eq!(client.get_winners(&session_id), vec![&env, g3]);
}

#[test]
fn test_removed_jury_member_votes_as_public() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let client = deploy(&env, &owner);

    let first = Address::generate(&env);
    let second = Address::generate(&env);
    for (member, name) in [(&first, "name"), (&second, "name2")] {
        client.add_jury_member(
            &owner,
            member,
            &String::from_str(&env, name),
            &String::from_str(&env, "pictureUrl"),
        );
    }
    client.remove_jury_member(&owner, &first);

    let juries = client.get_juries();
    assert_eq!(juries.len(), 1);
    assert_eq!(juries.get(0).unwrap().wallet_address, second);

    let g1 = add_game(&env, &client, &owner, "Game1");
    add_game(&env, &client, &owner, "Game2");
    let session_id = client.create_vote_session(&owner);
    client.start_vote_session(&owner, &session_id);

    client.vote(&first, &session_id, &g1);
    assert_eq!(client.get_score(&session_id, &0u32, &g1), 1);
}
