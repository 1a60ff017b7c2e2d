use soroban_sdk::{contractevent, Address, String, Vec};

#[contractevent]
pub struct Initialized {
    #[topic]
    pub admin: Address,
    pub max_rounds: u32,
}

#[contractevent]
pub struct GameAdded {
    #[topic]
    pub game_id: u32,
    pub name: String,
}

#[contractevent]
pub struct JuryMemberAdded {
    #[topic]
    pub wallet_address: Address,
    pub name: String,
}

#[contractevent]
pub struct JuryMemberRemoved {
    #[topic]
    pub wallet_address: Address,
}

#[contractevent]
pub struct SessionCreated {
    #[topic]
    pub session_id: u64,
    pub game_count: u32,
}

#[contractevent]
pub struct SessionStarted {
    #[topic]
    pub session_id: u64,
}

#[contractevent]
pub struct VoteCast {
    #[topic]
    pub session_id: u64,
    #[topic]
    pub voter: Address,
    pub round: u32,
    pub game_id: u32,
    pub weight: u64,
}

#[contractevent]
pub struct RoundPassed {
    #[topic]
    pub session_id: u64,
    pub closed_round: u32,
    pub contending_game_ids: Vec<u32>,
}

#[contractevent]
pub struct SessionEnded {
    #[topic]
    pub session_id: u64,
    pub final_round: u32,
    pub winner_game_ids: Vec<u32>,
}
