// request body of the leaderboard endpoint
// field names are fixed by the remote service

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub region: i32,
    pub versus: String,
    pub match_type: String,
    // empty for custom games
    #[serde(default)]
    pub team_size: String,
    #[serde(default)]
    pub search_player: String,
    pub page: u32,
    pub count: u32,
}
