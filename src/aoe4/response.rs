use serde::{Deserialize, Serialize};

// the service sends null for unset scalars, decode those as the zero value
mod nullable {
    use serde::de::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

/// A single leaderboard row.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    // reserved by the service, always null for now
    #[serde(default)]
    pub player_number: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub game_id: String,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub user_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub region: String,
    #[serde(default)]
    pub rank_level: Option<String>,
    #[serde(default)]
    pub rank_icon: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub rl_user_id: i64,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub elo: i64,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub elo_rating: i64,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub rank: i64,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub wins: i64,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub win_percent: f64,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub losses: i64,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub win_streak: i64,
}

/// Decoded response body. A zero `count` means the query matched nothing.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub items: Vec<PlayerRecord>,
}

impl Envelope {
    /// First record whose user id contains `user_id` (substring, not equality).
    pub fn find_user(&self, user_id: &str) -> Option<&PlayerRecord> {
        self.items.iter().find(|item| item.user_id.contains(user_id))
    }
}
