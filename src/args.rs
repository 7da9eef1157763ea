use aoe4_leaderboard::{MatchType, Region, TeamSize, Versus, DEFAULT_ENDPOINT};
use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Look up Age of Empires IV leaderboard ratings")]
pub struct Args {
    /// Leaderboard search term
    pub player: String,
    /// Part of the player's user id, required with --elo and --all
    #[arg(long, required_if_eq_any([("elo", "true"), ("all", "true")]))]
    pub user_id: Option<String>,
    #[arg(long, default_value = "global")]
    pub region: Region,
    #[arg(long, default_value = "players")]
    pub versus: Versus,
    #[arg(long, default_value = "unranked")]
    pub match_type: MatchType,
    #[arg(long, default_value = "1v1")]
    pub team_size: TeamSize,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long, default_value_t = 100)]
    pub count: u32,
    #[arg(long, default_value = concat!("aoe4-elo/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
    /// Proxy url for all requests
    #[arg(long)]
    pub proxy: Option<String>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Print the rating for the configured match type only
    #[arg(long, conflicts_with = "all")]
    pub elo: bool,
    /// Print the rating of every category
    #[arg(long)]
    pub all: bool,
}
