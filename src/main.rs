mod args;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use aoe4_leaderboard::{HttpTransport, RequestBuilder};
use args::Args;
use clap::Parser;
use itertools::Itertools;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let builder = RequestBuilder::new()
        .endpoint(args.endpoint.as_str())
        .user_agent(args.user_agent.as_str())
        .region(args.region)
        .versus(args.versus)
        .match_type(args.match_type)
        .team_size(args.team_size)
        .search_player(args.player.as_str())
        .page(args.page)
        .count(args.count);
    let builder = match args.proxy.as_deref() {
        Some(proxy) => builder.transport(Arc::new(
            HttpTransport::with_proxy(proxy).with_context(|| format!("invalid proxy {}", proxy))?,
        )),
        None => builder,
    };
    let builder = match args.timeout_secs {
        Some(secs) => builder.timeout(Duration::from_secs(secs)),
        None => builder,
    };
    let request = builder.build()?;

    // clap guarantees a user id for both rating modes
    match args.user_id.as_deref() {
        Some(user_id) if args.all => {
            let ratings = request.query_all_elo(user_id).await?;
            if ratings.is_empty() {
                log::info!("no rating found for {}", args.player);
            }
            for (category, elo) in ratings.iter().sorted() {
                println!("{}\t{}", category, elo);
            }
            return Ok(());
        }
        Some(user_id) if args.elo => {
            let elo = request.query_elo(user_id).await?;
            println!("{}", elo);
            return Ok(());
        }
        _ => {}
    }

    for record in request.query().await? {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}
