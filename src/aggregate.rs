use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use serde::Serialize;
use tokio::task::JoinSet;

use crate::{
    aoe4::Category,
    client::{Client, Request, RequestError},
};

/// Ratings of one player keyed by category.
///
/// A category is absent when its lookup found no matching player, and also
/// when its lookup failed; failures are only reported through the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RatingMap(HashMap<Category, i64>);

impl RatingMap {
    pub fn get(&self, category: Category) -> Option<i64> {
        self.0.get(&category).copied()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, i64)> + '_ {
        self.0.iter().map(|(&category, &elo)| (category, elo))
    }
}

impl FromIterator<(Category, i64)> for RatingMap {
    fn from_iter<T: IntoIterator<Item = (Category, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

type SharedRatings = Arc<Mutex<HashMap<Category, i64>>>;

// the lock is held for the insert only, never across a request
fn record(ratings: &Mutex<HashMap<Category, i64>>, category: Category, elo: i64) {
    let mut guard = ratings.lock().unwrap_or_else(PoisonError::into_inner);
    guard.insert(category, elo);
}

async fn lookup(
    client: Client,
    category: Category,
    body: bytes::Bytes,
    user_id: String,
    player: String,
    ratings: SharedRatings,
) {
    log::debug!("querying {} rating for {:?}", category, player);
    match client.send(body).await {
        Ok(envelope) => match envelope.find_user(&user_id) {
            Some(found) => record(&ratings, category, found.elo),
            None => log::debug!("no {} rating for {:?}", category, player),
        },
        Err(err) => log::warn!(
            "failed to retrieve {} rating for {:?}: {}",
            category,
            player,
            err
        ),
    }
}

impl Request {
    /// Looks up the player's rating in every [`Category`] at once.
    ///
    /// One query per category runs concurrently and the call returns after all
    /// of them finished. A failing category never fails the whole lookup; it is
    /// logged and left out of the result. Only a payload that cannot be
    /// encoded fails the call, before anything is sent.
    pub async fn query_all_elo(&self, user_id: &str) -> Result<RatingMap, RequestError> {
        let jobs = Category::ALL
            .into_iter()
            .map(|category| {
                let query = self.query.for_category(category);
                Client::encode(&query).map(|body| (category, body))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ratings: SharedRatings = Arc::new(Mutex::new(HashMap::with_capacity(jobs.len())));
        let mut tasks = JoinSet::new();
        for (category, body) in jobs {
            tasks.spawn(lookup(
                self.client.clone(),
                category,
                body,
                user_id.to_string(),
                self.query.search_player.clone(),
                ratings.clone(),
            ));
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                log::warn!("rating lookup task did not complete: {}", err);
            }
        }

        let ratings = std::mem::take(&mut *ratings.lock().unwrap_or_else(PoisonError::into_inner));
        Ok(RatingMap(ratings))
    }
}
