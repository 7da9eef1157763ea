use std::{sync::Arc, time::Duration};

use reqwest::header::HeaderValue;
use thiserror::Error;

use crate::{
    aoe4::{MatchType, Region, TeamSize, Versus},
    client::{Client, HttpTransport, Request, Transport},
    query::QueryDescriptor,
};

pub const DEFAULT_ENDPOINT: &str = "https://api.ageofempires.com/api/ageiv/Leaderboard";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid page")]
    InvalidPage,
    #[error("invalid count")]
    InvalidCount,
    #[error("invalid region: {0}")]
    InvalidRegion(i32),
    #[error("incompatible match type and versus value: {match_type} against {versus}")]
    IncompatibleMatchType { match_type: MatchType, versus: Versus },
    #[error("invalid user agent: {0:?}")]
    InvalidUserAgent(String),
    #[error("invalid timeout: must be greater than zero")]
    InvalidTimeout,
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Accumulates query settings; nothing is checked until [`RequestBuilder::build`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    transport: Option<Arc<dyn Transport>>,
    endpoint: String,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    region: i32,
    versus: Versus,
    match_type: MatchType,
    team_size: TeamSize,
    search_player: String,
    page: u32,
    count: u32,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            transport: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: None,
            timeout: None,
            region: Region::Global.code(),
            versus: Versus::Players,
            match_type: MatchType::Unranked,
            team_size: TeamSize::OneVOne,
            search_player: String::new(),
            page: 1,
            count: 100,
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn http_client(self, client: reqwest::Client) -> Self {
        self.transport(Arc::new(HttpTransport::from(client)))
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// An empty user agent means no `User-Agent` header is sent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Deadline applied to every request issued by the built [`Request`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region.code();
        self
    }

    /// Raw numeric region code, checked against [`Region`] at build time.
    pub fn region_code(mut self, code: i32) -> Self {
        self.region = code;
        self
    }

    pub fn versus(mut self, versus: Versus) -> Self {
        self.versus = versus;
        self
    }

    pub fn match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    pub fn team_size(mut self, team_size: TeamSize) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn search_player(mut self, search_player: impl Into<String>) -> Self {
        self.search_player = search_player.into();
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    fn descriptor(&self) -> Result<QueryDescriptor, BuildError> {
        if self.page < 1 {
            return Err(BuildError::InvalidPage);
        }
        if self.count < 1 {
            return Err(BuildError::InvalidCount);
        }
        let region =
            Region::try_from(self.region).map_err(|_| BuildError::InvalidRegion(self.region))?;
        // ranked and custom games are player-only, ai modes are ai-only
        if self.match_type.versus() != self.versus {
            return Err(BuildError::IncompatibleMatchType {
                match_type: self.match_type,
                versus: self.versus,
            });
        }

        Ok(QueryDescriptor {
            region,
            versus: self.versus,
            match_type: self.match_type,
            team_size: Some(self.team_size),
            search_player: self.search_player.clone(),
            page: self.page,
            count: self.count,
        })
    }

    /// Validates the accumulated settings and produces a ready to send request.
    /// The builder is left untouched and can be reused. Without an explicit
    /// transport, all built requests share one process-wide HTTP client.
    pub fn build(&self) -> Result<Request, BuildError> {
        let query = self.descriptor()?;

        let user_agent = match self.user_agent.as_deref() {
            None | Some("") => None,
            Some(ua) => Some(
                HeaderValue::from_str(ua)
                    .map_err(|_| BuildError::InvalidUserAgent(ua.to_string()))?,
            ),
        };

        let timeout = match self.timeout {
            Some(timeout) if timeout.is_zero() => return Err(BuildError::InvalidTimeout),
            timeout => timeout,
        };

        let transport: Arc<dyn Transport> = match &self.transport {
            Some(transport) => transport.clone(),
            None => HttpTransport::shared()?,
        };

        let client = Client::new(transport, self.endpoint.clone(), user_agent, timeout);
        Ok(Request::new(client, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> RequestBuilder {
        RequestBuilder::new().http_client(reqwest::Client::new())
    }

    #[test]
    fn defaults_are_applied() {
        let request = builder().build().unwrap();
        assert_eq!(
            request.query_descriptor(),
            &QueryDescriptor {
                region: Region::Global,
                versus: Versus::Players,
                match_type: MatchType::Unranked,
                team_size: Some(TeamSize::OneVOne),
                search_player: String::new(),
                page: 1,
                count: 100,
            }
        );
    }

    #[test]
    fn valid_combinations_build_exactly() {
        let team_sizes = [
            TeamSize::OneVOne,
            TeamSize::TwoVTwo,
            TeamSize::ThreeVThree,
            TeamSize::FourVFour,
        ];
        for region in Region::ALL {
            for match_type in MatchType::ALL {
                for team_size in team_sizes {
                    let request = builder()
                        .region(region)
                        .versus(match_type.versus())
                        .match_type(match_type)
                        .team_size(team_size)
                        .search_player("Beasty")
                        .page(2)
                        .count(10)
                        .build()
                        .unwrap();
                    let query = request.query_descriptor();
                    assert_eq!(query.region, region);
                    assert_eq!(query.versus, match_type.versus());
                    assert_eq!(query.match_type, match_type);
                    assert_eq!(query.team_size, Some(team_size));
                    assert_eq!(query.search_player, "Beasty");
                    assert_eq!(query.page, 2);
                    assert_eq!(query.count, 10);
                }
            }
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            builder().page(0).build(),
            Err(BuildError::InvalidPage)
        ));
        assert!(matches!(
            builder().count(0).build(),
            Err(BuildError::InvalidCount)
        ));
        assert!(matches!(
            builder().region_code(-1).build(),
            Err(BuildError::InvalidRegion(-1))
        ));
        assert!(matches!(
            builder().region_code(8).build(),
            Err(BuildError::InvalidRegion(8))
        ));
        assert_eq!(
            builder().region_code(5).build().unwrap().query_descriptor().region,
            Region::Oceania
        );
    }

    #[test]
    fn rejects_mismatched_opponents() {
        for match_type in [MatchType::Unranked, MatchType::Custom] {
            let err = builder()
                .match_type(match_type)
                .versus(Versus::Ai)
                .build()
                .unwrap_err();
            assert!(matches!(err, BuildError::IncompatibleMatchType { .. }));
            assert!(err
                .to_string()
                .starts_with("incompatible match type and versus value"));
        }
        for match_type in [
            MatchType::EasyAi,
            MatchType::MediumAi,
            MatchType::HardAi,
            MatchType::ExpertAi,
        ] {
            assert!(matches!(
                builder()
                    .match_type(match_type)
                    .versus(Versus::Players)
                    .build(),
                Err(BuildError::IncompatibleMatchType { .. })
            ));
        }
    }

    #[test]
    fn rejects_bad_user_agent_and_timeout() {
        assert!(matches!(
            builder().user_agent("bad\nagent").build(),
            Err(BuildError::InvalidUserAgent(_))
        ));
        assert!(matches!(
            builder().timeout(Duration::ZERO).build(),
            Err(BuildError::InvalidTimeout)
        ));
        assert!(builder().user_agent("").build().is_ok());
    }

    #[test]
    fn builds_without_explicit_transport() {
        let first = RequestBuilder::new().build().unwrap();
        let second = RequestBuilder::new().page(2).build().unwrap();
        assert_eq!(first.query_descriptor().page, 1);
        assert_eq!(second.query_descriptor().page, 2);
    }

    #[test]
    fn builder_is_reusable() {
        let base = builder().search_player("Beasty");
        let first = base.build().unwrap();
        let second = base.clone().page(4).build().unwrap();
        assert_eq!(first.query_descriptor().page, 1);
        assert_eq!(second.query_descriptor().page, 4);
        assert_eq!(base.build().unwrap().query_descriptor(), first.query_descriptor());
    }
}
