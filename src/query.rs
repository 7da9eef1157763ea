use crate::aoe4::{
    payload::Payload, Category, MatchType, ParseError, Region, TeamSize, Versus,
};

/// Validated leaderboard query parameters.
///
/// Built once by [`RequestBuilder::build`](crate::RequestBuilder::build) and
/// never mutated afterwards. Derived queries are produced as new values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub region: Region,
    pub versus: Versus,
    pub match_type: MatchType,
    pub team_size: Option<TeamSize>,
    pub search_player: String,
    pub page: u32,
    pub count: u32,
}

impl QueryDescriptor {
    /// Copy of this query targeting a single rating category.
    pub fn for_category(&self, category: Category) -> Self {
        Self {
            match_type: category.match_type(),
            team_size: category.team_size(),
            ..self.clone()
        }
    }

    pub fn to_payload(&self) -> Payload {
        Payload::from(self)
    }
}

impl From<&QueryDescriptor> for Payload {
    fn from(value: &QueryDescriptor) -> Self {
        Self {
            region: value.region.code(),
            versus: value.versus.to_string(),
            match_type: value.match_type.to_string(),
            team_size: value
                .team_size
                .map(|ts| ts.to_string())
                .unwrap_or_default(),
            search_player: value.search_player.clone(),
            page: value.page,
            count: value.count,
        }
    }
}

impl TryFrom<&Payload> for QueryDescriptor {
    type Error = ParseError;

    fn try_from(value: &Payload) -> Result<Self, Self::Error> {
        let team_size = match value.team_size.as_str() {
            "" => None,
            ts => Some(ts.parse()?),
        };
        Ok(Self {
            region: Region::try_from(value.region)?,
            versus: value.versus.parse()?,
            match_type: value.match_type.parse()?,
            team_size,
            search_player: value.search_player.clone(),
            page: value.page,
            count: value.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> QueryDescriptor {
        QueryDescriptor {
            region: Region::Asia,
            versus: Versus::Players,
            match_type: MatchType::Unranked,
            team_size: Some(TeamSize::TwoVTwo),
            search_player: "Beasty".to_string(),
            page: 3,
            count: 25,
        }
    }

    #[test]
    fn serializes_with_remote_field_names() {
        let value = serde_json::to_value(descriptor().to_payload()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "region": 2,
                "versus": "players",
                "matchType": "unranked",
                "teamSize": "2v2",
                "searchPlayer": "Beasty",
                "page": 3,
                "count": 25,
            })
        );
    }

    #[test]
    fn wire_json_round_trip_preserves_fields() {
        let cases = [
            descriptor(),
            QueryDescriptor {
                region: Region::Global,
                versus: Versus::Ai,
                match_type: MatchType::ExpertAi,
                team_size: None,
                search_player: String::new(),
                page: 1,
                count: 100,
            },
        ];
        for original in cases {
            let json = serde_json::to_string(&original.to_payload()).unwrap();
            let payload: Payload = serde_json::from_str(&json).unwrap();
            let decoded = QueryDescriptor::try_from(&payload).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn rejects_unknown_wire_values() {
        let mut payload = descriptor().to_payload();
        payload.region = 8;
        assert_eq!(
            QueryDescriptor::try_from(&payload),
            Err(ParseError::RegionCode(8))
        );

        let mut payload = descriptor().to_payload();
        payload.match_type = "ranked".to_string();
        assert!(QueryDescriptor::try_from(&payload).is_err());
    }

    #[test]
    fn category_queries_are_independent_copies() {
        let base = descriptor();
        let custom = base.for_category(Category::Custom);
        let four = base.for_category(Category::FourVFour);

        assert_eq!(custom.match_type, MatchType::Custom);
        assert_eq!(custom.team_size, None);
        assert_eq!(custom.to_payload().team_size, "");
        assert_eq!(four.match_type, MatchType::Unranked);
        assert_eq!(four.team_size, Some(TeamSize::FourVFour));

        for derived in [&custom, &four] {
            assert_eq!(derived.region, base.region);
            assert_eq!(derived.versus, base.versus);
            assert_eq!(derived.search_player, base.search_player);
            assert_eq!(derived.page, base.page);
            assert_eq!(derived.count, base.count);
        }
        assert_eq!(base, descriptor());
    }
}
