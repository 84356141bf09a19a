use crate::espn::{BoxscoreResponse, ScoreboardResponse, SummaryResponse};
use crate::{
    AthleteLine, Competitor, Event, EventDetail, GameStatus, LeaderCategory, LeaderLine, League,
    Scoreboard, SheetAthlete, StatGroup, TeamBoxscore, TeamStatSheet,
};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports";
const DASHBOARD_USER_AGENT: &str = "Mozilla/5.0 (compatible; Dashboard/1.0)";

/// Scoreboard client backed by ESPN's public site v2 endpoints.
#[derive(Debug, Clone)]
pub struct EspnApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error for {1}: {0}")]
    Network(#[source] reqwest::Error, String),
    #[error("api error for {1}: {0}")]
    Api(#[source] reqwest::Error, String),
    #[error("parse error for {1}: {0}")]
    Parsing(#[source] reqwest::Error, String),
}

impl Default for EspnApi {
    fn default() -> Self {
        Self::with_base_url(ESPN_SITE_V2)
    }
}

impl EspnApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different scoreboard root (mock servers in
    /// tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(DASHBOARD_USER_AGENT));
        Self {
            client: Client::builder()
                .default_headers(headers)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Fetch the league's current slate of events with competitors and
    /// live/final status.
    pub async fn fetch_scoreboard(&self, league: League) -> ApiResult<Scoreboard> {
        let url = format!("{}/{}/scoreboard", self.base_url, league.sport_path());
        let raw: ScoreboardResponse = self.get(&url).await?;
        Ok(map_scoreboard(raw))
    }

    /// Fetch per-event detail: structured box score lines plus category
    /// leader strings, whichever the provider carries for the sport.
    pub async fn fetch_event_detail(
        &self,
        league: League,
        event_id: &str,
    ) -> ApiResult<EventDetail> {
        let url = format!(
            "{}/{}/scoreboard/{event_id}",
            self.base_url,
            league.sport_path()
        );
        let raw: SummaryResponse = self.get(&url).await?;
        Ok(map_event_detail(raw))
    }

    /// Fetch the per-team stat sheets for an event. Best-effort input for
    /// recovering real player names on synthesized records.
    pub async fn fetch_event_boxscore(
        &self,
        league: League,
        event_id: &str,
    ) -> ApiResult<Vec<TeamStatSheet>> {
        let url = format!(
            "{}/{}/scoreboard/{event_id}/boxscore",
            self.base_url,
            league.sport_path()
        );
        let raw: BoxscoreResponse = self.get(&url).await?;
        Ok(map_boxscore(raw))
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → domain types
// ---------------------------------------------------------------------------

fn map_scoreboard(raw: ScoreboardResponse) -> Scoreboard {
    let events = raw
        .events
        .unwrap_or_default()
        .iter()
        .filter_map(map_event)
        .collect();
    Scoreboard { events }
}

/// An event without an id, or without both a home and an away side, carries
/// nothing stats can be attributed to; such events map to None.
fn map_event(event: &crate::espn::EspnEvent) -> Option<Event> {
    let id = event.id.clone()?;
    let competition = event.competitions.as_ref()?.first()?;

    let competitors = competition.competitors.as_deref().unwrap_or_default();
    let home = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("home"))?;
    let away = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("away"))?;

    // Competition-level status is what the provider keeps current; the
    // event-level copy is a fallback.
    let status = competition
        .status
        .as_ref()
        .or(event.status.as_ref())
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.state.as_deref())
        .map(parse_status)
        .unwrap_or_default();

    Some(Event {
        id,
        status,
        home: map_competitor(home),
        away: map_competitor(away),
    })
}

fn map_competitor(c: &crate::espn::EspnCompetitor) -> Competitor {
    let team = c.team.as_ref();
    Competitor {
        team_id: team.and_then(|t| t.id.clone()).unwrap_or_default(),
        abbrev: team.and_then(|t| t.abbreviation.clone()).unwrap_or_default(),
        score: c
            .score
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(0),
    }
}

fn parse_status(state: &str) -> GameStatus {
    match state {
        "pre" => GameStatus::Scheduled,
        "in" => GameStatus::Live,
        "post" => GameStatus::Finished,
        _ => GameStatus::Unknown,
    }
}

fn map_event_detail(raw: SummaryResponse) -> EventDetail {
    let boxscore = raw
        .boxscore
        .and_then(|b| b.players)
        .unwrap_or_default()
        .into_iter()
        .map(map_team_boxscore)
        .collect();

    let leaders = raw
        .competitions
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.leaders)
        .unwrap_or_default()
        .into_iter()
        .map(map_leader_category)
        .collect();

    EventDetail { boxscore, leaders }
}

/// The summary carries one statistics group per team; athlete order inside
/// it is the provider's own ranking. Lines missing either the athlete or the
/// stat array are skipped.
fn map_team_boxscore(raw: crate::espn::EspnTeamPlayers) -> TeamBoxscore {
    let abbrev = raw.team.as_ref().and_then(|t| t.abbreviation.clone());
    let athletes = raw
        .statistics
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|s| s.athletes)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|a| {
            let athlete = a.athlete?;
            let stats = a.stats?;
            Some(AthleteLine {
                name: athlete
                    .display_name
                    .unwrap_or_else(|| "Unknown Player".to_owned()),
                stats,
            })
        })
        .collect();
    TeamBoxscore { abbrev, athletes }
}

fn map_leader_category(raw: crate::espn::EspnLeaderCategory) -> LeaderCategory {
    LeaderCategory {
        name: raw.name.unwrap_or_default(),
        leaders: raw
            .leaders
            .unwrap_or_default()
            .into_iter()
            .filter_map(|l| {
                let athlete = l.athlete?;
                let display_value = l.display_value?;
                Some(LeaderLine {
                    athlete: athlete
                        .display_name
                        .unwrap_or_else(|| "Unknown Player".to_owned()),
                    team_id: l.team.and_then(|t| t.id),
                    display_value,
                })
            })
            .collect(),
    }
}

fn map_boxscore(raw: BoxscoreResponse) -> Vec<TeamStatSheet> {
    raw.teams
        .unwrap_or_default()
        .into_iter()
        .filter_map(|t| {
            let abbrev = t.team.as_ref().and_then(|team| team.abbreviation.clone())?;
            let groups = t
                .statistics
                .unwrap_or_default()
                .into_iter()
                .map(|g| StatGroup {
                    label: g.label.unwrap_or_default(),
                    athletes: g
                        .athletes
                        .unwrap_or_default()
                        .into_iter()
                        .filter_map(|a| {
                            let name = a.athlete.and_then(|ath| ath.display_name)?;
                            Some(SheetAthlete {
                                name,
                                position: a.position.and_then(|p| p.abbreviation),
                            })
                        })
                        .collect(),
                })
                .collect();
            Some(TeamStatSheet { abbrev, groups })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoreboard_json(state: &str) -> String {
        format!(
            r#"{{
                "events": [{{
                    "id": "401585601",
                    "status": {{"type": {{"state": "{state}", "completed": true}}}},
                    "competitions": [{{
                        "status": {{"type": {{"state": "{state}", "completed": true}}}},
                        "competitors": [
                            {{"homeAway": "home", "team": {{"id": "13", "abbreviation": "LAL"}}, "score": "112"}},
                            {{"homeAway": "away", "team": {{"id": "2", "abbreviation": "BOS"}}, "score": "104"}}
                        ]
                    }}]
                }}]
            }}"#
        )
    }

    #[test]
    fn status_states_map_to_game_status() {
        assert_eq!(parse_status("pre"), GameStatus::Scheduled);
        assert_eq!(parse_status("in"), GameStatus::Live);
        assert_eq!(parse_status("post"), GameStatus::Finished);
        assert_eq!(parse_status("halftime?"), GameStatus::Unknown);
    }

    #[test]
    fn event_without_both_sides_is_dropped() {
        let raw: ScoreboardResponse = serde_json::from_str(
            r#"{
                "events": [{
                    "id": "1",
                    "competitions": [{
                        "competitors": [
                            {"homeAway": "home", "team": {"id": "13", "abbreviation": "LAL"}, "score": "99"}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();
        assert!(map_scoreboard(raw).events.is_empty());
    }

    #[test]
    fn garbled_or_missing_score_parses_to_zero() {
        let raw: ScoreboardResponse = serde_json::from_str(
            r#"{
                "events": [{
                    "id": "1",
                    "competitions": [{
                        "competitors": [
                            {"homeAway": "home", "team": {"id": "13", "abbreviation": "LAL"}, "score": "n/a"},
                            {"homeAway": "away", "team": {"id": "2", "abbreviation": "BOS"}}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();
        let board = map_scoreboard(raw);
        assert_eq!(board.events[0].home.score, 0);
        assert_eq!(board.events[0].away.score, 0);
    }

    #[test]
    fn matchup_label_puts_away_side_first() {
        let raw: ScoreboardResponse = serde_json::from_str(&scoreboard_json("post")).unwrap();
        let board = map_scoreboard(raw);
        assert_eq!(board.events[0].matchup(), "BOS @ LAL");
    }

    #[test]
    fn competitor_lookup_by_team_id() {
        let raw: ScoreboardResponse = serde_json::from_str(&scoreboard_json("post")).unwrap();
        let event = map_scoreboard(raw).events.remove(0);
        assert_eq!(event.competitor_by_team_id("2").unwrap().abbrev, "BOS");
        assert_eq!(event.competitor_by_team_id("13").unwrap().abbrev, "LAL");
        assert!(event.competitor_by_team_id("99").is_none());
    }

    #[test]
    fn summary_maps_boxscore_and_leaders() {
        let raw: SummaryResponse = serde_json::from_str(
            r#"{
                "boxscore": {
                    "players": [{
                        "team": {"id": "13", "abbreviation": "LAL"},
                        "statistics": [{
                            "athletes": [
                                {"athlete": {"displayName": "A. Davis"}, "stats": ["31", "12", "4"]},
                                {"athlete": {"displayName": "No Stats"}},
                                {"stats": ["9", "2", "1"]}
                            ]
                        }]
                    }]
                },
                "competitions": [{
                    "leaders": [{
                        "name": "passingYards",
                        "leaders": [
                            {"athlete": {"displayName": "J. Goff"}, "team": {"id": "8"}, "displayValue": "13/19, 183 YDS, 1 TD"},
                            {"team": {"id": "27"}, "displayValue": "ignored, no athlete"}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();
        let detail = map_event_detail(raw);

        assert_eq!(detail.boxscore.len(), 1);
        assert_eq!(detail.boxscore[0].abbrev.as_deref(), Some("LAL"));
        // Lines missing the athlete or the stat array are dropped.
        assert_eq!(detail.boxscore[0].athletes.len(), 1);
        assert_eq!(detail.boxscore[0].athletes[0].name, "A. Davis");

        assert_eq!(detail.leaders.len(), 1);
        assert_eq!(detail.leaders[0].name, "passingYards");
        assert_eq!(detail.leaders[0].leaders.len(), 1);
        assert_eq!(detail.leaders[0].leaders[0].team_id.as_deref(), Some("8"));
    }

    #[test]
    fn boxscore_maps_groups_and_positions() {
        let raw: BoxscoreResponse = serde_json::from_str(
            r#"{
                "teams": [{
                    "team": {"id": "8", "abbreviation": "DET"},
                    "statistics": [{
                        "label": "Passing",
                        "athletes": [
                            {"athlete": {"displayName": "J. Goff"}, "position": {"abbreviation": "QB"}}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();
        let sheets = map_boxscore(raw);
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].abbrev, "DET");
        assert_eq!(sheets[0].groups[0].label, "Passing");
        assert_eq!(
            sheets[0].groups[0].athletes[0].position.as_deref(),
            Some("QB")
        );
    }

    #[tokio::test]
    async fn fetch_scoreboard_maps_live_events() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/basketball/nba/scoreboard")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(scoreboard_json("in"))
            .create_async()
            .await;

        let api = EspnApi::with_base_url(server.url());
        let board = api.fetch_scoreboard(League::Nba).await.unwrap();
        assert_eq!(board.events.len(), 1);
        assert!(board.events[0].status.is_live());
        assert_eq!(board.events[0].home.score, 112);
    }

    #[tokio::test]
    async fn server_error_surfaces_as_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/football/nfl/scoreboard")
            .with_status(500)
            .create_async()
            .await;

        let api = EspnApi::with_base_url(server.url());
        let err = api.fetch_scoreboard(League::Nfl).await.unwrap_err();
        assert!(matches!(err, ApiError::Api(..)));
    }

    #[tokio::test]
    async fn client_error_decodes_to_empty_default() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/basketball/nba/scoreboard/401")
            .with_status(404)
            .create_async()
            .await;

        let api = EspnApi::with_base_url(server.url());
        let detail = api.fetch_event_detail(League::Nba, "401").await.unwrap();
        assert!(detail.boxscore.is_empty());
        assert!(detail.leaders.is_empty());
    }
}
