//! The per-sport pipeline: fetch → classify → extract → fallback → rank.

mod extract;
mod leaders;
mod synth;

use scoreboard_api::client::EspnApi;
use scoreboard_api::{Event, League};
use serde::Serialize;
use std::cmp::Reverse;
use tracing::{debug, info, warn};

// ---------------------------------------------------------------------------
// Output model
// ---------------------------------------------------------------------------

/// One normalized top-performer entry, the unit every endpoint returns.
/// Built during a single request and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub name: String,
    pub team: String,
    pub league: &'static str,
    /// Opposing-matchup label, away side first ("BOS @ LAL").
    pub game: String,
    pub game_id: String,
    /// Provenance: false when extracted from provider data, true when
    /// fabricated from the score.
    pub synthesized: bool,
    #[serde(flatten)]
    pub stats: StatLine,
}

/// Exactly one metric set per record, shaped by the category that produced
/// it. Serialized flat into the record, optional fields omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StatLine {
    #[serde(rename_all = "camelCase")]
    Basketball {
        points: i64,
        rebounds: i64,
        assists: i64,
    },
    #[serde(rename_all = "camelCase")]
    Passing {
        #[serde(skip_serializing_if = "Option::is_none")]
        completions: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        attempts: Option<i64>,
        passing_yards: i64,
        #[serde(rename = "passingTDs")]
        passing_tds: i64,
        #[serde(rename = "passingINTs", skip_serializing_if = "Option::is_none")]
        passing_ints: Option<i64>,
    },
    #[serde(rename_all = "camelCase")]
    Rushing {
        rushing_attempts: i64,
        rushing_yards: i64,
        #[serde(rename = "rushingTDs")]
        rushing_tds: i64,
    },
    #[serde(rename_all = "camelCase")]
    Receiving {
        receiving_catches: i64,
        receiving_yards: i64,
        #[serde(rename = "receivingTDs")]
        receiving_tds: i64,
    },
}

impl StatLine {
    /// Ranking key: points for basketball, the populated yardage field for
    /// football.
    pub fn primary_metric(&self) -> i64 {
        match *self {
            StatLine::Basketball { points, .. } => points,
            StatLine::Passing { passing_yards, .. } => passing_yards,
            StatLine::Rushing { rushing_yards, .. } => rushing_yards,
            StatLine::Receiving { receiving_yards, .. } => receiving_yards,
        }
    }
}

/// Everything one sport pipeline produced for a request. `has_live_games`
/// is an explicit value derived from the scanned events, not ambient state.
#[derive(Debug, Default)]
pub struct Report {
    pub performers: Vec<Performer>,
    pub has_live_games: bool,
}

// ---------------------------------------------------------------------------
// Sport profiles
// ---------------------------------------------------------------------------

/// Per-sport pipeline parameters. The two endpoints differ only in these
/// values and in which extraction path the league selects.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub league: League,
    /// Scoreboard events examined per request, mirroring the score ticker.
    pub scan_limit: usize,
    /// Records kept per event after ranking.
    pub keep: usize,
}

impl Profile {
    pub const NBA: Profile = Profile {
        league: League::Nba,
        scan_limit: 5,
        keep: 2,
    };
    pub const NFL: Profile = Profile {
        league: League::Nfl,
        scan_limit: 5,
        keep: 4,
    };
}

// ---------------------------------------------------------------------------
// Pipeline driver
// ---------------------------------------------------------------------------

/// Run the full pipeline for one sport: fetch the scoreboard, classify each
/// event, extract or synthesize performer records for the finished ones, and
/// report whether any scanned game is live. A failed scoreboard fetch is
/// absorbed into an empty report.
pub async fn sport_report(api: &EspnApi, profile: Profile) -> Report {
    let scoreboard = match api.fetch_scoreboard(profile.league).await {
        Ok(board) => board,
        Err(e) => {
            warn!("{} scoreboard unavailable: {e}", profile.league.tag());
            return Report::default();
        }
    };

    let mut report = Report::default();
    for event in scoreboard.events.iter().take(profile.scan_limit) {
        report.has_live_games |= event.status.is_live();
        if !event.status.is_finished() {
            continue;
        }

        let records = event_performers(api, profile, event).await;
        info!(
            "{}: {} records for finished game {} ({})",
            profile.league.tag(),
            records.len(),
            event.id,
            event.matchup()
        );
        report.performers.extend(records);
    }
    report
}

/// Extraction for one finished event, falling back to synthesis when the
/// provider payload yields nothing real. Detail errors are treated the same
/// as an empty payload; they never abort the request.
async fn event_performers(api: &EspnApi, profile: Profile, event: &Event) -> Vec<Performer> {
    let detail = match api.fetch_event_detail(profile.league, &event.id).await {
        Ok(detail) => detail,
        Err(e) => {
            debug!("no detail for game {}: {e}", event.id);
            return synth::event_fallback(api, profile.league, event).await;
        }
    };

    let mut records = match profile.league {
        League::Nba => extract::basketball_performers(event, &detail),
        League::Nfl => extract::football_candidates(event, &detail),
    };

    if records.is_empty() {
        return synth::event_fallback(api, profile.league, event).await;
    }

    if profile.league == League::Nfl {
        synth::repair_team_coverage(api, profile.league, event, &mut records).await;
        records.sort_by_key(|p| Reverse(p.stats.primary_metric()));
    }

    records.truncate(profile.keep);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const NBA_SUMMARY: &str = r#"{
        "boxscore": {
            "players": [
                {
                    "team": {"id": "13", "abbreviation": "LAL"},
                    "statistics": [{
                        "athletes": [
                            {"athlete": {"displayName": "A. Davis"}, "stats": ["31", "12", "4"]},
                            {"athlete": {"displayName": "D. Russell"}, "stats": ["18", "3", "7"]}
                        ]
                    }]
                },
                {
                    "team": {"id": "2", "abbreviation": "BOS"},
                    "statistics": [{
                        "athletes": [
                            {"athlete": {"displayName": "J. Tatum"}, "stats": ["27", "8", "5"]},
                            {"athlete": {"displayName": "J. Brown"}, "stats": ["22", "6", "3"]}
                        ]
                    }]
                }
            ]
        }
    }"#;

    fn nba_scoreboard(state: &str) -> String {
        format!(
            r#"{{
                "events": [{{
                    "id": "401585601",
                    "competitions": [{{
                        "status": {{"type": {{"state": "{state}"}}}},
                        "competitors": [
                            {{"homeAway": "home", "team": {{"id": "13", "abbreviation": "LAL"}}, "score": "112"}},
                            {{"homeAway": "away", "team": {{"id": "2", "abbreviation": "BOS"}}, "score": "104"}}
                        ]
                    }}]
                }}]
            }}"#
        )
    }

    #[tokio::test]
    async fn unfinished_games_emit_no_records() {
        let mut server = mockito::Server::new_async().await;
        let _board = server
            .mock("GET", "/basketball/nba/scoreboard")
            .with_body(nba_scoreboard("in"))
            .create_async()
            .await;

        let api = EspnApi::with_base_url(server.url());
        let report = sport_report(&api, Profile::NBA).await;
        assert!(report.performers.is_empty());
        assert!(report.has_live_games);
    }

    #[tokio::test]
    async fn scheduled_games_emit_no_records_and_no_live_flag() {
        let mut server = mockito::Server::new_async().await;
        let _board = server
            .mock("GET", "/basketball/nba/scoreboard")
            .with_body(nba_scoreboard("pre"))
            .create_async()
            .await;

        let api = EspnApi::with_base_url(server.url());
        let report = sport_report(&api, Profile::NBA).await;
        assert!(report.performers.is_empty());
        assert!(!report.has_live_games);
    }

    #[tokio::test]
    async fn finished_game_with_boxscore_yields_real_top_two() {
        let mut server = mockito::Server::new_async().await;
        let _board = server
            .mock("GET", "/basketball/nba/scoreboard")
            .with_body(nba_scoreboard("post"))
            .create_async()
            .await;
        let _detail = server
            .mock("GET", "/basketball/nba/scoreboard/401585601")
            .with_body(NBA_SUMMARY)
            .create_async()
            .await;

        let api = EspnApi::with_base_url(server.url());
        let report = sport_report(&api, Profile::NBA).await;

        assert_eq!(report.performers.len(), 2);
        assert_eq!(report.performers[0].name, "A. Davis");
        assert_eq!(report.performers[1].name, "J. Tatum");
        assert!(report.performers.iter().all(|p| !p.synthesized));
        assert!(!report.has_live_games);
    }

    #[tokio::test]
    async fn finished_game_without_detail_synthesizes_both_teams() {
        let mut server = mockito::Server::new_async().await;
        let _board = server
            .mock("GET", "/basketball/nba/scoreboard")
            .with_body(nba_scoreboard("post"))
            .create_async()
            .await;
        let _detail = server
            .mock("GET", "/basketball/nba/scoreboard/401585601")
            .with_status(404)
            .create_async()
            .await;

        let api = EspnApi::with_base_url(server.url());
        let report = sport_report(&api, Profile::NBA).await;

        assert_eq!(report.performers.len(), 2);
        assert!(report.performers.iter().all(|p| p.synthesized));
        let teams: Vec<&str> = report.performers.iter().map(|p| p.team.as_str()).collect();
        assert!(teams.contains(&"LAL") && teams.contains(&"BOS"));
        for p in &report.performers {
            match p.stats {
                StatLine::Basketball { points, .. } => assert!(points >= 15),
                _ => panic!("basketball fallback must emit a basketball line"),
            }
        }
    }

    #[test]
    fn stat_line_primary_metric_selects_populated_yardage() {
        let passing = StatLine::Passing {
            completions: None,
            attempts: None,
            passing_yards: 183,
            passing_tds: 1,
            passing_ints: None,
        };
        let rushing = StatLine::Rushing {
            rushing_attempts: 11,
            rushing_yards: 107,
            rushing_tds: 1,
        };
        let receiving = StatLine::Receiving {
            receiving_catches: 5,
            receiving_yards: 87,
            receiving_tds: 0,
        };
        assert_eq!(passing.primary_metric(), 183);
        assert_eq!(rushing.primary_metric(), 107);
        assert_eq!(receiving.primary_metric(), 87);
    }

    #[test]
    fn synthesized_passing_line_omits_unset_fields() {
        let record = Performer {
            name: "DET QB".to_owned(),
            team: "DET".to_owned(),
            league: "NFL",
            game: "TB @ DET".to_owned(),
            game_id: "401".to_owned(),
            synthesized: true,
            stats: StatLine::Passing {
                completions: None,
                attempts: None,
                passing_yards: 250,
                passing_tds: 3,
                passing_ints: None,
            },
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["passingYards"], 250);
        assert_eq!(value["passingTDs"], 3);
        assert!(value.get("completions").is_none());
        assert!(value.get("attempts").is_none());
        assert!(value.get("passingINTs").is_none());
    }
}
