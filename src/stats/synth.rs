//! Score-derived fallback statistics for games where the provider exposes no
//! usable per-player data. Every record leaving this module carries the
//! `synthesized` provenance flag.

use super::{Performer, StatLine};
use rand::Rng;
use scoreboard_api::client::EspnApi;
use scoreboard_api::{Competitor, Event, League};
use tracing::{debug, info};

/// Floors keeping fabricated lines plausible when the score is 0 (or parsed
/// into nonsense).
const MIN_POINTS: i64 = 15;
const MIN_PASSING_YARDS: i64 = 150;

/// Fabricate one record per team for an event that produced nothing real.
pub async fn event_fallback(api: &EspnApi, league: League, event: &Event) -> Vec<Performer> {
    info!(
        "no real stats for game {}, generating fallback records",
        event.id
    );
    let home = team_record(api, league, event, &event.home).await;
    let away = team_record(api, league, event, &event.away).await;
    vec![home, away]
}

/// If ranked candidates cover only one of two resolvable teams, add one
/// synthesized record for the missing side. Deliberate product policy: the
/// output reflects both sides whenever any real data was found. Never runs
/// for a team that already has a real record in this event.
pub async fn repair_team_coverage(
    api: &EspnApi,
    league: League,
    event: &Event,
    records: &mut Vec<Performer>,
) {
    if event.home.abbrev.is_empty() || event.away.abbrev.is_empty() {
        return;
    }
    let covers = |c: &Competitor| records.iter().any(|p| p.team == c.abbrev);
    let missing = match (covers(&event.home), covers(&event.away)) {
        (true, false) => &event.away,
        (false, true) => &event.home,
        _ => return,
    };
    debug!(
        "only one team represented for game {}, adding {} record",
        event.id, missing.abbrev
    );
    records.push(team_record(api, league, event, missing).await);
}

async fn team_record(api: &EspnApi, league: League, event: &Event, team: &Competitor) -> Performer {
    let (name, stats) = match league {
        League::Nba => (
            format!("{} Top Scorer", team.abbrev),
            basketball_line(team.score, &mut rand::thread_rng()),
        ),
        League::Nfl => {
            let name = passer_name(api, league, &event.id, &team.abbrev)
                .await
                .unwrap_or_else(|| format!("{} QB", team.abbrev));
            (name, football_line(team.score, &mut rand::thread_rng()))
        }
    };
    Performer {
        name,
        team: team.abbrev.clone(),
        league: league.tag(),
        game: event.matchup(),
        game_id: event.id.clone(),
        synthesized: true,
        stats,
    }
}

fn basketball_line(score: i64, rng: &mut impl Rng) -> StatLine {
    let points = ((score as f64 * 0.25 + rng.gen_range(0.0..10.0)).floor() as i64).max(MIN_POINTS);
    StatLine::Basketball {
        points,
        rebounds: rng.gen_range(0..8) + 5,
        assists: rng.gen_range(0..8) + 3,
    }
}

fn football_line(score: i64, rng: &mut impl Rng) -> StatLine {
    let yards =
        ((score as f64 * 8.0 + rng.gen_range(0.0..100.0)).floor() as i64).max(MIN_PASSING_YARDS);
    StatLine::Passing {
        completions: None,
        attempts: None,
        passing_yards: yards,
        passing_tds: score.div_euclid(7) + rng.gen_range(0..3),
        passing_ints: None,
    }
}

/// Best-effort lookup of a real passer name from the event's stat sheets:
/// the team's "Passing" group, first athlete listed at QB. Any failure falls
/// back to the generic label.
async fn passer_name(api: &EspnApi, league: League, event_id: &str, abbrev: &str) -> Option<String> {
    let sheets = match api.fetch_event_boxscore(league, event_id).await {
        Ok(sheets) => sheets,
        Err(e) => {
            debug!("no boxscore for game {event_id}: {e}");
            return None;
        }
    };
    sheets
        .iter()
        .find(|s| s.abbrev == abbrev)?
        .groups
        .iter()
        .find(|g| g.label == "Passing")?
        .athletes
        .iter()
        .find(|a| a.position.as_deref() == Some("QB"))
        .map(|a| a.name.clone())
}
