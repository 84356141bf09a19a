//! Pulls performer records out of the provider's per-event detail payloads:
//! structured box score lines for basketball, category leader strings for
//! football.

use super::leaders;
use super::{Performer, StatLine};
use scoreboard_api::{Event, EventDetail, League};
use std::cmp::Reverse;
use tracing::debug;

/// Leader categories worth surfacing for football, in provider naming.
const FOOTBALL_CATEGORIES: [&str; 3] = ["passingYards", "rushingYards", "receivingYards"];
/// Provider-ranked athletes taken per team from the basketball box score.
const ATHLETES_PER_TEAM: usize = 2;
/// Leader lines taken per category (one per side when the provider has both).
const LEADERS_PER_CATEGORY: usize = 2;

/// Structured basketball extraction: first two provider-ranked athletes per
/// team, positional [points, rebounds, assists] stats, zero-point lines
/// discarded. Sorted by points descending; the caller truncates.
pub fn basketball_performers(event: &Event, detail: &EventDetail) -> Vec<Performer> {
    let mut performers = Vec::new();

    for team in &detail.boxscore {
        let abbrev = team.abbrev.clone().unwrap_or_else(|| "UNK".to_owned());
        for line in team.athletes.iter().take(ATHLETES_PER_TEAM) {
            let stat =
                |i: usize| -> i64 { line.stats.get(i).and_then(|s| s.parse().ok()).unwrap_or(0) };
            let points = stat(0);
            if points <= 0 {
                continue;
            }
            performers.push(Performer {
                name: line.name.clone(),
                team: abbrev.clone(),
                league: League::Nba.tag(),
                game: event.matchup(),
                game_id: event.id.clone(),
                synthesized: false,
                stats: StatLine::Basketball {
                    points,
                    rebounds: stat(1),
                    assists: stat(2),
                },
            });
        }
    }

    performers.sort_by_key(|p| Reverse(p.stats.primary_metric()));
    performers
}

/// Football extraction from the category leader strings: top two lines per
/// yardage category, each routed through the text parser, team resolved from
/// the leader's team id against the event's competitors ("UNK" when neither
/// side matches). Sorted by yardage descending; not yet truncated — team
/// coverage repair runs first.
pub fn football_candidates(event: &Event, detail: &EventDetail) -> Vec<Performer> {
    let mut candidates = Vec::new();

    for category in &detail.leaders {
        if !FOOTBALL_CATEGORIES.contains(&category.name.as_str()) {
            continue;
        }
        for leader in category.leaders.iter().take(LEADERS_PER_CATEGORY) {
            let Some(stats) = leaders::parse_leader_line(&category.name, &leader.display_value)
            else {
                debug!(
                    "unparsed {} leader line: {:?}",
                    category.name, leader.display_value
                );
                continue;
            };
            let team = leader
                .team_id
                .as_deref()
                .and_then(|id| event.competitor_by_team_id(id))
                .map(|c| c.abbrev.clone())
                .unwrap_or_else(|| "UNK".to_owned());
            candidates.push(Performer {
                name: leader.athlete.clone(),
                team,
                league: League::Nfl.tag(),
                game: event.matchup(),
                game_id: event.id.clone(),
                synthesized: false,
                stats,
            });
        }
    }

    candidates.sort_by_key(|p| Reverse(p.stats.primary_metric()));
    candidates
}
