pub mod client;
pub mod espn;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the ESPN wire format
// ---------------------------------------------------------------------------

/// Leagues the dashboard surfaces. Fixed set; each maps to one scoreboard
/// path under the provider's site v2 root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    Nba,
    Nfl,
}

impl League {
    /// URL path segment under the site v2 sports root.
    pub fn sport_path(self) -> &'static str {
        match self {
            League::Nba => "basketball/nba",
            League::Nfl => "football/nfl",
        }
    }

    /// League tag carried on every performer record.
    pub fn tag(self) -> &'static str {
        match self {
            League::Nba => "NBA",
            League::Nfl => "NFL",
        }
    }
}

/// Game state as of this fetch. Re-derived fresh on every request; nothing
/// is tracked across requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Unknown,
    Scheduled,
    Live,
    Finished,
}

impl GameStatus {
    pub fn is_live(self) -> bool {
        self == GameStatus::Live
    }

    pub fn is_finished(self) -> bool {
        self == GameStatus::Finished
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    pub events: Vec<Event>,
}

/// One scheduled or played game. Events missing either side carry nothing we
/// can attribute stats to and are dropped during mapping, so both
/// competitors are always present here.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: String,
    pub status: GameStatus,
    pub home: Competitor,
    pub away: Competitor,
}

impl Event {
    /// Matchup label shown on every record, away side first ("BOS @ LAL").
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away.abbrev, self.home.abbrev)
    }

    /// Competitor owning the given provider team id, if either side matches.
    pub fn competitor_by_team_id(&self, team_id: &str) -> Option<&Competitor> {
        [&self.home, &self.away]
            .into_iter()
            .find(|c| c.team_id == team_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Competitor {
    pub team_id: String,
    pub abbrev: String,
    /// Parsed from the provider's string form; 0 when absent or garbled.
    pub score: i64,
}

/// Per-event detail: whichever of the two stat surfaces the provider carries
/// for the sport. Basketball summaries fill `boxscore`; football summaries
/// fill `leaders`.
#[derive(Debug, Clone, Default)]
pub struct EventDetail {
    pub boxscore: Vec<TeamBoxscore>,
    pub leaders: Vec<LeaderCategory>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamBoxscore {
    pub abbrev: Option<String>,
    /// Provider-ranked stat lines; order is meaningful.
    pub athletes: Vec<AthleteLine>,
}

#[derive(Debug, Clone, Default)]
pub struct AthleteLine {
    pub name: String,
    pub stats: Vec<String>,
}

/// One stat category's leaders ("passingYards", "rushingYards", ...), each a
/// human-readable summary string attributed to an athlete and a team id.
#[derive(Debug, Clone, Default)]
pub struct LeaderCategory {
    pub name: String,
    pub leaders: Vec<LeaderLine>,
}

#[derive(Debug, Clone, Default)]
pub struct LeaderLine {
    pub athlete: String,
    pub team_id: Option<String>,
    pub display_value: String,
}

/// Per-team stat sheet from the boxscore endpoint, grouped by category label
/// ("Passing", "Rushing", ...). Used to recover real player names for
/// synthesized records.
#[derive(Debug, Clone, Default)]
pub struct TeamStatSheet {
    pub abbrev: String,
    pub groups: Vec<StatGroup>,
}

#[derive(Debug, Clone, Default)]
pub struct StatGroup {
    pub label: String,
    pub athletes: Vec<SheetAthlete>,
}

#[derive(Debug, Clone, Default)]
pub struct SheetAthlete {
    pub name: String,
    pub position: Option<String>,
}
