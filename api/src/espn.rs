/// ESPN site-v2 wire types — serde shapes for the scoreboard, summary, and
/// boxscore payloads. These map to the clean domain types in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Scoreboard
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub status: Option<EspnStatus>,
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    /// "pre" | "in" | "post"
    pub state: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub status: Option<EspnStatus>,
    pub competitors: Option<Vec<EspnCompetitor>>,
    /// Category leaders; the summary endpoint fills this for football.
    pub leaders: Option<Vec<EspnLeaderCategory>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<String>, // ESPN sends scores as strings
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeam {
    pub id: Option<String>,
    pub abbreviation: Option<String>,
}

// ---------------------------------------------------------------------------
// Category leaders  (summary endpoint)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct EspnLeaderCategory {
    pub name: Option<String>, // "passingYards", "rushingYards", ...
    pub leaders: Option<Vec<EspnLeader>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnLeader {
    pub athlete: Option<EspnAthlete>,
    pub team: Option<EspnTeam>,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>, // "13/19, 183 YDS, 1 TD, 1 INT"
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnAthlete {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Event summary
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SummaryResponse {
    pub boxscore: Option<EspnBoxscore>,
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnBoxscore {
    pub players: Option<Vec<EspnTeamPlayers>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeamPlayers {
    pub team: Option<EspnTeam>,
    pub statistics: Option<Vec<EspnStatCategory>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatCategory {
    pub athletes: Option<Vec<EspnAthleteStats>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnAthleteStats {
    pub athlete: Option<EspnAthlete>,
    pub stats: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Team stat sheets  (boxscore endpoint)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BoxscoreResponse {
    pub teams: Option<Vec<EspnTeamSheet>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeamSheet {
    pub team: Option<EspnTeam>,
    pub statistics: Option<Vec<EspnSheetGroup>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnSheetGroup {
    pub label: Option<String>, // "Passing", "Rushing", ...
    pub athletes: Option<Vec<EspnSheetAthlete>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnSheetAthlete {
    pub athlete: Option<EspnAthlete>,
    pub position: Option<EspnPosition>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnPosition {
    pub abbreviation: Option<String>,
}
