//! Wire types for the MLB Stats API schedule endpoint.
//!
//! Every field is defaulted so that partial payloads deserialize cleanly;
//! the normalizer decides what is usable.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulePayload {
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleDate {
    pub games: Vec<RawGame>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGame {
    pub game_date: String,
    pub status: RawStatus,
    pub teams: RawTeams,
    pub linescore: Option<RawLinescore>,
}

impl RawGame {
    /// Only completed games are analyzed.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.status.detailed_state == "Final"
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStatus {
    pub detailed_state: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTeams {
    pub away: RawSide,
    pub home: RawSide,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSide {
    pub team: RawTeam,
    pub score: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTeam {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLinescore {
    pub innings: Vec<RawInning>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInning {
    pub away: RawInningSide,
    pub home: RawInningSide,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInningSide {
    pub runs: Option<u32>,
}
