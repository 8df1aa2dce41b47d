use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub enum Verified {
    Pending,
    Verified,
    Rejected,
}

impl TryFrom<i64> for Verified {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Verified::Pending),
            1 => Ok(Verified::Verified),
            2 => Ok(Verified::Rejected),
            other => Err(format!("unknown verification status {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: String,
    pub game_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub level_id: Option<String>,
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub time_with_loads: Option<f64>,
    pub verified: Verified,
    #[serde(default)]
    pub place: i64,
    #[serde(default)]
    pub value_ids: Vec<String>,
}

impl Run {
    pub fn is_verified(&self) -> bool {
        self.verified == Verified::Verified
    }

    /// Real time when the board tracks it, otherwise load-removed time.
    pub fn duration(&self) -> Result<f64, AppError> {
        self.time
            .or(self.time_with_loads)
            .ok_or_else(|| AppError::MissingRunTime {
                run_id: self.id.clone(),
            })
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    pub count: u32,
    pub page: u32,
    pub pages: u32,
    pub per: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    #[serde(default)]
    pub run_list: Vec<Run>,
    pub pagination: Pagination,
}

/// One entry of the leaderboard value filter: a variable pinned to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableValue {
    pub variable_id: String,
    pub value_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySelection {
    pub game_id: String,
    pub category_id: String,
    pub values: Vec<VariableValue>,
}

impl QuerySelection {
    pub fn new(game_id: impl Into<String>, category_id: impl Into<String>) -> Self {
        QuerySelection {
            game_id: game_id.into(),
            category_id: category_id.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, variable_id: impl Into<String>, value_id: impl Into<String>) -> Self {
        self.values.push(VariableValue {
            variable_id: variable_id.into(),
            value_ids: vec![value_id.into()],
        });
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams<'a> {
    pub query: &'a str,
    pub include_games: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDataParams<'a> {
    pub game_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardFilter<'a> {
    pub game_id: &'a str,
    pub category_id: &'a str,
    #[serde(skip_serializing_if = "no_values")]
    pub values: &'a [VariableValue],
}

fn no_values(values: &&[VariableValue]) -> bool {
    values.is_empty()
}

#[derive(Debug, Serialize)]
pub struct LeaderboardParams<'a> {
    pub page: u32,
    pub vary: u32,
    pub params: LeaderboardFilter<'a>,
}

impl<'a> LeaderboardParams<'a> {
    pub fn new(selection: &'a QuerySelection, page: u32) -> Self {
        LeaderboardParams {
            page,
            vary: 0,
            params: LeaderboardFilter {
                game_id: &selection.game_id,
                category_id: &selection.category_id,
                values: &selection.values,
            },
        }
    }
}
