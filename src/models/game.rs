use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub enum CategoryScope {
    All,
    Single,
}

impl TryFrom<i64> for CategoryScope {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(CategoryScope::All),
            1 => Ok(CategoryScope::Single),
            other => Err(format!("unknown category scope {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub enum LevelScope {
    /// Full game and levels
    All,
    Levels,
    FullGame,
    SingleLevel,
}

impl TryFrom<i64> for LevelScope {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            -2 => Ok(LevelScope::All),
            -1 => Ok(LevelScope::Levels),
            0 => Ok(LevelScope::FullGame),
            1 => Ok(LevelScope::SingleLevel),
            other => Err(format!("unknown level scope {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub release_date: i64, // unix seconds
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub pos: i64,
    #[serde(default)]
    pub is_misc: bool,
    #[serde(default)]
    pub is_per_level: bool,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub pos: i64,
    pub category_scope: CategoryScope,
    #[serde(default)]
    pub category_id: Option<String>,
    pub level_scope: LevelScope,
    #[serde(default)]
    pub is_subcategory: bool,
    #[serde(default)]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub id: String,
    pub variable_id: String,
    pub name: String,
    pub pos: i64,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub game_list: Vec<Game>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameDataResponse {
    pub game: Game,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}
