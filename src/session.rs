use crate::client::LeaderboardApi;
use crate::config::Config;
use crate::error::AppError;
use crate::models::game::*;
use crate::models::leaderboard::*;
use crate::prompt::Prompter;
use crate::services::{leaderboard, percentile, variables};
use crate::validation;
use chrono::DateTime;
use std::io::Write;

enum Stage {
    SelectGame,
    SelectCategory(Game),
    SelectVariableValues(GameDataResponse, Category),
    FetchLeaderboard(QuerySelection),
    Report(Vec<Run>),
}

/// One interactive lookup: game, category, subcategory values, then percentile reports until cancelled.
pub struct Session<'a, A, P, W> {
    api: &'a A,
    prompter: P,
    out: W,
    config: &'a Config,
}

impl<'a, A, P, W> Session<'a, A, P, W>
where
    A: LeaderboardApi,
    P: Prompter,
    W: Write,
{
    pub fn new(api: &'a A, prompter: P, out: W, config: &'a Config) -> Self {
        Session {
            api,
            prompter,
            out,
            config,
        }
    }

    /// Runs to completion. Cancellation surfaces as `AppError::Cancelled`.
    pub async fn run(mut self) -> Result<(), AppError> {
        let mut stage = Stage::SelectGame;
        loop {
            stage = match stage {
                Stage::SelectGame => Stage::SelectCategory(self.select_game().await?),
                Stage::SelectCategory(game) => {
                    let (data, category) = self.select_category(&game).await?;
                    Stage::SelectVariableValues(data, category)
                }
                Stage::SelectVariableValues(data, category) => {
                    Stage::FetchLeaderboard(self.select_values(&data, &category)?)
                }
                Stage::FetchLeaderboard(selection) => {
                    writeln!(self.out, "Loading runs...")?;
                    Stage::Report(leaderboard::fetch_all_verified_runs(self.api, &selection).await?)
                }
                Stage::Report(runs) => {
                    self.report(&runs)?;
                    Stage::Report(runs)
                }
            };
        }
    }

    async fn select_game(&mut self) -> Result<Game, AppError> {
        let query = self.prompter.input_text("Game name?")?;
        let query = validation::validate_search_query(&query)?;

        let mut games = self.api.search(&query).await?.game_list;
        match games.len() {
            0 => return Err(AppError::NoGameFound(query)),
            1 => return Ok(games.remove(0)),
            _ => {}
        }

        games.sort_by_key(|g| g.release_date);
        let choices: Vec<String> = games.iter().map(game_label).collect();
        let index = self
            .prompter
            .select_one("Please select the game", &choices, Some(0))?;
        if index >= games.len() {
            return Err(AppError::NoGameFound(query));
        }
        Ok(games.swap_remove(index))
    }

    async fn select_category(&mut self, game: &Game) -> Result<(GameDataResponse, Category), AppError> {
        log::info!("Selected game {} ({})", game.name, game.id);
        let data = self.api.game_data(&game.id).await?;

        let category = {
            let categories = variables::selectable_categories(&data.categories);
            if categories.is_empty() {
                return Err(AppError::NoCategorySelected);
            }
            let choices: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
            let index = self
                .prompter
                .select_one("Please select the category", &choices, None)?;
            categories
                .get(index)
                .map(|c| (*c).clone())
                .ok_or(AppError::NoCategorySelected)?
        };

        Ok((data, category))
    }

    fn select_values(&mut self, data: &GameDataResponse, category: &Category) -> Result<QuerySelection, AppError> {
        log::info!("Selected category {} ({})", category.name, category.id);
        let mut selection = QuerySelection::new(data.game.id.clone(), category.id.clone());

        for variable in variables::applicable_variables(&data.variables, &category.id) {
            let options = variables::options_for(&data.values, variable);
            if options.is_empty() {
                log::debug!("Variable {} has no selectable values, skipping", variable.name);
                continue;
            }
            let choices: Vec<String> = options.iter().map(|v| v.name.clone()).collect();
            let default = variables::default_option_index(&options, variable);
            let prompt = format!("Please select value for variable {}", variable.name);
            let index = self.prompter.select_one(&prompt, &choices, default)?;
            let value = options
                .get(index)
                .ok_or_else(|| AppError::NoVariableSelected(variable.name.clone()))?;
            selection = selection.with_value(variable.id.clone(), value.id.clone());
        }

        Ok(selection)
    }

    fn report(&mut self, runs: &[Run]) -> Result<(), AppError> {
        let answer = self.prompter.input_number(
            "Enter the top percentile to fetch data for",
            validation::MIN_PERCENTILE,
            validation::MAX_PERCENTILE,
            self.config.default_percentile,
        )?;
        let fraction = validation::percentile_fraction(answer)?;

        let run = percentile::select_by_percentile(runs, fraction)?;
        let time = percentile::format_duration(run.duration()?);
        log::debug!("Percentile {} picked run {} (place {})", answer, run.id, run.place);
        writeln!(
            self.out,
            "The time to beat is {} ({})",
            time,
            self.config.permalink(&run.id)
        )?;
        Ok(())
    }
}

fn game_label(game: &Game) -> String {
    match DateTime::from_timestamp(game.release_date, 0) {
        Some(released) => format!("{} ({})", game.name, released.format("%b %-d, %Y")),
        None => game.name.clone(),
    }
}
