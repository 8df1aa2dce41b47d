use crate::error::AppError;
use crate::models::leaderboard::*;
use async_trait::async_trait;

#[async_trait]
pub trait PageFetcher {
    async fn fetch_page(&self, selection: &QuerySelection, page: u32) -> Result<LeaderboardPage, AppError>;
}

fn accumulate(runs: Vec<Run>, page: LeaderboardPage) -> Vec<Run> {
    runs.into_iter().chain(page.run_list).collect()
}

/// Walks every page of the board and keeps the verified runs in API (rank) order.
///
/// The page count is taken from each response in turn, since the board can
/// change between requests.
pub async fn fetch_all_verified_runs<F>(fetcher: &F, selection: &QuerySelection) -> Result<Vec<Run>, AppError>
where
    F: PageFetcher + ?Sized,
{
    let mut page = 1;
    let mut runs = Vec::new();
    loop {
        let data = fetcher.fetch_page(selection, page).await?;
        let pages = data.pagination.pages;
        if page == 1 && pages == 0 {
            return Err(AppError::EmptyLeaderboard);
        }
        log::debug!(
            "Fetched leaderboard page {}/{} ({} runs, {} on board)",
            page,
            pages,
            data.run_list.len(),
            data.pagination.count
        );
        runs = accumulate(runs, data);
        page += 1;
        if page > pages {
            break;
        }
    }

    let total = runs.len();
    let verified: Vec<Run> = runs.into_iter().filter(Run::is_verified).collect();
    log::info!("Loaded {} runs, {} verified", total, verified.len());

    if verified.is_empty() {
        return Err(AppError::EmptyLeaderboard);
    }
    Ok(verified)
}
