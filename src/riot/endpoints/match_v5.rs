use tracing::debug;

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::{MatchDto, MatchType};
use crate::window::MonthWindow;

impl RiotClient {
    /// Get the ids of up to `count` matches of the given type played inside
    /// one calendar-month window.
    pub async fn get_match_ids(
        &self,
        puuid: &str,
        window: &MonthWindow,
        match_type: MatchType,
        count: u32,
    ) -> Result<Vec<String>, AppError> {
        debug!("get_match_ids {} from {}", puuid, window.start());
        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?startTime={}&endTime={}&type={}&start=0&count={}",
            self.base_url(),
            puuid,
            window.start_ts(),
            window.end_ts(),
            match_type,
            count
        );

        self.request(url).await
    }

    /// Get match details by match ID
    pub async fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        debug!("get_match {}", match_id);
        let url = format!("{}/lol/match/v5/matches/{}", self.base_url(), match_id);

        self.request(url).await
    }
}
