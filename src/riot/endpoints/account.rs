use tracing::debug;

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::AccountDto;

impl RiotClient {
    /// Get account by Riot ID (game name + tag line)
    pub async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError> {
        debug!("get_account_by_riot_id {}#{}", game_name, tag_line);
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.base_url(),
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        self.request(url).await.map_err(|e| {
            if matches!(&e, AppError::RiotApi { status: 404, .. }) {
                AppError::PlayerNotFound {
                    game_name: game_name.to_string(),
                    tag_line: tag_line.to_string(),
                }
            } else {
                e
            }
        })
    }
}
