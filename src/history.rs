//! The sequential fetch loop: enumerate match ids window by window, then turn
//! each match into a flat row of statistics for the tracked player.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::MatchType;
use crate::stats::StatRow;
use crate::window::MonthWindow;

/// Collect the ids of every match played inside the given windows.
///
/// Windows are scanned in order and duplicate ids are dropped, keeping the
/// first-seen position of each id.
pub async fn collect_match_ids(
    client: &RiotClient,
    puuid: &str,
    windows: &[MonthWindow],
    match_type: MatchType,
    count: u32,
) -> Result<Vec<String>, AppError> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();

    for window in windows {
        let batch = client
            .get_match_ids(puuid, window, match_type, count)
            .await?;
        debug!(window = %window.start(), ids = batch.len(), "window scanned");
        extend_unique(&mut ordered, &mut seen, batch);
    }

    info!(total = ordered.len(), "match ids collected");
    Ok(ordered)
}

fn extend_unique(ordered: &mut Vec<String>, seen: &mut HashSet<String>, batch: Vec<String>) {
    for id in batch {
        if seen.insert(id.clone()) {
            ordered.push(id);
        }
    }
}

/// Fetch every match in `match_ids` and flatten the tracked player's stats.
///
/// A match is skipped, with a warning, when its payload carries no metadata
/// block, when the tracked puuid is not listed in it, or when the positional
/// stat block is missing. Skips never abort the remaining matches.
pub async fn collect_rows(
    client: &RiotClient,
    puuid: &str,
    match_ids: &[String],
) -> Result<Vec<StatRow>, AppError> {
    let mut rows = Vec::with_capacity(match_ids.len());

    for match_id in match_ids {
        let detail = client.get_match(match_id).await?;

        let Some(metadata) = detail.metadata else {
            warn!(%match_id, "match has no metadata block, skipping");
            continue;
        };

        let Some(index) = metadata.participants.iter().position(|p| p == puuid) else {
            warn!(%match_id, "tracked player not listed in match metadata, skipping");
            continue;
        };

        let Some(participant) = detail.info.participants.get(index) else {
            warn!(%match_id, index, "no stat block at participant index, skipping");
            continue;
        };

        let row = StatRow::new(match_id.clone(), detail.info.game_duration, participant);
        debug!(%match_id, champion = %row.champion, kda = row.kda, "row built");
        rows.push(row);
    }

    Ok(rows)
}
