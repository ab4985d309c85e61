use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::AppError;

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

// ============================================================================
// Match-v5
// ============================================================================

/// Some older matches come back without a metadata block; keep it optional so
/// one of them cannot fail the whole payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: Option<MetadataDto>,
    pub info: InfoDto,
}

/// Participant puuids are listed in the same order as the stat blocks in
/// [`InfoDto::participants`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    pub match_id: String,
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    pub game_duration: u64,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
    pub team_id: u16,
    pub team_position: String,
    pub total_damage_taken: u32,
    pub physical_damage_dealt_to_champions: u32,
    pub magic_damage_dealt_to_champions: u32,
    pub total_minions_killed: u32,
    pub gold_earned: u32,
    pub damage_dealt_to_turrets: u32,
}

/// Match type filter accepted by the match ids endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Ranked,
    Normal,
    Tourney,
    Tutorial,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ranked => "ranked",
            Self::Normal => "normal",
            Self::Tourney => "tourney",
            Self::Tutorial => "tutorial",
        }
    }
}

impl FromStr for MatchType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ranked" => Ok(Self::Ranked),
            "normal" => Ok(Self::Normal),
            "tourney" => Ok(Self::Tourney),
            "tutorial" => Ok(Self::Tutorial),
            _ => Err(AppError::InvalidMatchType(s.to_string())),
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_without_metadata_block_deserializes() {
        let raw = r#"{
            "info": {
                "gameDuration": 1542,
                "participants": []
            }
        }"#;

        let parsed: MatchDto = serde_json::from_str(raw).unwrap();
        assert!(parsed.metadata.is_none());
        assert_eq!(parsed.info.game_duration, 1542);
    }

    #[test]
    fn participant_stats_deserialize_from_camel_case() {
        let raw = r#"{
            "championName": "Ahri",
            "kills": 4,
            "deaths": 2,
            "assists": 9,
            "win": true,
            "teamId": 100,
            "teamPosition": "MIDDLE",
            "totalDamageTaken": 14230,
            "physicalDamageDealtToChampions": 1200,
            "magicDamageDealtToChampions": 18500,
            "totalMinionsKilled": 187,
            "goldEarned": 11890,
            "damageDealtToTurrets": 2301
        }"#;

        let parsed: ParticipantDto = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.champion_name, "Ahri");
        assert_eq!(parsed.team_id, 100);
        assert_eq!(parsed.magic_damage_dealt_to_champions, 18500);
    }

    #[test]
    fn match_type_round_trips_through_str() {
        assert_eq!("ranked".parse::<MatchType>().unwrap(), MatchType::Ranked);
        assert_eq!(MatchType::Tourney.to_string(), "tourney");
        assert!(matches!(
            "aram".parse::<MatchType>(),
            Err(AppError::InvalidMatchType(_))
        ));
    }
}
