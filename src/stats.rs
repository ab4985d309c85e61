use crate::riot::types::ParticipantDto;

/// Flattened per-match statistics for the tracked player.
///
/// Built once per successfully fetched match and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub match_id: String,
    pub duration_secs: u64,
    pub champion: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub kda: f64,
    pub win: bool,
    pub team_id: u16,
    pub position: String,
    pub damage_taken: u32,
    pub damage_dealt: u32,
    pub minions_killed: u32,
    pub gold_earned: u32,
    pub gold_per_minute: f64,
    pub tower_damage: u32,
}

impl StatRow {
    pub fn new(match_id: String, duration_secs: u64, participant: &ParticipantDto) -> Self {
        Self {
            match_id,
            duration_secs,
            champion: participant.champion_name.clone(),
            kills: participant.kills,
            deaths: participant.deaths,
            assists: participant.assists,
            kda: kda(participant.deaths, participant.assists),
            win: participant.win,
            team_id: participant.team_id,
            position: participant.team_position.clone(),
            damage_taken: participant.total_damage_taken,
            damage_dealt: participant.physical_damage_dealt_to_champions
                + participant.magic_damage_dealt_to_champions,
            minions_killed: participant.total_minions_killed,
            gold_earned: participant.gold_earned,
            gold_per_minute: gold_per_minute(participant.gold_earned, duration_secs),
            tower_damage: participant.damage_dealt_to_turrets,
        }
    }
}

/// (deaths + assists) / deaths, counting zero deaths as one.
pub fn kda(deaths: u32, assists: u32) -> f64 {
    f64::from(deaths + assists) / f64::from(deaths.max(1))
}

/// Gold earned per minute of game time.
pub fn gold_per_minute(gold_earned: u32, duration_secs: u64) -> f64 {
    if duration_secs == 0 {
        return 0.0;
    }
    f64::from(gold_earned) / (duration_secs as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant() -> ParticipantDto {
        ParticipantDto {
            champion_name: "Ahri".to_string(),
            kills: 4,
            deaths: 2,
            assists: 9,
            win: true,
            team_id: 100,
            team_position: "MIDDLE".to_string(),
            total_damage_taken: 14230,
            physical_damage_dealt_to_champions: 1200,
            magic_damage_dealt_to_champions: 18500,
            total_minions_killed: 187,
            gold_earned: 11890,
            damage_dealt_to_turrets: 2301,
        }
    }

    #[test]
    fn zero_deaths_substitutes_one_in_kda() {
        assert_eq!(kda(0, 3), 3.0);
        assert_eq!(kda(0, 0), 0.0);
    }

    #[test]
    fn kda_divides_by_actual_deaths() {
        assert_eq!(kda(2, 9), 5.5);
        assert_eq!(kda(4, 0), 1.0);
        assert_eq!(kda(3, 6), 3.0);
    }

    #[test]
    fn damage_dealt_sums_physical_and_magic() {
        let row = StatRow::new("EUW1_1".to_string(), 1800, &participant());
        assert_eq!(row.damage_dealt, 1200 + 18500);
    }

    #[test]
    fn gold_per_minute_keeps_fractions() {
        assert_eq!(gold_per_minute(100, 90), 100.0 / 1.5);
        assert_eq!(gold_per_minute(15000, 1800), 500.0);
        assert_eq!(gold_per_minute(500, 0), 0.0);
    }

    #[test]
    fn row_copies_raw_fields_and_derives_the_rest() {
        let row = StatRow::new("EUW1_1".to_string(), 1800, &participant());

        assert_eq!(row.match_id, "EUW1_1");
        assert_eq!(row.duration_secs, 1800);
        assert_eq!(row.champion, "Ahri");
        assert_eq!(row.kda, 5.5);
        assert!(row.win);
        assert_eq!(row.position, "MIDDLE");
        assert_eq!(row.gold_per_minute, 11890.0 / 30.0);
    }
}
