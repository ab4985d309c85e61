use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::info;

use crate::error::AppError;
use crate::stats::StatRow;

/// Localized column headers, one per [`StatRow`] field.
const HEADERS: [&str; 16] = [
    "ID GRY",
    "CZAS GRY",
    "CHAMPION",
    "ZABOJSTWA",
    "SMIERCI",
    "ASYSTY",
    "KDA",
    "CZY_WYGRANA",
    "DRUZYNA",
    "POZYCJA",
    "OBRAZENIA PRZYJETE",
    "OBRAZENIA ZADANE",
    "ZABITE STWORY",
    "ZDOBYTE ZŁOTO",
    "ZŁOTO NA MIN",
    "OBRAŻENIA DO WIEŻ",
];

/// Write all rows to a single worksheet: one header row, then one row per
/// match in processing order, every cell a string.
pub fn write_workbook(path: &Path, rows: &[StatRow]) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Matches")?;

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    grid.push(HEADERS.iter().map(|h| h.to_string()).collect());
    grid.extend(rows.iter().map(row_cells));
    write_rows(sheet, &grid)?;

    workbook.save(path)?;
    info!(rows = rows.len(), path = %path.display(), "workbook written");
    Ok(())
}

fn row_cells(row: &StatRow) -> Vec<String> {
    vec![
        row.match_id.clone(),
        row.duration_secs.to_string(),
        row.champion.clone(),
        row.kills.to_string(),
        row.deaths.to_string(),
        row.assists.to_string(),
        row.kda.to_string(),
        row.win.to_string(),
        row.team_id.to_string(),
        row.position.clone(),
        row.damage_taken.to_string(),
        row.damage_dealt.to_string(),
        row.minions_killed.to_string(),
        row.gold_earned.to_string(),
        row.gold_per_minute.to_string(),
        row.tower_damage.to_string(),
    ]
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<(), AppError> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32, col_idx as u16, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> StatRow {
        StatRow {
            match_id: "EUW1_1".to_string(),
            duration_secs: 1800,
            champion: "Ahri".to_string(),
            kills: 4,
            deaths: 2,
            assists: 9,
            kda: 5.5,
            win: true,
            team_id: 100,
            position: "MIDDLE".to_string(),
            damage_taken: 14230,
            damage_dealt: 19700,
            minions_killed: 187,
            gold_earned: 11890,
            gold_per_minute: 396.3,
            tower_damage: 2301,
        }
    }

    #[test]
    fn every_field_gets_a_cell() {
        let cells = row_cells(&sample_row());

        assert_eq!(cells.len(), HEADERS.len());
        assert_eq!(cells[0], "EUW1_1");
        assert_eq!(cells[6], "5.5");
        assert_eq!(cells[7], "true");
        assert_eq!(cells[14], "396.3");
    }

    #[test]
    fn writes_workbook_to_disk() {
        let path = std::env::temp_dir().join("matchlog_export_test.xlsx");
        write_workbook(&path, &[sample_row()]).unwrap();

        let written = std::fs::metadata(&path).unwrap();
        assert!(written.len() > 0);
        std::fs::remove_file(&path).ok();
    }
}
