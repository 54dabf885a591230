use crate::Result;
use crate::games::GameRecord;
use crate::reports::Analysis;
use camino::Utf8Path;
use ohno::IntoAppError;
use std::io;

const HEADER: [&str; 8] = [
    "Date",
    "Away Team",
    "Home Team",
    "Away Score",
    "Home Score",
    "First 5 Innings Runs",
    "Total Runs",
    "Criteria",
];

/// Write the matching games (X first, then Y-only) to a CSV file.
pub fn generate(analysis: &Analysis<'_>, path: &Utf8Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).into_app_err_with(|| format!("creating CSV file {path}"))?;
    write_games(analysis, &mut writer)?;
    writer.flush().into_app_err_with(|| format!("flushing CSV file {path}"))?;
    Ok(())
}

fn write_games<W: io::Write>(analysis: &Analysis<'_>, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(HEADER).into_app_err("writing CSV header")?;

    let listings: [(&str, &[&GameRecord]); 2] = [
        ("X", analysis.classification.matches_x()),
        ("Y", analysis.classification.matches_y_only()),
    ];

    for (label, games) in listings {
        for game in games {
            writer
                .write_record([
                    game.date().to_string(),
                    game.away_team().to_string(),
                    game.home_team().to_string(),
                    game.away_score().to_string(),
                    game.home_score().to_string(),
                    game.first_five_runs().to_string(),
                    game.total_runs().to_string(),
                    label.to_string(),
                ])
                .into_app_err("writing CSV row")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{PushPivot, ThresholdSpec, classify, push_breakdown};
    use crate::reports::DataSource;
    use chrono::NaiveDate;

    fn game(name: &str, innings: &[(u32, u32)], away_score: u32, home_score: u32) -> GameRecord {
        GameRecord::new(
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            name,
            "Home",
            away_score,
            home_score,
            innings.iter().copied(),
        )
    }

    fn render(games: &[GameRecord]) -> String {
        let analysis = Analysis {
            season: 2024,
            source: DataSource::Sample,
            total_fetched: games.len(),
            spec_x: ThresholdSpec::criterion_x(),
            spec_y: ThresholdSpec::criterion_y(),
            pivot: PushPivot::default_pivots(),
            classification: classify(games, ThresholdSpec::criterion_x(), ThresholdSpec::criterion_y()),
            push: push_breakdown(games, PushPivot::default_pivots()),
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        write_games(&analysis, &mut writer).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_columns() {
        let output = render(&[]);
        assert_eq!(
            output.lines().next().unwrap(),
            "Date,Away Team,Home Team,Away Score,Home Score,First 5 Innings Runs,Total Runs,Criteria"
        );
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_x_rows_precede_y_rows() {
        let games = vec![
            // Matches Y only: first five 7, total exactly 9.
            game("YOnly", &[(2, 1), (1, 1), (1, 0), (0, 1)], 5, 4),
            // Matches X: first five 8, total 8.
            game("MatchesX", &[(2, 1), (1, 2), (2, 0)], 5, 3),
        ];

        let output = render(&games);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-05-15,MatchesX,Home,5,3,8,8,X");
        assert_eq!(lines[2], "2024-05-15,YOnly,Home,5,4,7,9,Y");
    }

    #[test]
    fn test_unmatched_games_are_not_exported() {
        let games = vec![game("Quiet", &[(0, 0), (0, 1)], 1, 0)];
        let output = render(&games);
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_team_names_with_commas_are_quoted() {
        let games = vec![game("Sox, Red", &[(4, 4)], 4, 4)];
        let output = render(&games);
        assert!(output.contains("\"Sox, Red\""));
    }
}
