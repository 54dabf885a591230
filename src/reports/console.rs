use crate::Result;
use crate::criteria::{PushBucket, Relation, ThresholdSpec};
use crate::games::{GameRecord, InningLine};
use crate::reports::Analysis;
use core::fmt::Write;
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;
use terminal_size::{Width, terminal_size};

const DEFAULT_TERMINAL_WIDTH: usize = 120;

/// Maximum number of games listed in detail per criterion.
const MAX_LISTED_GAMES: usize = 10;

pub fn generate<W: Write>(analysis: &Analysis<'_>, use_colors: bool, writer: &mut W) -> Result<()> {
    ConsoleReporter {
        writer,
        use_colors,
        width: terminal_width(),
    }
    .generate_report(analysis)
}

struct ConsoleReporter<'a, W: Write> {
    writer: &'a mut W,
    use_colors: bool,
    width: usize,
}

impl<W: Write> ConsoleReporter<'_, W> {
    fn generate_report(&mut self, analysis: &Analysis<'_>) -> Result<()> {
        self.write_title("MLB Run Distribution Report")?;
        self.write_summary(analysis)?;
        self.write_criteria(analysis)?;
        self.write_matches(analysis)?;
        self.write_push_grid(analysis)?;
        self.write_game_listing("Criteria X games", analysis.classification.matches_x())?;
        self.write_game_listing("Criteria Y games (not matching X)", analysis.classification.matches_y_only())?;
        Ok(())
    }

    fn write_title(&mut self, title: &str) -> Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{}", title.bold())?;
        } else {
            writeln!(self.writer, "{title}")?;
        }

        let rule_width = title.len().min(self.width);
        writeln!(self.writer, "{}", "═".repeat(rule_width))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_heading(&mut self, heading: &str) -> Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{}", heading.bold())?;
        } else {
            writeln!(self.writer, "{heading}")?;
        }
        Ok(())
    }

    fn write_summary(&mut self, analysis: &Analysis<'_>) -> Result<()> {
        writeln!(self.writer, "Season     : {}", analysis.season)?;
        writeln!(self.writer, "Data source: {}", analysis.source)?;
        writeln!(
            self.writer,
            "Games      : {} fetched, {} with inning data",
            analysis.total_fetched,
            analysis.classification.classified_count()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_criteria(&mut self, analysis: &Analysis<'_>) -> Result<()> {
        self.write_heading("Criteria")?;
        writeln!(self.writer, "  X: {}", describe_spec(analysis.spec_x))?;
        writeln!(
            self.writer,
            "  Y: {} (games also matching X are reported under X)",
            describe_spec(analysis.spec_y)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_matches(&mut self, analysis: &Analysis<'_>) -> Result<()> {
        let c = &analysis.classification;
        let total = analysis.total_fetched;

        self.write_heading("Matches")?;
        writeln!(
            self.writer,
            "  Criteria X     : {:>5} ({:.1}%)",
            c.matches_x().len(),
            percentage(c.matches_x().len(), total)
        )?;
        writeln!(
            self.writer,
            "  Criteria Y only: {:>5} ({:.1}%)",
            c.matches_y_only().len(),
            percentage(c.matches_y_only().len(), total)
        )?;
        writeln!(
            self.writer,
            "  Unmatched      : {:>5} ({:.1}%)",
            c.unmatched().len(),
            percentage(c.unmatched().len(), total)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_push_grid(&mut self, analysis: &Analysis<'_>) -> Result<()> {
        self.write_heading(&format!(
            "Push breakdown (first five vs {}, total vs {})",
            analysis.pivot.first5_pivot(),
            analysis.pivot.total_pivot()
        ))?;

        write!(self.writer, "  {:<12}", "")?;
        for total_rel in Relation::iter() {
            write!(
                self.writer,
                "{:>12}",
                format!("total {} {}", relation_symbol(total_rel), analysis.pivot.total_pivot())
            )?;
        }
        writeln!(self.writer)?;

        for first_five in Relation::iter() {
            write!(
                self.writer,
                "  {:<12}",
                format!("first5 {} {}", relation_symbol(first_five), analysis.pivot.first5_pivot())
            )?;
            for total in Relation::iter() {
                let count = analysis.push.count(PushBucket { first_five, total });
                write!(self.writer, "{count:>12}")?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn write_game_listing(&mut self, heading: &str, games: &[&GameRecord]) -> Result<()> {
        if games.is_empty() {
            return Ok(());
        }

        let shown = games.len().min(MAX_LISTED_GAMES);
        if shown < games.len() {
            self.write_heading(&format!("{heading} (showing {shown} of {})", games.len()))?;
        } else {
            self.write_heading(&format!("{heading} ({shown})"))?;
        }

        for game in &games[..shown] {
            let line = format!(
                "  {}  {} {} @ {} {}  (first five: {}, total: {}, innings: {})",
                game.date(),
                game.away_team(),
                game.away_score(),
                game.home_team(),
                game.home_score(),
                game.first_five_runs(),
                game.total_runs(),
                inning_line(game.innings()),
            );
            writeln!(self.writer, "{}", truncated(&line, self.width))?;
        }

        writeln!(self.writer)?;
        Ok(())
    }
}

fn describe_spec(spec: ThresholdSpec) -> String {
    format!(
        "first five innings >= {} runs and total runs {} {}",
        spec.first5_minimum(),
        spec.total_op(),
        spec.total_threshold()
    )
}

const fn relation_symbol(relation: Relation) -> char {
    match relation {
        Relation::Below => '<',
        Relation::Equal => '=',
        Relation::Above => '>',
    }
}

/// Combined runs per inning, space separated.
fn inning_line(innings: &[InningLine]) -> String {
    innings
        .iter()
        .map(|inning| inning.combined_runs().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[expect(clippy::cast_precision_loss, reason = "game counts are far below 2^52")]
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { count as f64 / total as f64 * 100.0 }
}

fn truncated(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((offset, _)) => &line[..offset],
        None => line,
    }
}

fn terminal_width() -> usize {
    terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| w as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{PushPivot, classify, push_breakdown};
    use crate::reports::DataSource;
    use crate::schedule::sample_games;

    fn sample_analysis(games: &[GameRecord]) -> Analysis<'_> {
        Analysis {
            season: 2024,
            source: DataSource::Sample,
            total_fetched: games.len(),
            spec_x: ThresholdSpec::criterion_x(),
            spec_y: ThresholdSpec::criterion_y(),
            pivot: PushPivot::default_pivots(),
            classification: classify(games, ThresholdSpec::criterion_x(), ThresholdSpec::criterion_y()),
            push: push_breakdown(games, PushPivot::default_pivots()),
        }
    }

    #[test]
    fn test_report_counts_and_percentages() {
        let games = sample_games();
        let analysis = sample_analysis(&games);

        let mut output = String::new();
        generate(&analysis, false, &mut output).unwrap();

        assert!(output.contains("Season     : 2024"));
        assert!(output.contains("built-in sample data"));
        assert!(output.contains("50 fetched, 50 with inning data"));
        assert!(output.contains("Criteria X     :    50 (100.0%)"));
        assert!(output.contains("Criteria Y only:     0 (0.0%)"));
    }

    #[test]
    fn test_report_lists_at_most_ten_games() {
        let games = sample_games();
        let analysis = sample_analysis(&games);

        let mut output = String::new();
        generate(&analysis, false, &mut output).unwrap();

        assert!(output.contains("Criteria X games (showing 10 of 50)"));
        let listed = output.matches("Boston Red Sox").count() + output.matches("Chicago Cubs").count();
        assert_eq!(listed, 10);
    }

    #[test]
    fn test_percentages_use_raw_fetched_count() {
        // One game was fetched without inning data, so it is classified
        // nowhere but still inflates the denominator.
        let games = sample_games();
        let mut analysis = sample_analysis(&games);
        analysis.total_fetched = 100;

        let mut output = String::new();
        generate(&analysis, false, &mut output).unwrap();
        assert!(output.contains("Criteria X     :    50 (50.0%)"));
    }

    #[test]
    fn test_push_grid_has_nine_cells() {
        let games = sample_games();
        let analysis = sample_analysis(&games);

        let mut output = String::new();
        generate(&analysis, false, &mut output).unwrap();

        assert!(output.contains("Push breakdown (first five vs 6, total vs 9)"));
        for row in ["first5 < 6", "first5 = 6", "first5 > 6"] {
            assert!(output.contains(row));
        }
        // Both sample games are above the first-five pivot and below the
        // total pivot.
        let above_row = output.lines().find(|l| l.contains("first5 > 6")).unwrap();
        assert!(above_row.contains("50"));
    }

    #[test]
    fn test_empty_corpus_reports_zero_percentages() {
        let games: Vec<GameRecord> = Vec::new();
        let analysis = sample_analysis(&games);

        let mut output = String::new();
        generate(&analysis, false, &mut output).unwrap();
        assert!(output.contains("Criteria X     :     0 (0.0%)"));
    }
}
