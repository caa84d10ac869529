//! Plain-text rendering of a tournament report.

use crate::models::{MatchResult, Tournament, TournamentReport};
use std::fmt::Write;

fn match_line(m: &MatchResult) -> String {
    format!("{} - {} ({})", m.team_a_name, m.team_b_name, m.score_line())
}

/// Render a report as text. Team names are resolved through the tournament's arena.
pub fn render_text(tournament: &Tournament, report: &TournamentReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, tournament, report);
    out
}

fn write_report(out: &mut String, t: &Tournament, report: &TournamentReport) -> std::fmt::Result {
    writeln!(out, "Group stage results:")?;
    for group in &report.group_results {
        writeln!(out, "  Group {}:", group.group)?;
        for m in &group.matches {
            writeln!(out, "    {} - {} ({})", m.team_a_name, m.team_b_name, m.score)?;
        }
    }

    writeln!(out, "\nFinal group standings:")?;
    for group in &report.standings {
        writeln!(out, "  Group {}:", group.group)?;
        for (i, team) in group.teams.iter().enumerate() {
            writeln!(
                out,
                "    {}. {} - {} pts ({}/{}, {:+}) - FIBA rank {}",
                i + 1,
                team.name,
                team.record.points,
                team.record.wins,
                team.record.losses,
                team.record.point_difference,
                team.ranking
            )?;
        }
    }

    if let Some(pots) = &report.pots {
        writeln!(out, "\nPots:")?;
        for (pot, teams) in pots.iter() {
            let names: Vec<&str> = teams.iter().map(|id| t.team_name(*id)).collect();
            writeln!(out, "  Pot {}: {}", pot, names.join(", "))?;
        }
    }

    if !report.knockout.is_empty() {
        let k = &report.knockout;
        writeln!(out, "\nQuarter-finals:")?;
        for (i, m) in k.quarter_finals.iter().enumerate() {
            writeln!(out, "  QF {}: {}", i + 1, match_line(m))?;
        }
        writeln!(out, "\nSemi-finals:")?;
        for (i, m) in k.semi_finals.iter().enumerate() {
            writeln!(out, "  SF {}: {}", i + 1, match_line(m))?;
        }
        for m in &k.bronze_match {
            writeln!(out, "\nBronze match: {}", match_line(m))?;
        }
        for m in &k.final_match {
            writeln!(out, "Final: {}", match_line(m))?;
        }
    }

    if let Some(medals) = &report.medals {
        writeln!(out, "\nMedals:")?;
        writeln!(out, "  1. {}", t.team_name(medals.gold))?;
        writeln!(out, "  2. {}", t.team_name(medals.silver))?;
        writeln!(out, "  3. {}", t.team_name(medals.bronze))?;
    }

    if !report.issues.is_empty() {
        writeln!(out, "\nIssues:")?;
        for issue in &report.issues {
            writeln!(out, "  [{:?}] {}", issue.stage, issue.error)?;
        }
    }
    if let Some(stage) = report.halted_at {
        writeln!(out, "\nStopped at {:?}; later stages were not played.", stage)?;
    }
    Ok(())
}
