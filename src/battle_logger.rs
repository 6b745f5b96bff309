use crate::battle::{RoundOutcome, RoundReport};
use serde_json::json;

/// Collects a Showdown-style protocol log of every round played.
#[derive(Clone, Debug, Default)]
pub struct BattleLogger {
    formatid: String,
    log: Vec<String>,
}

impl BattleLogger {
    pub fn new() -> Self {
        Self::new_with_format("pokeballarena")
    }

    pub fn new_with_format(formatid: impl Into<String>) -> Self {
        Self {
            formatid: formatid.into(),
            log: Vec::new(),
        }
    }

    pub fn log_round(&mut self, round: u32) {
        self.log.push(format!("|round|{round}"));
    }

    pub fn log_switch(&mut self, ident: &str, species: &str) {
        self.log.push(format!("|switch|{ident}|{species}"));
    }

    pub fn log_win(&mut self, winner: &str) {
        self.log.push(format!("|win|{winner}"));
    }

    pub fn log_tie(&mut self) {
        self.log.push("|tie|".to_string());
    }

    pub fn log_no_contest(&mut self) {
        self.log.push("|nocontest|".to_string());
    }

    /// Appends the full line set for one finished round.
    pub fn log_report(&mut self, round: u32, report: &RoundReport, trainer_a: &str, trainer_b: &str) {
        self.log_round(round);
        self.log_switch(&showdown_ident(0, &report.pokemon_a), &report.species_a);
        self.log_switch(&showdown_ident(1, &report.pokemon_b), &report.species_b);
        match report.outcome {
            RoundOutcome::AWins => self.log_win(trainer_a),
            RoundOutcome::BWins => self.log_win(trainer_b),
            RoundOutcome::Draw => self.log_tie(),
            RoundOutcome::NoContest => self.log_no_contest(),
        }
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "formatid": self.formatid,
            "log": self.log,
        })
    }
}

pub fn showdown_ident(side_idx: usize, name: &str) -> String {
    let side = if side_idx == 0 { "p1a" } else { "p2a" };
    format!("{side}: {name}")
}
