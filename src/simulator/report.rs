//! Simulation report generation.

use crate::character::attributes::StatVector;

/// Counters collected during one simulated run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub battles: u32,
    pub wins: u32,
    pub battles_timed_out: u32,
    pub final_win_streak: u32,
    pub money_earned: u64,
    pub skills_taken: u32,
    /// Attacks by either side, evaded or not.
    pub attacks: u64,
    pub evasions: u64,
    pub crits: u64,
    pub final_stats: StatVector,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub runs: u32,
    pub total_battles: u64,
    pub avg_win_streak: f64,
    pub max_win_streak: u32,
    /// Attacks per battle, both sides counted.
    pub avg_turns_per_battle: f64,
    pub win_rate: f64,
    /// Critical hits among attacks that landed.
    pub crit_rate: f64,
    pub evasion_rate: f64,
    pub avg_money_earned: f64,
    pub run_stats: Vec<RunStats>,
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u64;
        let total_battles: u64 = runs.iter().map(|r| r.battles as u64).sum();
        let total_wins: u64 = runs.iter().map(|r| r.wins as u64).sum();
        let total_attacks: u64 = runs.iter().map(|r| r.attacks).sum();
        let total_evasions: u64 = runs.iter().map(|r| r.evasions).sum();
        let total_crits: u64 = runs.iter().map(|r| r.crits).sum();
        let streak_sum: u64 = runs.iter().map(|r| r.final_win_streak as u64).sum();
        let money_sum: u64 = runs.iter().map(|r| r.money_earned).sum();

        Self {
            runs: num_runs as u32,
            total_battles,
            avg_win_streak: ratio(streak_sum, num_runs),
            max_win_streak: runs.iter().map(|r| r.final_win_streak).max().unwrap_or(0),
            avg_turns_per_battle: ratio(total_attacks, total_battles),
            win_rate: ratio(total_wins, total_battles),
            crit_rate: ratio(total_crits, total_attacks - total_evasions),
            evasion_rate: ratio(total_evasions, total_attacks),
            avg_money_earned: ratio(money_sum, num_runs),
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    ARENA SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, battles: {}\n\n",
            self.runs, self.total_battles
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Win Streak:      {:.1}\n",
            self.avg_win_streak
        ));
        report.push_str(&format!("  Max Win Streak:      {}\n", self.max_win_streak));
        report.push_str(&format!(
            "  Avg Money Earned:    {:.0}\n\n",
            self.avg_money_earned
        ));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Win Rate:            {:.1}%\n",
            self.win_rate * 100.0
        ));
        report.push_str(&format!(
            "  Turns per Battle:    {:.1}\n",
            self.avg_turns_per_battle
        ));
        report.push_str(&format!(
            "  Crit Rate:           {:.1}%\n",
            self.crit_rate * 100.0
        ));
        report.push_str(&format!(
            "  Evasion Rate:        {:.1}%\n",
            self.evasion_rate * 100.0
        ));

        report
    }

    /// One line for `--quiet` output.
    pub fn summary_line(&self) -> String {
        format!(
            "runs={} battles={} avg_streak={:.1} max_streak={} win_rate={:.3} crit={:.3} evade={:.3}",
            self.runs,
            self.total_battles,
            self.avg_win_streak,
            self.max_win_streak,
            self.win_rate,
            self.crit_rate,
            self.evasion_rate
        )
    }
}
