//! Compares player policies over many simulated rounds.
//!
//! Policies may be named on the command line (`random`, `threshold-17`,
//! `basic`, ...); the four standard policies are compared otherwise.

#![allow(clippy::missing_docs_in_private_items)]

use std::process::ExitCode;

use bjsim::{Policy, PolicyReport, Rules, SimulationOptions, Simulator};

fn print_report(report: &PolicyReport) {
    let s = &report.summary;
    println!("\n=== {} ===", report.name);
    println!("Games: {}", s.games);
    println!(
        "Wins/Losses/Pushes: {}/{}/{}",
        s.counts.wins(),
        s.counts.losses(),
        s.counts.pushes()
    );
    println!(
        "Win/Loss/Push rates: {:.3} / {:.3} / {:.3}",
        s.win_rate(),
        s.loss_rate(),
        s.push_rate()
    );
    println!(
        "Blackjack/Bust rates: {:.3} / {:.3}",
        s.blackjack_rate(),
        s.bust_rate()
    );
    println!("Total profit: {:.2}", s.total_profit);
    print!("Average profit per game: {:.5}", s.mean_profit);
    match s.confidence_interval(1.96) {
        Some((low, high)) => println!(" (95% CI {low:.5} .. {high:.5})"),
        None => println!(),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let policies: Result<Vec<Policy>, _> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Policy>())
        .collect();
    let policies = match policies {
        Ok(policies) if policies.is_empty() => Policy::STANDARD.to_vec(),
        Ok(policies) => policies,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let rules = Rules::default();
    let options = SimulationOptions::default()
        .with_games(50_000)
        .with_bet(1.0)
        .with_seed(100)
        .with_rules(rules);

    let simulator = match Simulator::new(options) {
        Ok(simulator) => simulator,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Blackjack Monte Carlo Simulation");
    println!(
        "Rules: S17={}, BJ payout={}, bet={}",
        rules.stand_on_soft_17, rules.blackjack_pays, options.bet
    );
    println!("Simulating {} games per policy ...", options.games);

    match simulator.compare(&policies) {
        Ok(comparison) => {
            for report in comparison.reports() {
                print_report(report);
            }
            if let Some(best) = comparison.best() {
                println!("\nBest average profit: {}", best.name);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
