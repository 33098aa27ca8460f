//! Display functions for command results

use super::formatters::{NO_LADDER_MESSAGE, create_progress_bar, format_ladder, format_path};
use crate::commands::{BenchmarkResult, DistanceReport, LadderReport, PathsReport, VerifyReport};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_ladder_result(report: &LadderReport, show_stats: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        report.start.to_lowercase().bright_yellow().bold(),
        report.end.to_lowercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &report.outcome {
        Ok(ladder) => {
            println!("\nWord ladder found: {}", format_ladder(ladder.words()));
            println!(
                "{}",
                format!("✅ {} words, {} steps", ladder.len(), ladder.steps())
                    .green()
                    .bold()
            );
        }
        Err(err) => {
            println!("\n{}", NO_LADDER_MESSAGE.red().bold());
            println!(
                "   Cannot create word ladder from {} to {}: {err}",
                report.start, report.end
            );
        }
    }

    if show_stats {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Expanded:      {}", report.stats.expanded);
        println!("   Enqueued:      {}", report.stats.enqueued);
        println!("   Peak frontier: {}", report.stats.max_frontier);
        println!(
            "   Time taken:    {:.3}ms",
            report.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the result of comparing two words
pub fn print_distance_result(report: &DistanceReport) {
    println!(
        "\n{} ↔ {}",
        report.first.bright_yellow().bold(),
        report.second.bright_yellow().bold()
    );
    println!("   Edit distance: {}", report.distance);

    let verdict = if report.within {
        format!("within {}", report.max_dist).green()
    } else {
        format!("more than {}", report.max_dist).red()
    };
    println!("   Bound check:   {verdict}");
}

/// Print the result of the self-check cases
pub fn print_verify_result(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LADDER SELF-CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in &report.results {
        let status = if result.passed {
            "passed".green()
        } else {
            "failed".red()
        };
        println!(
            "\n  {} → {} (expected {}, got {}) {status}",
            result.case.start,
            result.case.end,
            result.case.expected_len,
            result.ladder.len()
        );
        if result.ladder.is_empty() {
            if let Some(error) = &result.error {
                println!("     {}", error.bright_black());
            }
        } else {
            println!("     {}", format_ladder(&result.ladder));
        }
    }

    println!(
        "\n{} passed, {} failed",
        report.passed().to_string().green().bold(),
        report.failed().to_string().red().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.found).green()
    );
    println!(
        "   No ladder:        {}",
        format!("{}", result.not_found).yellow()
    );
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length)
            .bright_yellow()
            .bold()
    );
    println!("   Longest ladder:   {}", result.max_length);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Ladder lengths:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.distribution.iter().collect();
    lengths.sort_unstable();
    for (&length, &count) in lengths {
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print Dijkstra routes, one line per destination
pub fn print_paths_result(report: &PathsReport) {
    println!(
        "\n{} {}",
        "Shortest paths from vertex".bright_cyan().bold(),
        report.source.to_string().bright_yellow().bold()
    );

    for route in &report.routes {
        match route.cost {
            Some(cost) => {
                println!("{}", format_path(&route.path));
                println!("Total cost is {cost}");
            }
            None => {
                println!("{}", format!("{} unreachable", route.destination).bright_black());
            }
        }
    }
}
