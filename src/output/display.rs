//! Display functions for run outcomes

use super::formatters::count_bar;
use crate::commands::{RunError, RunReport};
use colored::Colorize;

/// Print the summary for one processed dictionary.
pub fn print_run_report(run: &RunReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Dictionary: {}", run.source.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!(
        "This dictionary has {} different anagram classes in it.",
        format!("{}", run.stats.class_count).bright_yellow().bold()
    );
    println!("   Words grouped:    {}", run.stats.word_count);
    println!("   Output written:   {}", run.destination.display());
    println!(
        "   Time taken:       {} milliseconds",
        run.duration.as_millis()
    );

    print_class_sizes(run);
}

/// Class-size distribution, largest bar scaled to full width.
fn print_class_sizes(run: &RunReport) {
    if run.stats.class_sizes.is_empty() {
        return;
    }

    println!("\n📈 {}", "Class sizes:".bright_cyan().bold());

    let mut sizes: Vec<(usize, usize)> = run
        .stats
        .class_sizes
        .iter()
        .map(|(&size, &count)| (size, count))
        .collect();
    sizes.sort_unstable();

    let max_count = sizes.iter().map(|&(_, count)| count).max().unwrap_or(1);
    for (size, count) in sizes {
        let bar = count_bar(count, max_count, 40);
        let label = if size == 1 { "word " } else { "words" };
        println!("   {size:3} {label}: {} {count:5}", bar.green());
    }
}

/// Print the failure notice for one dictionary.
///
/// Names the error kind and the source or destination that failed; the
/// batch carries on afterwards.
pub fn print_run_failure(error: &RunError) {
    eprintln!("{} {error}", "✗".red().bold());
}
