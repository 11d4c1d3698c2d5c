//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AutoplayStatistics, CorpusReport};
use crate::corpus::Corpus;
use colored::Colorize;

/// Print the categories of a corpus with their word counts
pub fn print_categories(corpus: &Corpus) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATEGORIES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (name, words) in corpus.iter() {
        println!("  📂 {:<30} {:>5} words", name.bright_yellow(), words.len());
    }
    println!(
        "\n  {} categories, {} words",
        corpus.categories().len(),
        corpus.word_count()
    );
}

/// Print the result of a corpus check
pub fn print_check_report(report: &CorpusReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for category in &report.categories {
        let status = if category.has_warnings() {
            "⚠".yellow()
        } else {
            "✓".green()
        };
        println!(
            "\n{status} {} ({} words)",
            category.name.bright_yellow().bold(),
            category.words
        );
        if let Some(longest) = &category.longest {
            println!("   Longest:      {longest}");
        }
        if category.empty > 0 {
            println!(
                "   {}",
                format!("Empty entries: {}", category.empty).red()
            );
        }
        if !category.letterless.is_empty() {
            println!(
                "   {} {}",
                "No letters:".yellow(),
                category.letterless.join(", ")
            );
        }
        if !category.mask_clashes.is_empty() {
            println!(
                "   {} {}",
                "Looks masked:".yellow(),
                category.mask_clashes.join(", ")
            );
        }
        if !category.duplicates.is_empty() {
            println!(
                "   {}  {}",
                "Duplicates:".yellow(),
                category.duplicates.join(", ")
            );
        }
    }

    println!();
    let warnings = report.warning_count();
    if warnings == 0 {
        println!(
            "{}",
            format!("✅ {} words checked, no problems found", report.total_words())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "⚠ {} words checked, {warnings} problem entries",
                report.total_words()
            )
            .yellow()
            .bold()
        );
    }
}

/// Print the statistics of an autoplay run
pub fn print_autoplay_statistics(stats: &AutoplayStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Autoplay Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Words played:        {}", stats.total_words);
    println!(
        "  Won:                 {} {}",
        stats.won,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    if stats.lost > 0 {
        println!("  Lost:                {}", format!("{}", stats.lost).red());
    }
    if stats.stuck > 0 {
        println!("  Solver stuck:        {}", format!("{}", stats.stuck).yellow());
    }
    if stats.skipped > 0 {
        println!("  Skipped entries:     {}", stats.skipped);
    }
    println!(
        "  Average score:       {}",
        format!("{:.1}", stats.average_score).bright_yellow().bold()
    );
    println!("  Average misses:      {:.2}", stats.average_misses);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.won > 0 {
        println!("\n📈 {}", "Misses per Won Round".bright_cyan().bold());
        let max_count = stats.miss_distribution.values().copied().max().unwrap_or(1);
        let mut misses: Vec<usize> = stats.miss_distribution.keys().copied().collect();
        misses.sort_unstable();
        for miss in misses {
            let count = stats.miss_distribution.get(&miss).copied().unwrap_or(0);
            let percentage = count as f64 / stats.won as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {miss:2} misses: {} {count:4} ({percentage:5.1}%)", bar.green());
        }
    }

    if let Some((word, score)) = &stats.best {
        println!("\n🏆 Best round: {} ({score} points)", word.green().bold());
    }

    if !stats.hardest.is_empty() {
        println!("\n🧗 {}", "Hardest Words".bright_cyan().bold());
        for (word, misses) in &stats.hardest {
            println!("  {word:<40} {misses} misses");
        }
    }
}
