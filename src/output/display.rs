//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar};
use crate::commands::{AnalysisResult, FilterResult, SolveResult, SuggestResult};
use crate::core::{Pattern, Word};
use crate::solver::{Preset, SolverConfig, Suggestion};
use colored::Colorize;

/// Print a simulated feedback pattern
pub fn print_pattern(guess: &Word, target: &Word, pattern: Pattern) {
    println!(
        "{}  {}  {} → {}",
        colored_guess(guess, pattern),
        pattern.to_string().bright_white().bold(),
        guess,
        target
    );
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}  ({})",
                step.candidates_before, step.candidates_after, step.phase
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not solved in {} guesses ({})",
                result.guesses.len(),
                result.outcome
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({} distinct patterns)",
        metrics.max_partition, metrics.partitions
    );
    println!("   Frequency:   {:.3}", result.statistical);
    if result.is_candidate {
        println!("   {}", "Could be the answer".green());
    }
}

/// Print the next suggestion
pub fn print_suggestion(result: &SuggestResult) {
    match &result.suggestion {
        Suggestion::Guess(rec) => {
            println!(
                "\n{} {}",
                "Next guess:".bright_cyan().bold(),
                rec.word.text().bright_yellow().bold()
            );
            println!(
                "   Phase:       {}{}",
                rec.phase,
                if rec.complete { "" } else { " (partial scan)" }
            );
            if let Some(score) = rec.score {
                println!("   Score:       {score:.3}");
            }
            if let Some(metrics) = &result.metrics {
                println!(
                    "   Entropy:     {:.3} bits, worst case {} left",
                    metrics.entropy, metrics.max_partition
                );
            }
            println!("   Took:        {:.1?}", result.elapsed);
        }
        Suggestion::Solved(word) => {
            println!("{}", format!("✅ Solved: {word}").green().bold());
        }
        Suggestion::Impossible => {
            println!(
                "{}",
                "❌ No answer matches that feedback; check the entered patterns"
                    .red()
                    .bold()
            );
        }
        Suggestion::Exhausted => {
            println!("{}", "❌ Out of guesses".red().bold());
        }
    }

    if !matches!(result.suggestion, Suggestion::Impossible) {
        print_word_preview(&result.candidates, result.total_candidates);
    }
}

/// Print the candidates left after filtering
pub fn print_filter_result(result: &FilterResult) {
    println!(
        "\n{} {} of {} ({:.2} bits known)",
        "Candidates:".bright_cyan().bold(),
        result.candidates.len(),
        result.pool_size,
        result.information_gained()
    );
    for chunk in result.candidates.chunks(10) {
        let line: Vec<&str> = chunk.iter().map(Word::text).collect();
        println!("   {}", line.join(" "));
    }
}

/// Print the stock presets and their values
pub fn print_presets(active: Preset) {
    for preset in Preset::ALL {
        let marker = if preset == active { "*" } else { " " };
        println!("\n{marker} {}", preset.name().bright_cyan().bold());
        print_config(&preset.config());
    }
}

fn print_config(config: &SolverConfig) {
    println!("   strategy:              {}", config.strategy());
    println!("   candidate pool cap:    {}", config.candidate_pool_cap());
    println!("   endgame threshold:     {}", config.endgame_threshold());
    println!("   max candidates scored: {}", config.max_candidates_scored());
    println!("   fallback:              {:?}", config.fallback());
    println!(
        "   look-ahead:            depth {}, width {}",
        config.lookahead_depth(),
        config.lookahead_width()
    );
    println!("   candidate epsilon:     {}", config.candidate_epsilon());
    println!("   max guesses:           {}", config.max_guesses());
    println!("   opening book:          {}", config.use_opening_book());
    if let Some(bits) = config.early_exit_entropy() {
        println!("   early exit:            {bits} bits");
    }
    if let Some(budget) = config.time_budget() {
        println!("   time budget:           {budget:?}");
    }
}

fn print_word_preview(words: &[Word], total: usize) {
    if words.is_empty() {
        return;
    }
    let shown: Vec<&str> = words.iter().map(Word::text).collect();
    let more = total.saturating_sub(words.len());
    if more > 0 {
        println!("   Candidates:  {} … and {more} more", shown.join(" "));
    } else {
        println!("   Candidates:  {}", shown.join(" "));
    }
}
