use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use lexigraph_core::{LexiconConfig, LexiconEngine};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexigraph", version, about = "Explore relationships between words in a word list")]
struct Cli {
    /// Word list file, one or more words per line, syllables separated by '/'.
    #[arg(long, env = "LEXIGRAPH_WORDS", default_value = lexigraph_core::config::DEFAULT_WORD_FILE)]
    words: PathBuf,

    /// Longest chain rendered before it is cut off.
    #[arg(long, default_value_t = lexigraph_core::config::DEFAULT_MAX_CHAIN_LENGTH)]
    max_chain: usize,

    /// Print statistics as JSON and exit instead of starting the menu.
    #[arg(long)]
    stats_json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = LexiconConfig {
        word_file: cli.words,
        max_chain_length: cli.max_chain,
        ..LexiconConfig::default()
    };

    let (mut engine, report) = LexiconEngine::from_file(config.clone())
        .with_context(|| format!("Unable to open word list '{}'", config.word_file.display()))?;

    if cli.stats_json {
        println!("{}", serde_json::to_string_pretty(&engine.statistics())?);
        return Ok(());
    }

    clear_screen();
    println!("Word Relationship Explorer");
    println!("---------------------------------------------------------------");
    println!(
        "Loaded {} words ({} skipped, {} duplicates removed).",
        report.accepted, report.skipped, report.duplicates_removed
    );
    print_lines(&engine.word_lists());
    wait_for_enter()?;

    loop {
        print_menu();
        let Some(input) = read_line()? else { break };
        let choice = input.trim();
        clear_screen();

        match choice {
            "0" => {
                let word = prompt("Enter a word: ")?;
                clear_screen();
                match engine.word_details(&word) {
                    Ok(details) => print!("{details}"),
                    Err(_) => println!("This word does not exist in the dictionary."),
                }
            }
            "1" => show("Subword Chains", "No subword relationships found.", &engine.subword_chains()),
            "2" => show("Verb Forms (ed/ing)", "No verb forms found.", &engine.verb_forms()),
            "3" => show(
                "Words Formed By Adding One Character",
                "No one-character additions found.",
                &engine.add_one_char_chains(),
            ),
            "4" => show(
                "Lexically Close Words",
                "No lexically close words found.",
                &engine.lexically_close_chains(),
            ),
            "5" => show("Anagrams", "No anagrams found.", &engine.anagram_chains()),
            "6" => {
                let word = prompt("Enter a word to insert (separate syllables with '/'): ")?;
                clear_screen();
                insert_word(&mut engine, &word);
            }
            "7" => {
                let word = prompt("Enter a word to delete: ")?;
                clear_screen();
                delete_word(&mut engine, &word);
            }
            "8" => print_stats(&engine),
            "9" | "exit" => break,
            _ => println!("Invalid choice. Please try again."),
        }

        wait_for_enter()?;
        clear_screen();
        print_lines(&engine.word_lists());
    }

    clear_screen();
    println!("Program terminated.");
    Ok(())
}

fn insert_word(engine: &mut LexiconEngine, word: &str) {
    match engine.insert(word) {
        Ok(_) => match engine.append_to_file(word) {
            Ok(()) => println!(
                "Word successfully added and saved to '{}'.",
                engine.config().word_file.display()
            ),
            Err(e) => {
                log::warn!("Append failed: {e}");
                println!("Word added but failed to save to file.");
            }
        },
        Err(e) => println!("{e}"),
    }
}

fn delete_word(engine: &mut LexiconEngine, word: &str) {
    match engine.delete(word) {
        Ok(()) => match engine.save_all() {
            Ok(()) => println!(
                "Word successfully deleted and changes saved to '{}'.",
                engine.config().word_file.display()
            ),
            Err(e) => {
                log::warn!("Rewrite failed: {e}");
                println!("Word deleted but failed to save changes to file.");
            }
        },
        Err(_) => println!("This word does not exist."),
    }
}

fn print_menu() {
    println!("\n=== Menu Options ===");
    println!("0) Display word details");
    println!("1) Display subword chains");
    println!("2) Display verb forms (ed/ing)");
    println!("3) Display words formed by adding one character");
    println!("4) Display lexically close words");
    println!("5) Display anagrams");
    println!("6) Insert a new word");
    println!("7) Delete a word");
    println!("8) Display statistics");
    println!("9) Exit");
    print!("\nYour choice: ");
    let _ = stdout().flush();
}

fn show(title: &str, empty: &str, lines: &[String]) {
    if lines.is_empty() {
        println!("{empty}");
    } else {
        println!("=== {title} ===\n");
        print_lines(lines);
    }
}

fn print_stats(engine: &LexiconEngine) {
    let stats = engine.statistics();
    println!("=== Statistics ===");
    println!("Total words:                   {}", stats.word_count);
    println!("Subword links created:         {}", stats.subword_links);
    println!("Verb form links created:       {}", stats.verb_form_links);
    println!("Add-one-char links created:    {}", stats.add_one_char_links);
    println!("Lexically close links created: {}", stats.lexically_close_links);
    println!("Anagram links created:         {}", stats.anagram_links);
}

fn print_lines(lines: &[String]) {
    if lines.is_empty() {
        println!("(empty)");
    }
    for line in lines {
        println!("{line}");
    }
}

fn clear_screen() {
    let _ = execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// `None` at end of input.
fn read_line() -> Result<Option<String>> {
    let mut input = String::new();
    let n = stdin().read_line(&mut input).context("Error reading input")?;
    Ok((n > 0).then_some(input))
}

fn prompt(text: &str) -> Result<String> {
    print!("{text}");
    stdout().flush()?;
    Ok(read_line()?.unwrap_or_default().trim().to_string())
}

fn wait_for_enter() -> Result<()> {
    print!("\nPress ENTER to continue...");
    stdout().flush()?;
    read_line()?;
    Ok(())
}
