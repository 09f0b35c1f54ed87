use std::io::{self, BufRead, Write};

use colored::Colorize;

use kompass_core::{Choice, MemoryStore, Page, QuizError, QuizFlow};

use crate::questions;

pub fn run() -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    run_with(&mut reader)
}

fn run_with(reader: &mut impl BufRead) -> Result<(), String> {
    let mut flow = QuizFlow::new(MemoryStore::new());

    println!("  {} Kompass", "Starting".bold());
    println!("  Twelve questions, answer A or B. Enter 'q' to quit.\n");

    let mut page = flow.restart();

    loop {
        match page {
            Page::Question(id) => {
                let Some(question) = questions::question(id) else {
                    return Err(format!("no prompt for question {id}"));
                };
                println!("{} {}", format!("Q{id}.").bold(), question.prompt);
                println!("  A) {}", question.option_a);
                println!("  B) {}", question.option_b);

                let Some(choice) = prompt_choice(reader)? else {
                    println!("Left the quiz.");
                    return Ok(());
                };

                page = flow
                    .record_and_advance(id, choice)
                    .map_err(|e| e.to_string())?;
                println!();
            }
            Page::Scoring => match flow.score_and_redirect() {
                Ok((report, destination)) => {
                    super::print_report(&report);
                    page = destination;
                }
                Err(QuizError::MissingAnswers) => {
                    println!(
                        "{}",
                        "Could not load your answers; back to the start.".yellow()
                    );
                    page = Page::Start;
                }
                Err(e) => return Err(e.to_string()),
            },
            Page::Result { .. } => {
                println!("\n  See {}", page.name().bold());
                return Ok(());
            }
            Page::Start => {
                page = flow.restart();
            }
        }
    }
}

/// Read one A/B answer. `None` means the player quit or input ended.
fn prompt_choice(reader: &mut impl BufRead) -> Result<Option<Choice>, String> {
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(None), // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match Choice::parse(input) {
            Some(choice) => return Ok(Some(choice)),
            None => println!("{}", "Answer A or B (or 'q' to quit).".yellow()),
        }
    }
}
