use kompass_core::{AnswerSheet, Choice, QUESTION_COUNT, score};

/// Score a sequence of answers given in question order.
pub fn run(answers: &str, partial: bool) -> Result<(), String> {
    let choices = parse_answers(answers)?;
    let expected = usize::from(QUESTION_COUNT);

    if choices.len() > expected {
        return Err(format!(
            "expected at most {expected} answers, got {}",
            choices.len()
        ));
    }
    if !partial && choices.len() != expected {
        return Err(format!(
            "expected {expected} answers, got {} (use --partial to score an incomplete set)",
            choices.len()
        ));
    }
    if choices.is_empty() {
        return Err("no answers to score".into());
    }

    let sheet = AnswerSheet::from_sequence(choices);
    let report = score(&sheet);
    super::print_report(&report);
    Ok(())
}

/// Parse a compact answer string; whitespace between answers is fine.
fn parse_answers(answers: &str) -> Result<Vec<Choice>, String> {
    answers
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Choice::parse(&c.to_string()).ok_or_else(|| format!("'{c}' is not an answer; use A or B"))
        })
        .collect()
}
