//! The fixed question set rendered by the interactive flow.
//!
//! The engine only sees question ids; the prompt texts live here, the way
//! the original question pages sat outside the scoring script. Option A
//! always leans toward the dimension's first letter, option B toward the
//! second.

/// One question prompt with its two options.
pub struct Question {
    /// The prompt shown above the options.
    pub prompt: &'static str,
    /// Text for option A.
    pub option_a: &'static str,
    /// Text for option B.
    pub option_b: &'static str,
}

/// The prompt for a question id, if it is part of the fixed set.
pub fn question(id: u8) -> Option<&'static Question> {
    QUESTIONS.get(usize::from(id).checked_sub(1)?)
}

/// The twelve prompts in page order.
///
/// q1/q5/q9 probe E/I, q2/q6/q10 S/N, q3/q7/q11 T/F, q4/q8/q12 J/P.
const QUESTIONS: [Question; 12] = [
    Question {
        prompt: "A free evening opens up unexpectedly. You...",
        option_a: "call someone and make plans",
        option_b: "enjoy the quiet at home",
    },
    Question {
        prompt: "When you pick up a new device, you first...",
        option_a: "read what each button actually does",
        option_b: "imagine what you could do with it",
    },
    Question {
        prompt: "A friend shows you a half-finished project. You...",
        option_a: "point out what is broken first",
        option_b: "say what you like about it first",
    },
    Question {
        prompt: "Before a trip, your itinerary is...",
        option_a: "booked and printed",
        option_b: "a rough list of maybes",
    },
    Question {
        prompt: "The group suddenly changes its plans. You...",
        option_a: "talk it through with whoever is nearby",
        option_b: "step back and think it over alone",
    },
    Question {
        prompt: "Instructions are most useful when they...",
        option_a: "spell out every step",
        option_b: "sketch the idea and let you fill the gaps",
    },
    Question {
        prompt: "Two colleagues disagree. You first...",
        option_a: "weigh whose argument holds up",
        option_b: "check how each of them is feeling",
    },
    Question {
        prompt: "A deadline two weeks away means...",
        option_a: "a schedule starting today",
        option_b: "plenty of time, for now",
    },
    Question {
        prompt: "After a long week you recharge by...",
        option_a: "going out with people",
        option_b: "keeping the weekend to yourself",
    },
    Question {
        prompt: "You trust conclusions that come from...",
        option_a: "what you have seen work before",
        option_b: "patterns nobody has tried yet",
    },
    Question {
        prompt: "A rule that feels unfair should be...",
        option_a: "applied evenly anyway",
        option_b: "bent for the person in front of you",
    },
    Question {
        prompt: "Your desk right now is...",
        option_a: "cleared, everything in its place",
        option_b: "an organized mess only you can read",
    },
];
