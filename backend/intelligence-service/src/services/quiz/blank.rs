//! Cloze target selection and distractor synthesis

pub const BLANK_MARKER: &str = "______";
pub const DISTRACTOR_COUNT: usize = 3;

const MIN_PROPER_NOUN_CHARS: usize = 4;
const MIN_LONG_WORD_CHARS: usize = 7;

/// Pick the word to blank out, scanning left to right:
/// 1. capitalized alphabetic word longer than 3 characters
/// 2. word containing a digit
/// 3. alphabetic word longer than 6 characters
/// 4. middle word
///
/// Returns `None` only for an empty word list.
pub fn select_blank_word<'a>(words: &[&'a str]) -> Option<&'a str> {
    words
        .iter()
        .find(|word| is_proper_noun(word))
        .or_else(|| words.iter().find(|word| word.chars().any(|c| c.is_ascii_digit())))
        .or_else(|| words.iter().find(|word| is_long_alphabetic(word)))
        .or_else(|| words.get(words.len() / 2))
        .copied()
}

fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

fn is_proper_noun(word: &str) -> bool {
    word.chars().count() >= MIN_PROPER_NOUN_CHARS
        && word.chars().next().is_some_and(char::is_uppercase)
        && is_alphabetic(word)
}

fn is_long_alphabetic(word: &str) -> bool {
    word.chars().count() >= MIN_LONG_WORD_CHARS && is_alphabetic(word)
}

/// Exactly three wrong answers, distinct from each other and from `answer`
pub fn synthesize_distractors(answer: &str) -> Vec<String> {
    let candidates = numeric_distractors(answer).unwrap_or_else(|| text_distractors(answer));

    let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
    for candidate in candidates {
        if candidate != answer && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    }

    let mut placeholder = distractors.len() + 1;
    while distractors.len() < DISTRACTOR_COUNT {
        let filler = format!("Option {placeholder}");
        placeholder += 1;
        if filler != answer && !distractors.contains(&filler) {
            distractors.push(filler);
        }
    }

    distractors
}

/// Neighbours and the double of a purely numeric answer
fn numeric_distractors(answer: &str) -> Option<Vec<String>> {
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let value: i64 = answer.parse().ok()?;
    Some(vec![
        value.checked_sub(1)?.to_string(),
        value.checked_add(1)?.to_string(),
        value.checked_mul(2)?.to_string(),
    ])
}

/// Naive plural, case flip and reversed spelling
fn text_distractors(answer: &str) -> Vec<String> {
    let starts_upper = answer.chars().next().is_some_and(char::is_uppercase);
    let case_flipped = if starts_upper {
        answer.to_lowercase()
    } else {
        capitalize(answer)
    };
    let reversed: String = answer.chars().rev().collect();

    vec![format!("{answer}s"), case_flipped, reversed]
}

/// First character upper-cased, the rest lower-cased
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
