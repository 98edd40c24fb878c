use serde::Serialize;

/// Index-of-coincidence boundary between "reads like natural language" and
/// "reads like ciphertext or noise". Heuristic, fixed; callers can override
/// it through [`analyze_with_threshold`].
pub const DEFAULT_IC_THRESHOLD: f64 = 0.06;

const TOP_LETTERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    LikelyPlaintext,
    LikelyCiphertext,
}

/// Read-only statistics over one text sample.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyReport {
    /// Code points in the sample, letters or not.
    pub total_length: usize,
    /// ASCII letters only; everything else is ignored by the histogram.
    pub letter_count: usize,
    /// Lowercase histogram over the letter subset, count descending,
    /// letter ascending on ties.
    pub letter_frequencies: Vec<(char, usize)>,
    /// First five entries of `letter_frequencies`.
    pub top_letters: Vec<(char, usize)>,
    /// `None` when fewer than two letters were seen.
    pub coincidence_index: Option<f64>,
    pub classification: Classification,
}

pub fn analyze(text: &str) -> FrequencyReport {
    analyze_with_threshold(text, DEFAULT_IC_THRESHOLD)
}

pub fn analyze_with_threshold(text: &str, threshold: f64) -> FrequencyReport {
    let mut total_length = 0usize;
    let mut counts = [0usize; 26];
    for c in text.chars() {
        total_length += 1;
        if c.is_ascii_alphabetic() {
            counts[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
        }
    }
    let letter_count: usize = counts.iter().sum();

    let mut letter_frequencies: Vec<(char, usize)> = counts
        .iter()
        .enumerate()
        .filter(|(_, &n)| n > 0)
        .map(|(i, &n)| ((b'a' + i as u8) as char, n))
        .collect();
    letter_frequencies.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let top_letters: Vec<(char, usize)> =
        letter_frequencies.iter().take(TOP_LETTERS).copied().collect();

    let coincidence_index = if letter_count < 2 {
        None
    } else {
        let n = letter_count as f64;
        let sum: f64 = counts
            .iter()
            .filter(|&&f| f > 1)
            .map(|&f| (f * (f - 1)) as f64)
            .sum();
        Some(sum / (n * (n - 1.0)))
    };

    // An absent index means too little signal to call it plaintext.
    let classification = match coincidence_index {
        Some(ic) if ic > threshold => Classification::LikelyPlaintext,
        _ => Classification::LikelyCiphertext,
    };

    FrequencyReport {
        total_length,
        letter_count,
        letter_frequencies,
        top_letters,
        coincidence_index,
        classification,
    }
}
