use anyhow::{bail, Result};

/// English letter frequencies in percent, A..Z
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Index of coincidence of English prose
pub const ENGLISH_IC: f64 = 0.0667;

/// Index of coincidence of uniformly random letters
pub const RANDOM_IC: f64 = 1.0 / 26.0;

const COMMON_BIGRAMS: [&str; 40] = [
    "TH", "HE", "IN", "ER", "AN", "RE", "ND", "AT", "ON", "NT", "HA", "ES", "ST", "EN", "ED", "TO",
    "IT", "OU", "EA", "HI", "IS", "OR", "TI", "AS", "TE", "ET", "NG", "OF", "AL", "DE", "SE", "LE",
    "SA", "SI", "AR", "VE", "RA", "LD", "UR", "NE",
];

fn letters(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

/// Occurrences of each Latin letter, case-insensitive
pub fn letter_counts(text: &str) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for b in letters(text) {
        counts[(b - b'A') as usize] += 1;
    }
    counts
}

/// Probability that two letters drawn without replacement are equal
pub fn index_of_coincidence(text: &str) -> f64 {
    let counts = letter_counts(text);
    let n: usize = counts.iter().sum();
    if n < 2 {
        return 0.0;
    }
    let pairs: usize = counts.iter().map(|&c| c * c.saturating_sub(1)).sum();
    pairs as f64 / (n * (n - 1)) as f64
}

/// Chi-square distance between the text's letter counts and English.
/// Lower is more English-like; text without letters scores infinity.
pub fn chi_square_english(text: &str) -> f64 {
    let counts = letter_counts(text);
    let n: usize = counts.iter().sum();
    if n == 0 {
        return f64::INFINITY;
    }
    counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&observed, &percent)| {
            let expected = n as f64 * percent / 100.0;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Share of adjacent letter pairs that are common English bigrams.
/// Letter frequencies survive transposition; bigrams do not.
pub fn bigram_rate(text: &str) -> f64 {
    let letters = letters(text);
    if letters.len() < 2 {
        return 0.0;
    }
    let hits = letters
        .windows(2)
        .filter(|pair| COMMON_BIGRAMS.iter().any(|b| b.as_bytes() == *pair))
        .count();
    hits as f64 / (letters.len() - 1) as f64
}

/// Frequency report for a piece of text
pub fn run(text: &str) -> Result<String> {
    let counts = letter_counts(text);
    let total: usize = counts.iter().sum();
    if total == 0 {
        bail!("Text contains no Latin letters");
    }

    let ic = index_of_coincidence(text);
    let mut output = String::new();
    output.push_str("Codebreaker Text Statistics\n");
    output.push_str("===========================\n\n");
    output.push_str(&format!("Characters: {}\n", text.chars().count()));
    output.push_str(&format!("Letters: {}\n", total));
    output.push_str(&format!(
        "Index of coincidence: {:.4} (English {:.4}, random {:.4})\n",
        ic, ENGLISH_IC, RANDOM_IC
    ));
    output.push_str(&format!("Chi-square vs English: {:.2}\n", chi_square_english(text)));
    output.push_str(&format!("Common bigram rate: {:.1}%\n", bigram_rate(text) * 100.0));
    output.push_str(&format!("Likely: {}\n\n", interpret_ic(ic)));

    output.push_str("Letter  Count   Text%  English%\n");
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let letter = (b'A' + i as u8) as char;
        let pct = count as f64 * 100.0 / total as f64;
        output.push_str(&format!(
            "  {}     {:>5}  {:>6.2}  {:>8.3} {}\n",
            letter,
            count,
            pct,
            ENGLISH_FREQUENCIES[i],
            "#".repeat((pct / 2.0).round() as usize)
        ));
    }
    Ok(output)
}

fn interpret_ic(ic: f64) -> &'static str {
    let midpoint = (ENGLISH_IC + RANDOM_IC) / 2.0;
    if ic >= midpoint {
        "monoalphabetic (transposition, Caesar, Polybios) or plaintext"
    } else {
        "polyalphabetic (Vigenère, table shift) or random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "Defend the east wall of the castle at dawn and wait there for the reinforcements";

    #[test]
    fn test_letter_counts_ignore_case_and_symbols() {
        let counts = letter_counts("AaB, b! 9");
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 2);
        assert_eq!(counts.iter().sum::<usize>(), 4);
    }

    #[test]
    fn test_index_of_coincidence() {
        assert_eq!(index_of_coincidence("AAAA"), 1.0);
        assert_eq!(index_of_coincidence("ABCD"), 0.0);
        assert_eq!(index_of_coincidence("A"), 0.0);
        let ic = index_of_coincidence(PROSE);
        assert!(ic > 0.06 && ic < 0.1, "ic {}", ic);
    }

    #[test]
    fn test_chi_square_prefers_english() {
        let english = chi_square_english(PROSE);
        let shifted = chi_square_english(&classicrypt::cipher::caesar(PROSE, 7));
        assert!(english < shifted);
        assert_eq!(chi_square_english("1234"), f64::INFINITY);
    }

    #[test]
    fn test_bigram_rate() {
        assert_eq!(bigram_rate("THE"), 1.0);
        assert_eq!(bigram_rate("QZX"), 0.0);
        assert_eq!(bigram_rate("T"), 0.0);
    }

    #[test]
    fn test_report() {
        let report = run(PROSE).unwrap();
        assert!(report.contains("Codebreaker Text Statistics"));
        assert!(report.contains("Letters: 66"));
        assert!(report.contains("monoalphabetic"));
        assert!(run("12345").is_err());
    }
}
