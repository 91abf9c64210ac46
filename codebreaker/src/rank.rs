use crate::stats::{bigram_rate, chi_square_english};
use anyhow::{bail, Result};
use classicrypt::bulk::{bulk_decrypt, BulkCandidate, BulkOutcome};
use classicrypt::Method;
use std::cmp::Ordering;
use tracing::debug;

/// A bulk candidate with its English-likeness scores
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub param: i64,
    pub text: String,
    pub chi_square: f64,
    pub bigram_rate: f64,
}

impl ScoredCandidate {
    fn new(candidate: BulkCandidate) -> Self {
        Self {
            chi_square: chi_square_english(&candidate.text),
            bigram_rate: bigram_rate(&candidate.text),
            param: candidate.param,
            text: candidate.text,
        }
    }
}

/// Substitution candidates differ in letter frequencies, so they are ordered
/// by chi-square. Transposition keeps the frequencies, so rail fence
/// candidates are ordered by bigram rate instead.
fn compare(method: Method, a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    match method {
        Method::RailFence => b.bigram_rate.total_cmp(&a.bigram_rate),
        _ => a.chi_square.total_cmp(&b.chi_square),
    }
    .then(a.param.cmp(&b.param))
}

/// Bulk-decrypt `text` and order the candidates, most English-like first
pub fn rank_candidates(method: Method, text: &str) -> Result<(String, Vec<ScoredCandidate>)> {
    let report = match bulk_decrypt(method, text) {
        BulkOutcome::Report(report) => report,
        BulkOutcome::Unsupported(method) => {
            bail!("{} (method: {})", classicrypt::bulk::UNSUPPORTED_MESSAGE, method.name())
        }
    };

    let label = report.label.to_string();
    let mut scored: Vec<ScoredCandidate> = report
        .candidates
        .into_iter()
        .map(ScoredCandidate::new)
        .collect();
    scored.sort_by(|a, b| compare(method, a, b));
    if let Some(best) = scored.first() {
        debug!(method = method.name(), best = best.param, "ranked candidates");
    }
    Ok((label, scored))
}

/// Ranked report limited to the `top` best candidates
pub fn run(method: Method, text: &str, top: usize) -> Result<String> {
    let (label, scored) = rank_candidates(method, text)?;

    let mut output = String::new();
    output.push_str("Codebreaker Ranking\n");
    output.push_str("===================\n\n");
    output.push_str(&format!("Method: {}\n", method));
    output.push_str(&format!(
        "Scored by: {}\n\n",
        match method {
            Method::RailFence => "common bigram rate (higher is better)",
            _ => "chi-square vs English letter frequencies (lower is better)",
        }
    ));
    for (rank, candidate) in scored.iter().take(top.max(1)).enumerate() {
        output.push_str(&format!(
            "#{:<2} {} {:<2}  chi2 {:>8.2}  bigrams {:>5.1}%  {}\n",
            rank + 1,
            label,
            candidate.param,
            candidate.chi_square,
            candidate.bigram_rate * 100.0,
            candidate.text
        ));
    }
    Ok(output)
}
