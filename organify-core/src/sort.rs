//! Natural-order sorting for photo filenames.

use std::cmp::Ordering;

/// One run of a filename: either a stretch of non-digits (compared
/// case-insensitively) or a stretch of digits (compared as an integer).
#[derive(Debug, Clone, PartialEq, Eq)]
enum Run {
    Text(String),
    Number(u128),
}

impl Ord for Run {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            // Keys always alternate starting with a (possibly empty) text
            // run, so mismatched variants only appear when one key is a
            // prefix of the other; order numbers first for determinism.
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Run {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for natural ordering: `img2` sorts before `img10`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Run>);

pub fn natural_key(name: &str) -> NaturalKey {
    let mut runs = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for ch in name.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                runs.push(Run::Text(std::mem::take(&mut text)));
                runs.push(parse_number(&std::mem::take(&mut digits)));
            }
            text.extend(ch.to_lowercase());
        }
    }
    if !digits.is_empty() {
        runs.push(Run::Text(std::mem::take(&mut text)));
        runs.push(parse_number(&digits));
    } else {
        runs.push(Run::Text(text));
    }

    NaturalKey(runs)
}

fn parse_number(digits: &str) -> Run {
    // Saturate on absurdly long digit runs rather than fall over.
    Run::Number(digits.parse().unwrap_or(u128::MAX))
}
