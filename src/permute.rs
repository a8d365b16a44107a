use crate::table::SubstitutionTable;

/// Lazy Cartesian product over per-position character choices.
///
/// Position `i` of the hostname contributes the original character followed by
/// its table alternatives, in table order. The iterator walks the product like
/// an odometer with the rightmost position turning fastest, so the untouched
/// hostname is always the first candidate out. Single forward pass, nothing is
/// materialized up front, and dropping the iterator abandons the remaining
/// combinations.
pub struct Permutations {
    choices: Vec<Vec<char>>,
    cursor: Vec<usize>,
    exhausted: bool,
}

impl Permutations {
    pub fn new(hostname: &str, table: &SubstitutionTable) -> Self {
        let choices: Vec<Vec<char>> = hostname
            .chars()
            .map(|c| {
                let mut options = Vec::with_capacity(1 + table.alternatives(c).len());
                options.push(c);
                options.extend_from_slice(table.alternatives(c));
                options
            })
            .collect();
        let cursor = vec![0; choices.len()];
        Self {
            choices,
            cursor,
            exhausted: false,
        }
    }

    /// Total number of candidates this sequence will yield, `None` when the
    /// product overflows `u64`.
    pub fn total(&self) -> Option<u64> {
        self.choices
            .iter()
            .try_fold(1u64, |acc, options| acc.checked_mul(options.len() as u64))
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let candidate: String = self
            .cursor
            .iter()
            .zip(&self.choices)
            .map(|(&i, options)| options[i])
            .collect();

        let mut pos = self.choices.len();
        loop {
            if pos == 0 {
                self.exhausted = true;
                break;
            }
            pos -= 1;
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.choices[pos].len() {
                break;
            }
            self.cursor[pos] = 0;
        }

        Some(candidate)
    }
}
