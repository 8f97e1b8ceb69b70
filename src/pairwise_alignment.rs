/*!
Semi-global pairwise alignment used to score suffix-prefix overlaps.
Leading gaps on the outer boundary are free (`a[i][0] = a[0][j] = 0`), and the recurrence is
`a[i][j] = max(a[i-1][j] + gap, a[i-1][j-1] + (match | mismatch), a[i][j-1] + gap)`.

# Example usage
```rust
use overlap_con::nucleotide_sequence::NucleotideSequence;
use overlap_con::pairwise_alignment::PairwiseAligner;

let a = NucleotideSequence::new("acgtacgt").unwrap();
let b = NucleotideSequence::new("gtacgtac").unwrap();
let aligner = PairwiseAligner::default();

// the last six symbols of `a` are the first six of `b`
let (score_ab, score_ba) = aligner.overlap_scores(&a, &b);
assert_eq!(score_ab, 6);
assert_eq!(aligner.overlap_scores(&b, &a), (score_ba, score_ab));
```
*/

use crate::assembly_config::ScoringScheme;
use crate::nucleotide_sequence::NucleotideSequence;

/// A dense `(rows x cols)` table of DP scores, row-major
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    scores: Vec<i32>
}

impl ScoreMatrix {
    fn new(rows: usize, cols: usize) -> ScoreMatrix {
        ScoreMatrix {
            rows,
            cols,
            scores: vec![0; rows * cols]
        }
    }

    /// Number of rows, one more than the length of the first sequence
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, one more than the length of the second sequence
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the score at `(i, j)`, panics if out of bounds
    pub fn get(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.rows && j < self.cols);
        self.scores[i * self.cols + j]
    }

    /// Returns a full row of scores
    pub fn row(&self, i: usize) -> &[i32] {
        &self.scores[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns the final row, which is where every alignment that consumes all of the first sequence ends
    pub fn last_row(&self) -> &[i32] {
        self.row(self.rows - 1)
    }

    fn set(&mut self, i: usize, j: usize, value: i32) {
        self.scores[i * self.cols + j] = value;
    }
}

/// Computes overlap scores and full DP matrices with a fixed scoring scheme
#[derive(Clone, Copy, Debug, Default)]
pub struct PairwiseAligner {
    scoring: ScoringScheme
}

impl PairwiseAligner {
    /// Creates an aligner with custom scores
    pub fn new(scoring: ScoringScheme) -> PairwiseAligner {
        PairwiseAligner { scoring }
    }

    pub fn scoring(&self) -> ScoringScheme {
        self.scoring
    }

    /// Returns `(score_ab, score_ba)` in linear space.
    /// `score_ab` is the best alignment of a suffix of `a` onto a prefix of `b`, which is the maximum of the final row.
    /// `score_ba` is the mirrored orientation, which is the maximum of the rightmost column over every row.
    /// Both include the zero boundary, so neither is ever negative.
    /// # Arguments
    /// * `a` - the sequence running down the rows
    /// * `b` - the sequence running across the columns
    pub fn overlap_scores(&self, a: &NucleotideSequence, b: &NucleotideSequence) -> (i32, i32) {
        let a_codes = a.to_codes();
        let b_codes = b.to_codes();
        let n = b_codes.len();

        // row 0 is all zeros thanks to the free leading gaps
        let mut row: Vec<i32> = vec![0; n + 1];
        let mut best_last_col = row[n];

        for &a_code in a_codes.iter() {
            // `diagonal` holds a[i-1][j-1] as we sweep across the row
            let mut diagonal = row[0];
            row[0] = 0;
            for j in 1..=n {
                let up = row[j];
                let pair_score = self.pair_score(a_code, b_codes[j - 1]);
                row[j] = (up + self.scoring.gap_score)
                    .max(diagonal + pair_score)
                    .max(row[j - 1] + self.scoring.gap_score);
                diagonal = up;
            }
            best_last_col = best_last_col.max(row[n]);
        }

        let best_last_row = row.iter().copied().max().unwrap_or(0);
        (best_last_row, best_last_col)
    }

    /// Returns the complete `(|a|+1) x (|b|+1)` table, used when the alignment has to be retraced.
    /// # Arguments
    /// * `a` - the sequence running down the rows
    /// * `b` - the sequence running across the columns
    pub fn full_matrix(&self, a: &NucleotideSequence, b: &NucleotideSequence) -> ScoreMatrix {
        let a_codes = a.to_codes();
        let b_codes = b.to_codes();
        let mut matrix = ScoreMatrix::new(a_codes.len() + 1, b_codes.len() + 1);

        for i in 1..matrix.rows() {
            for j in 1..matrix.cols() {
                let pair_score = self.pair_score(a_codes[i - 1], b_codes[j - 1]);
                let value = (matrix.get(i - 1, j) + self.scoring.gap_score)
                    .max(matrix.get(i - 1, j - 1) + pair_score)
                    .max(matrix.get(i, j - 1) + self.scoring.gap_score);
                matrix.set(i, j, value);
            }
        }
        matrix
    }

    fn pair_score(&self, c1: u8, c2: u8) -> i32 {
        if c1 == c2 {
            self.scoring.match_score
        } else {
            self.scoring.mismatch_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> NucleotideSequence {
        NucleotideSequence::new(s).unwrap()
    }

    #[test]
    fn test_full_matrix_small() {
        let aligner = PairwiseAligner::default();
        let matrix = aligner.full_matrix(&seq("ac"), &seq("cg"));
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 3);
        // boundaries are free
        assert_eq!(matrix.row(0), &[0, 0, 0]);
        assert_eq!(matrix.get(1, 0), 0);
        // a vs c mismatch, a vs g mismatch
        assert_eq!(matrix.row(1), &[0, -1, -1]);
        // c vs c matches off the free boundary, c vs g = max(-1 - 2, -1 - 1, 1 - 2)
        assert_eq!(matrix.row(2), &[0, 1, -1]);
    }

    #[test]
    fn test_overlap_scores_rotation() {
        let aligner = PairwiseAligner::default();
        let a = seq("acgtacgt");
        let b = seq("gtacgtac");
        assert_eq!(aligner.overlap_scores(&a, &b), (6, 6));
    }

    #[test]
    fn test_overlap_scores_directional() {
        let aligner = PairwiseAligner::default();
        let a = seq("ttttacgg");
        let b = seq("acggcccc");

        // a's suffix overlaps b's prefix strongly, but not the reverse
        let (score_ab, score_ba) = aligner.overlap_scores(&a, &b);
        assert_eq!(score_ab, 4);
        assert!(score_ba < score_ab);
        assert_eq!(aligner.overlap_scores(&b, &a), (score_ba, score_ab));
    }

    #[test]
    fn test_scores_match_full_matrix() {
        let aligner = PairwiseAligner::default();
        let pairs = [
            ("acgtacgt", "gtacgtac"),
            ("aaaa", "aaaa"),
            ("gattaca", "tacaggat"),
            ("a", "cgtcgt"),
            ("", "acgt")
        ];
        for (s1, s2) in pairs {
            let (a, b) = (seq(s1), seq(s2));
            let (score_ab, score_ba) = aligner.overlap_scores(&a, &b);
            let matrix = aligner.full_matrix(&a, &b);
            assert_eq!(*matrix.last_row().iter().max().unwrap(), score_ab);

            let last_col_max = (0..matrix.rows()).map(|i| matrix.get(i, matrix.cols() - 1)).max().unwrap();
            assert_eq!(last_col_max, score_ba);
        }
    }

    #[test]
    fn test_custom_scoring() {
        let aligner = PairwiseAligner::new(ScoringScheme { match_score: 2, mismatch_score: -3, gap_score: -5 });
        let (score_ab, _) = aligner.overlap_scores(&seq("ccaa"), &seq("aagg"));
        assert_eq!(score_ab, 4);
    }
}
