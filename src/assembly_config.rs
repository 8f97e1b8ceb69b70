/*!
Contains configuration information for the overlap-layout-consensus pipeline.
Build one with the generated builder, e.g.
```
use overlap_con::assembly_config::{AssemblyConfig, AssemblyConfigBuilder};
let config: AssemblyConfig = AssemblyConfigBuilder::default()
    .gap_score(-3)
    .fasta_line_width(60)
    .build()
    .unwrap();
assert_eq!(config.scoring().match_score, 1);
assert_eq!(config.scoring().gap_score, -3);
```
*/

/// Scores used by the semi-global DP
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScoringScheme {
    /// Added when two symbols are identical
    pub match_score: i32,
    /// Added when two symbols differ
    pub mismatch_score: i32,
    /// Added for a symbol aligned against nothing
    pub gap_score: i32
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap_score: -2
        }
    }
}

/**
Contains configuration information for the overlap-layout-consensus pipeline.
Build one with the generated builder, e.g.
```
use overlap_con::assembly_config::{AssemblyConfig, AssemblyConfigBuilder};
let config: AssemblyConfig = AssemblyConfigBuilder::default()
    .mismatch_score(-2)
    .build()
    .unwrap();
```
*/
#[derive(derive_builder::Builder, Clone, Debug)]
#[builder(default)]
pub struct AssemblyConfig {
    /// Score for a matching pair of symbols
    pub match_score: i32,
    /// Score for a mismatching pair of symbols
    pub mismatch_score: i32,
    /// Score for each gap position, leading gaps on the outer boundary are free
    pub gap_score: i32,
    /// Number of symbols per line when writing FASTA output
    pub fasta_line_width: usize
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        let scoring = ScoringScheme::default();
        Self {
            match_score: scoring.match_score,
            mismatch_score: scoring.mismatch_score,
            gap_score: scoring.gap_score,
            // standard FASTA line width
            fasta_line_width: 80
        }
    }
}

impl AssemblyConfig {
    /// Returns just the scoring portion of the config
    pub fn scoring(&self) -> ScoringScheme {
        ScoringScheme {
            match_score: self.match_score,
            mismatch_score: self.mismatch_score,
            gap_score: self.gap_score
        }
    }
}
