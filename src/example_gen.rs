use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};

use crate::nucleotide_sequence::CODE_TO_SYMBOL;

/// Creates a random genome and a set of overlapping reads tiled across it.
/// Reads start every `step` symbols and are kept only while they fit entirely inside the genome.
/// Returns `(genome, reads)` with reads in genome order.
/// # Arguments
/// * `genome_len` - the length of the hidden genome
/// * `read_len` - the length of each read before errors are added
/// * `step` - distance between consecutive read starts, must be > 0
/// * `error_rate` - overall error rate, assumes mismatch, insertion, and deletion are equally likely sub-components of this error rate
/// * `seed` - seed for the generator, the same seed always gives the same data
pub fn generate_reads(genome_len: usize, read_len: usize, step: usize, error_rate: f64, seed: u64) -> (String, Vec<String>) {
    assert!(step > 0);
    assert!(read_len <= genome_len);
    assert!((0.0..=1.0).contains(&error_rate));

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let base_distribution = Uniform::new(0, 4u8);
    let basem1_distribution = Uniform::new(1, 4u8);
    let error_distribution = Uniform::new(0.0, 1.0);
    let error_type_distribution = Uniform::new(0, 3);

    let genome: Vec<u8> = (0..genome_len)
        .map(|_i| rng.sample(base_distribution))
        .collect();

    let reads: Vec<String> = (0..=(genome_len - read_len))
        .step_by(step)
        .map(|start| {
            let mut read = String::with_capacity(read_len);
            let mut genome_index = start;
            while genome_index < start + read_len {
                let c = genome[genome_index];
                if rng.sample(error_distribution) < error_rate {
                    match rng.sample(error_type_distribution) {
                        0 => {
                            // substitution, always to a different symbol
                            let alt_c = (c + rng.sample(basem1_distribution)) % 4;
                            read.push(CODE_TO_SYMBOL[alt_c as usize]);
                            genome_index += 1;
                        },
                        1 => {
                            // deletion
                            genome_index += 1;
                        },
                        2 => {
                            // insertion
                            read.push(CODE_TO_SYMBOL[rng.sample(base_distribution) as usize]);
                        },
                        _ => panic!("no impl")
                    }
                } else {
                    read.push(CODE_TO_SYMBOL[c as usize]);
                    genome_index += 1;
                }
            }
            read
        })
        .collect();

    let genome: String = genome.iter().map(|&c| CODE_TO_SYMBOL[c as usize]).collect();
    (genome, reads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_free_tiling() {
        let (genome, reads) = generate_reads(100, 30, 10, 0.0, 0);
        assert_eq!(genome.len(), 100);
        // starts at 0, 10, ..., 70
        assert_eq!(reads.len(), 8);
        for (i, read) in reads.iter().enumerate() {
            assert_eq!(read, &genome[i * 10..i * 10 + 30]);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_reads(50, 20, 5, 0.05, 3), generate_reads(50, 20, 5, 0.05, 3));
    }
}
