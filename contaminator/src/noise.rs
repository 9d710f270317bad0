//! Random substitutions copying one position of a sequence onto another.
use crate::error::{ContaminationError, Result};
use crate::sampler::sample_without_replacement;
use rand::Rng;

/// Overwrite between 1 and `max_substitutions` positions of `seq` with the
/// character found at another position. Both targets and sources are drawn from
/// `1..seq.len()`; the first character is never modified.
/// Substitutions are applied in draw order, so a source may already have been
/// rewritten by an earlier substitution.
/// Returns the new sequence and the number of substitutions. If the drawn number
/// exceeds the `seq.len() - 1` available positions, the sampling fails.
pub fn add_noise<R: Rng + ?Sized>(
    rng: &mut R,
    seq: &str,
    max_substitutions: usize,
) -> Result<(String, usize)> {
    if max_substitutions < 1 {
        let reason = "max_substitutions should be at least 1".to_string();
        return Err(ContaminationError::InvalidNoiseParameters { reason });
    }
    if seq.len() < 2 {
        let reason = format!("sequence of length {} is too short", seq.len());
        return Err(ContaminationError::InvalidNoiseParameters { reason });
    }
    if !seq.is_ascii() {
        let reason = "sequence contains non-ASCII characters".to_string();
        return Err(ContaminationError::InvalidNoiseParameters { reason });
    }
    let substitutions = rng.gen_range(1..=max_substitutions);
    let range: Vec<usize> = (1..seq.len()).collect();
    let positions = sample_without_replacement(rng, &range, substitutions)?;
    let replacements = sample_without_replacement(rng, &range, substitutions)?;
    let mut seq = seq.as_bytes().to_vec();
    for (&position, &replacement) in positions.iter().zip(replacements.iter()) {
        seq[position] = seq[replacement];
    }
    // Only ASCII bytes are copied around.
    let seq = String::from_utf8_lossy(&seq).to_string();
    Ok((seq, substitutions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    #[test]
    fn length_and_bounds() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(3205);
        let template = "TACGTTGCA-CGTAGCTAGCTAGNNACGATCGA";
        for max in 1..10 {
            for _ in 0..50 {
                let (noised, subs) = add_noise(&mut rng, template, max).unwrap();
                assert_eq!(noised.len(), template.len());
                assert!(1 <= subs && subs <= max, "{}", subs);
                assert_eq!(noised.as_bytes()[0], b'T');
                let diff = noised
                    .bytes()
                    .zip(template.bytes())
                    .filter(|(x, y)| x != y)
                    .count();
                assert!(diff <= subs);
            }
        }
    }
    #[test]
    fn characters_come_from_the_sequence() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(1);
        let template = "GAAAAAAAAAC";
        for _ in 0..100 {
            let (noised, _) = add_noise(&mut rng, template, 5).unwrap();
            assert!(noised.starts_with('G'));
            assert!(noised.bytes().skip(1).all(|b| b == b'A' || b == b'C'));
        }
    }
    #[test]
    fn all_positions_at_once() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(7);
        let (noised, subs) = add_noise(&mut rng, "AC", 1).unwrap();
        assert_eq!((noised.as_str(), subs), ("AC", 1));
    }
    #[test]
    fn reproducible() {
        let mut r1: Xoshiro256StarStar = SeedableRng::seed_from_u64(42);
        let mut r2: Xoshiro256StarStar = SeedableRng::seed_from_u64(42);
        let template = "ACGTTGCAACGTTGCAACGT";
        assert_eq!(
            add_noise(&mut r1, template, 4).unwrap(),
            add_noise(&mut r2, template, 4).unwrap()
        );
    }
    #[test]
    fn invalid_parameters() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(42);
        for (seq, max) in [("ACGT", 0), ("A", 1), ("", 1), ("AÇGT", 1)] {
            match add_noise(&mut rng, seq, max) {
                Err(ContaminationError::InvalidNoiseParameters { .. }) => {}
                x => panic!("{}\t{}\t{:?}", seq, max, x),
            }
        }
    }
    #[test]
    fn draws_larger_than_the_sequence() {
        let (mut ok, mut short) = (0, 0);
        for seed in 0..200 {
            let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
            match add_noise(&mut rng, "ACGTA", 10) {
                Ok((noised, subs)) => {
                    assert!(subs <= 4, "{}", subs);
                    assert_eq!(noised.len(), 5);
                    ok += 1;
                }
                Err(ContaminationError::InsufficientCandidates {
                    requested,
                    available,
                }) => {
                    assert!(4 < requested && requested <= 10);
                    assert_eq!(available, 4);
                    short += 1;
                }
                Err(why) => panic!("{:?}", why),
            }
        }
        assert!(0 < ok && 0 < short, "{}\t{}", ok, short);
    }
    #[test]
    fn substitutions_are_sequential() {
        let template = "ABCDEFGHIJ";
        let mut chained = 0;
        for seed in 0..200 {
            let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
            let mut replay = rng.clone();
            let (noised, subs) = add_noise(&mut rng, template, 9).unwrap();
            let drawn = replay.gen_range(1..=9);
            let range: Vec<usize> = (1..template.len()).collect();
            let positions = sample_without_replacement(&mut replay, &range, drawn).unwrap();
            let sources = sample_without_replacement(&mut replay, &range, drawn).unwrap();
            assert_eq!(subs, drawn);
            let mut sequential = template.as_bytes().to_vec();
            let mut at_once = template.as_bytes().to_vec();
            for (&to, &from) in positions.iter().zip(sources.iter()) {
                sequential[to] = sequential[from];
                at_once[to] = template.as_bytes()[from];
            }
            assert_eq!(noised.as_bytes(), sequential.as_slice());
            if sequential != at_once {
                chained += 1;
            }
        }
        // Some seeds read a position already rewritten in the same call.
        assert!(0 < chained);
    }
}
