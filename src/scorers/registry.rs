use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::ScorerError;
use crate::scorer::Scorer;
use crate::scorers::{HumanScorer, RandomScorer};

/// Create a scorer from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - random[:seed]
pub fn create_scorer_from_spec(spec: &str, seed: u64) -> Result<Box<dyn Scorer>, ScorerError> {
    let (head, tail) = match spec.split_once(':') {
        Some((head, tail)) => (head, Some(tail.trim())),
        None => (spec, None),
    };
    match head.trim().to_ascii_lowercase().as_str() {
        "human" => {
            let name = tail.filter(|name| !name.is_empty()).unwrap_or("Scorer");
            Ok(Box::new(HumanScorer::new(name)))
        }
        "random" => {
            let seed = match tail {
                Some(value) => value
                    .parse::<u64>()
                    .map_err(|_| ScorerError::InvalidSeed(value.to_string()))?,
                None => seed,
            };
            Ok(Box::new(RandomScorer::new(StdRng::seed_from_u64(seed))))
        }
        _ => Err(ScorerError::UnknownSpec(spec.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_specs_build() {
        assert!(create_scorer_from_spec("human", 1).is_ok());
        assert!(create_scorer_from_spec("Human:Umpire", 1).is_ok());
        assert!(create_scorer_from_spec("random", 1).is_ok());
        assert!(create_scorer_from_spec("random:42", 1).is_ok());
    }

    #[test]
    fn bad_specs_are_reported() {
        assert_eq!(
            create_scorer_from_spec("random:abc", 1).err(),
            Some(ScorerError::InvalidSeed(String::from("abc")))
        );
        assert_eq!(
            create_scorer_from_spec("heuristic", 1).err(),
            Some(ScorerError::UnknownSpec(String::from("heuristic")))
        );
    }
}
