use thiserror::Error;

/// Errors raised while deriving a program address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// Every bump from 255 down to 0 produced a rejected candidate.
    #[error("Derivation exhausted after {attempts} bump attempts")]
    DerivationExhausted { attempts: usize },

    /// The candidate for an explicit bump was rejected by the validity rule.
    #[error("Derived candidate rejected by validity predicate")]
    InvalidCandidate,

    /// A seed is longer than the runtime allows.
    #[error("Seed {index} is {length} bytes, max {max}")]
    SeedTooLong {
        index: usize,
        length: usize,
        max: usize,
    },

    /// Too many seeds (the bump counts as one).
    #[error("Too many seeds: {count}, max {max}")]
    TooManySeeds { count: usize, max: usize },
}
