//! # Ports
//!
//! The external rule a derived candidate must satisfy. It is owned by the
//! ledger runtime, not by this crate, so it is injected.

/// Predicate deciding whether a 32-byte candidate may be used as a derived
/// address.
pub trait AddressValidity: Send + Sync {
    fn accepts(&self, candidate: &[u8; 32]) -> bool;
}

impl<F> AddressValidity for F
where
    F: Fn(&[u8; 32]) -> bool + Send + Sync,
{
    fn accepts(&self, candidate: &[u8; 32]) -> bool {
        self(candidate)
    }
}
