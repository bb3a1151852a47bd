use shared_crypto::is_on_curve;

use crate::ports::AddressValidity;

/// Accepts candidates that are NOT valid ed25519 points, matching the ledger
/// runtime's rule for program-derived addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffCurve;

impl AddressValidity for OffCurve {
    fn accepts(&self, candidate: &[u8; 32]) -> bool {
        !is_on_curve(candidate)
    }
}
