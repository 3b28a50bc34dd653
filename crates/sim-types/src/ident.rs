//! Transaction identity generation.

use crate::entities::TxId;
use rand::Rng;

/// Produces a random 64-bit transaction identity.
///
/// Identities are not checked for collisions; with 64 bits of entropy the
/// risk is negligible at simulation scale.
#[must_use]
pub fn random_tx_id() -> TxId {
    rand::thread_rng().gen()
}
