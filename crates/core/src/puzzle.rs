//! Hash-preimage puzzle - the matching minigame
//!
//! A target digest is derived from a random piece's preimage label; the
//! player "solves" it by holding the matching piece when they check. This
//! is a flavor mechanic, not a security boundary: the only contract is a
//! deterministic string-to-fixed-length-hex transform, so a non-crypto
//! fallback with the same interface is substitutable.

use serde::Serialize;
use sha2::{Digest, Sha256};

use tetrohash_types::{PieceKind, REWARD_DIGEST_BONUS, REWARD_MAX_SATS, REWARD_MIN_SATS};

use crate::pieces;
use crate::rng::PieceSampler;

/// One-way transform used for target generation and solution checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestScheme {
    /// SHA-256, hex-encoded (preferred)
    Sha256,
    /// Deterministic 32-bit fold, padded and repeated to the same 64-char
    /// shape as SHA-256 output
    Fold32,
}

impl DigestScheme {
    pub fn digest_hex(&self, preimage: &str) -> String {
        match self {
            DigestScheme::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(preimage.as_bytes());
                hex::encode(hasher.finalize())
            }
            DigestScheme::Fold32 => fold32_hex(preimage),
        }
    }
}

/// 31x fold over UTF-16 code units, absolute value, 8 hex digits repeated
/// to 64 chars.
fn fold32_hex(preimage: &str) -> String {
    let mut h: i32 = 0;
    for unit in preimage.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    format!("{:08x}", h.unsigned_abs()).repeat(8)
}

/// Current puzzle: a target digest and an active flag.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    target_digest: Option<String>,
    active: bool,
    scheme: DigestScheme,
}

impl PuzzleState {
    pub fn new(scheme: DigestScheme) -> Self {
        Self {
            target_digest: None,
            active: false,
            scheme,
        }
    }

    pub fn scheme(&self) -> DigestScheme {
        self.scheme
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn target_digest(&self) -> Option<&str> {
        self.target_digest.as_deref()
    }

    /// Draw a random kind and target its preimage. Returns the chosen kind.
    pub fn generate(&mut self, sampler: &mut PieceSampler) -> PieceKind {
        let kind = sampler.draw();
        self.set_target(kind);
        kind
    }

    /// Target a specific kind's preimage (the deterministic path).
    pub fn set_target(&mut self, kind: PieceKind) {
        let digest = self.scheme.digest_hex(pieces::template(kind).preimage);
        self.target_digest = Some(digest);
        self.active = true;
    }

    /// Deactivate and drop the target.
    pub fn clear(&mut self) {
        self.target_digest = None;
        self.active = false;
    }

    /// True iff the puzzle is active and the preimage digests to the target.
    pub fn matches(&self, preimage: &str) -> bool {
        match &self.target_digest {
            Some(target) if self.active => self.scheme.digest_hex(preimage) == *target,
            _ => false,
        }
    }
}

/// Outcome of a solution check. Never an error: a mismatch and a check with
/// nothing to check against are distinct non-error results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PuzzleOutcome {
    Solved {
        reward: u32,
        preimage: &'static str,
        target_digest: String,
    },
    Mismatch {
        preimage: &'static str,
    },
    /// No active puzzle or no active piece
    NotApplicable,
}

/// Reward for a solved puzzle: a uniform base plus a flat bonus per
/// character of the target digest.
pub fn roll_reward(sampler: &mut PieceSampler, digest_len: usize) -> u32 {
    sampler.roll(REWARD_MIN_SATS, REWARD_MAX_SATS) + digest_len as u32 * REWARD_DIGEST_BONUS
}
