//! Game configuration.
//!
//! Rule variants that are a matter of house preference rather than
//! layout data:
//! - `FaceUpPolicy`: whether tableau faces follow the occlusion graph
//!   or stay at the value each slot declares
//! - `rank_wrap`: whether King and Ace count as adjacent

use serde::{Deserialize, Serialize};

/// How mine cards decide whether they are face-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceUpPolicy {
    /// A card is face-up once every slot that hides it has left the mine.
    /// Recomputed after the deal and after every match.
    #[default]
    Occlusion,
    /// Each card keeps the `faceup` flag its slot declares.
    SlotDeclared,
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Face-up rule for the mine.
    #[serde(default)]
    pub face_up_policy: FaceUpPolicy,

    /// King and Ace are adjacent when true.
    #[serde(default)]
    pub rank_wrap: bool,
}

impl GameConfig {
    /// Create the default configuration (occlusion on, no wraparound).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the face-up policy.
    #[must_use]
    pub fn with_face_up_policy(mut self, policy: FaceUpPolicy) -> Self {
        self.face_up_policy = policy;
        self
    }

    /// Allow King/Ace wraparound.
    #[must_use]
    pub fn with_rank_wrap(mut self, wrap: bool) -> Self {
        self.rank_wrap = wrap;
        self
    }

    /// Does the occlusion graph drive face-up state?
    #[must_use]
    pub fn occlusion_enabled(&self) -> bool {
        self.face_up_policy == FaceUpPolicy::Occlusion
    }
}
