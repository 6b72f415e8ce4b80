//! Interface to the rendering collaborator.
//!
//! The controller never touches sprites. Each transition queues
//! `PresentationEvent`s, and the caller hands them to a `Presenter` with
//! `GameController::flush_events` once the transition has completed. A
//! presenter therefore only ever sees fully updated sessions.

pub mod placement;

pub use placement::{Placement, SortingLayer};

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;

/// A visual change the renderer should apply.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PresentationEvent {
    /// Move a card to a new transform and sorting layer.
    Placed { card: CardId, placement: Placement },
    /// Turn a card face-up or face-down.
    Flipped { card: CardId, face_up: bool },
}

impl PresentationEvent {
    /// The card this event is about.
    #[must_use]
    pub fn card(&self) -> CardId {
        match self {
            PresentationEvent::Placed { card, .. } | PresentationEvent::Flipped { card, .. } => *card,
        }
    }
}

/// Receives presentation events.
pub trait Presenter {
    fn present(&mut self, event: &PresentationEvent);
}

/// Collects events; handy for tests and headless runs.
impl Presenter for Vec<PresentationEvent> {
    fn present(&mut self, event: &PresentationEvent) {
        self.push(*event);
    }
}
