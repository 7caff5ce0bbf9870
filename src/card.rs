//! Task cards: the visual unit a submitted task turns into.
//!
//! A card is built once by [`render`] and afterwards only mutated in place
//! through its [`StatusBadge`]. It keeps no link back to the [`Todo`] it
//! came from.

use crate::task::{Status, Todo, Urgency};
use crate::theme::Tone;

/// Interactive element on a card. The marker class names are how controls
/// on pre-existing cards are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Close,
    Previous,
    Next,
}

impl ControlKind {
    pub const ALL: [ControlKind; 3] = [ControlKind::Close, ControlKind::Previous, ControlKind::Next];

    pub fn marker(self) -> &'static str {
        match self {
            ControlKind::Close => "closeButton",
            ControlKind::Previous => "leftButton",
            ControlKind::Next => "rightButton",
        }
    }

    pub fn from_marker(marker: &str) -> Option<ControlKind> {
        Self::ALL.into_iter().find(|kind| kind.marker() == marker)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ControlKind::Close => "X",
            ControlKind::Previous => "<",
            ControlKind::Next => ">",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyPill {
    pub text: String,
    pub tone: Tone,
}

impl UrgencyPill {
    pub fn new(urgency: &str) -> Self {
        let tone = match Urgency::classify(urgency) {
            Urgency::Normal => Tone::Positive,
            Urgency::Urgent => Tone::Negative,
        };
        Self {
            text: urgency.to_string(),
            tone,
        }
    }
}

/// Label plus tone showing where a card is in the status cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    label: String,
    tone: Tone,
}

impl StatusBadge {
    pub fn for_status(status: Status) -> Self {
        Self {
            label: status.label().to_string(),
            tone: status_tone(status),
        }
    }

    /// Unknown ordinals get a neutral badge that still reads "Finished".
    pub fn for_ordinal(ordinal: i64) -> Self {
        match u8::try_from(ordinal).ok().and_then(Status::from_ordinal) {
            Some(status) => Self::for_status(status),
            None => Self {
                label: Status::Finished.label().to_string(),
                tone: Tone::Neutral,
            },
        }
    }

    /// Badge that displays `label` verbatim, as found on a card that was
    /// already on the page.
    pub fn for_label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            tone: Status::from_label(label).map_or(Tone::Neutral, status_tone),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Status as read back from the displayed label.
    pub fn status(&self) -> Status {
        Status::decode_label(&self.label)
    }

    pub fn set_status(&mut self, status: Status) {
        self.label.clear();
        self.label.push_str(status.label());
        self.tone = status_tone(status);
    }
}

fn status_tone(status: Status) -> Tone {
    match status {
        Status::NotStarted => Tone::Negative,
        Status::InProgress => Tone::Warning,
        Status::Finished => Tone::Positive,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    controls: Vec<ControlKind>,
    pub title: String,
    pub urgency: UrgencyPill,
    pub description: String,
    badge: StatusBadge,
}

impl Card {
    pub fn new(
        title: String,
        urgency: UrgencyPill,
        description: String,
        badge: StatusBadge,
        controls: Vec<ControlKind>,
    ) -> Self {
        let mut controls = controls;
        controls.sort_by_key(|kind| ControlKind::ALL.iter().position(|k| k == kind));
        controls.dedup();
        Self {
            controls,
            title,
            urgency,
            description,
            badge,
        }
    }

    /// Controls in display order: close first, then previous and next.
    pub fn controls(&self) -> &[ControlKind] {
        &self.controls
    }

    pub fn has_control(&self, kind: ControlKind) -> bool {
        self.controls.contains(&kind)
    }

    pub fn badge(&self) -> &StatusBadge {
        &self.badge
    }

    pub fn badge_mut(&mut self) -> &mut StatusBadge {
        &mut self.badge
    }
}

/// Builds the card for a task, with every control in place.
pub fn render(todo: &Todo) -> Card {
    Card::new(
        todo.name.clone(),
        UrgencyPill::new(&todo.urgency),
        todo.description.clone(),
        StatusBadge::for_status(todo.status),
        ControlKind::ALL.to_vec(),
    )
}
