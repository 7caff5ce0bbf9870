//! A to-do card widget for the terminal.
//!
//! A form collects a task's name, urgency and description. Each submission
//! becomes a card in the holder, with a close control and two controls that
//! step its status around `Not Started -> In Progress -> Finished`.

pub mod card;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod logging;
pub mod task;
pub mod theme;
pub mod todo_holder;
pub mod ui;

pub use card::{render, Card, ControlKind, StatusBadge, UrgencyPill};
pub use config::{PageConfig, SeedCard, SeedStatus};
pub use controller::{CardController, ClickOutcome, ControlRef};
pub use error::{Result, TodoError};
pub use form::{AddForm, FormValues};
pub use task::{Direction, Status, Todo, Urgency};
pub use theme::{Theme, ThemeName, Tone};
pub use todo_holder::{CardId, TodoHolder};

/// Builds the widget from a page config: seeds the holder with the cards
/// the page already shows, then hands holder and form to the controller.
pub fn initialize(config: &PageConfig) -> CardController {
    let mut holder = TodoHolder::new(config.title.clone());
    for seed in &config.cards {
        holder.append(seed.to_card());
    }
    let form = AddForm::new(Urgency::classify(&config.default_urgency));
    CardController::initialize(holder, form)
}
