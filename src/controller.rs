//! Card controller: turns clicks on card controls into edits of the holder.
//!
//! All state lives in the holder's cards. The controller only remembers
//! which controls it has wired, so a click on a control a card never
//! carried does nothing.

use crate::card::{self, ControlKind};
use crate::form::{AddForm, FormValues};
use crate::task::{Direction, Status, Todo};
use crate::todo_holder::{CardId, TodoHolder};
use std::collections::HashSet;

/// One control on one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlRef {
    pub card: CardId,
    pub kind: ControlKind,
}

impl ControlRef {
    pub fn new(card: CardId, kind: ControlKind) -> Self {
        Self { card, kind }
    }
}

/// What a click ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Deleted(CardId),
    StatusChanged(CardId, Status),
    Ignored,
}

#[derive(Debug)]
pub struct CardController {
    holder: TodoHolder,
    form: AddForm,
    wired: HashSet<ControlRef>,
}

impl CardController {
    /// Takes over the holder and form, wiring every control found on the
    /// cards already in the holder.
    pub fn initialize(holder: TodoHolder, form: AddForm) -> Self {
        let mut controller = Self {
            holder,
            form,
            wired: HashSet::new(),
        };
        let found: Vec<CardId> = controller.holder.iter().map(|(id, _)| id).collect();
        for id in found {
            controller.wire(id);
        }
        tracing::info!(
            cards = controller.holder.len(),
            controls = controller.wired.len(),
            "wired pre-existing cards"
        );
        controller
    }

    fn wire(&mut self, id: CardId) {
        if let Some(card) = self.holder.get(id) {
            self.wired
                .extend(card.controls().iter().map(|kind| ControlRef::new(id, *kind)));
        }
    }

    pub fn holder(&self) -> &TodoHolder {
        &self.holder
    }

    pub fn form(&self) -> &AddForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AddForm {
        &mut self.form
    }

    pub fn is_wired(&self, control: ControlRef) -> bool {
        self.wired.contains(&control)
    }

    /// Builds a not-started task from the submitted values, renders it and
    /// appends the card. Values are used as given.
    pub fn on_submit(&mut self, values: FormValues) -> CardId {
        tracing::debug!(
            name = %values.name,
            urgency = %values.urgency,
            description = %values.description,
            "form submitted"
        );
        let todo = Todo::new(values.name, values.urgency, values.description);
        let id = self.holder.append(card::render(&todo));
        self.wire(id);
        tracing::info!(card = %id, "card added");
        id
    }

    /// Submits whatever the form currently holds. The form keeps its values.
    pub fn submit_form(&mut self) -> CardId {
        let values = self.form.values();
        self.on_submit(values)
    }

    pub fn click(&mut self, control: ControlRef) -> ClickOutcome {
        if !self.is_wired(control) {
            tracing::debug!(card = %control.card, control = control.kind.marker(), "click on unwired control");
            return ClickOutcome::Ignored;
        }
        match control.kind {
            ControlKind::Close => {
                if self.delete(control) {
                    ClickOutcome::Deleted(control.card)
                } else {
                    ClickOutcome::Ignored
                }
            }
            ControlKind::Previous => self.cycle_outcome(control, Direction::Previous),
            ControlKind::Next => self.cycle_outcome(control, Direction::Next),
        }
    }

    fn cycle_outcome(&mut self, control: ControlRef, direction: Direction) -> ClickOutcome {
        match self.cycle_status(control, direction) {
            Some(status) => ClickOutcome::StatusChanged(control.card, status),
            None => ClickOutcome::Ignored,
        }
    }

    /// Removes the card the close control sits on. Returns `false` if that
    /// card is already gone or the control is not a close control.
    pub fn delete(&mut self, control: ControlRef) -> bool {
        if control.kind != ControlKind::Close {
            tracing::debug!(card = %control.card, control = control.kind.marker(), "delete from non-close control");
            return false;
        }
        match self.holder.remove(control.card) {
            Some(_) => {
                self.wired.retain(|c| c.card != control.card);
                tracing::info!(card = %control.card, "card deleted");
                true
            }
            None => {
                tracing::debug!(card = %control.card, "delete on detached card");
                false
            }
        }
    }

    /// Moves the card's badge one step around the status cycle, editing the
    /// badge in place. Returns the new status, or `None` if the card is gone
    /// or the control does not point in `direction`.
    pub fn cycle_status(&mut self, control: ControlRef, direction: Direction) -> Option<Status> {
        if control.kind != cycle_control(direction) {
            tracing::debug!(card = %control.card, control = control.kind.marker(), "cycle from mismatched control");
            return None;
        }
        let Some(card) = self.holder.get_mut(control.card) else {
            tracing::debug!(card = %control.card, "cycle on detached card");
            return None;
        };
        let badge = card.badge_mut();
        let current = badge.status();
        let next = current.step(direction);
        badge.set_status(next);
        tracing::debug!(
            card = %control.card,
            from = current.label(),
            to = next.label(),
            tone = badge.tone().class(),
            "status cycled"
        );
        Some(next)
    }
}

fn cycle_control(direction: Direction) -> ControlKind {
    match direction {
        Direction::Previous => ControlKind::Previous,
        Direction::Next => ControlKind::Next,
    }
}
