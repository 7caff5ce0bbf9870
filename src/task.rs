/// Progress of a task. Ordered and cyclic: the ordinal of each variant is
/// its position in [`Status::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Finished];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Status> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Finished => "Finished",
        }
    }

    pub fn from_label(label: &str) -> Option<Status> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Reads a displayed badge label back into a status. Anything that is
    /// not one of the three labels counts as finished.
    pub fn decode_label(label: &str) -> Status {
        Self::from_label(label).unwrap_or(Status::Finished)
    }

    pub fn step(self, direction: Direction) -> Status {
        let len = Self::ALL.len();
        let index = usize::from(self.ordinal());
        let next = match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        };
        Self::ALL[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// Urgency as far as styling is concerned. Only the exact value `normal`
/// is normal; every other string is treated as urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Urgent,
}

impl Urgency {
    pub fn classify(value: &str) -> Urgency {
        if value == "normal" {
            Urgency::Normal
        } else {
            Urgency::Urgent
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Urgent => "urgent",
        }
    }

    pub fn toggle(self) -> Urgency {
        match self {
            Urgency::Normal => Urgency::Urgent,
            Urgency::Urgent => Urgency::Normal,
        }
    }
}

/// A task as built from one form submission. Short-lived: it is rendered
/// into a card and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub name: String,
    pub urgency: String, // "normal" | "urgent", passed through unchecked
    pub description: String,
    pub status: Status,
}

impl Todo {
    pub fn new(name: String, urgency: String, description: String) -> Self {
        Self {
            name,
            urgency,
            description,
            status: Status::NotStarted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Status::NotStarted, 0, "Not Started")]
    #[case(Status::InProgress, 1, "In Progress")]
    #[case(Status::Finished, 2, "Finished")]
    fn status_codecs_agree(#[case] status: Status, #[case] ordinal: u8, #[case] label: &str) {
        assert_eq!(status.ordinal(), ordinal);
        assert_eq!(Status::from_ordinal(ordinal), Some(status));
        assert_eq!(status.label(), label);
        assert_eq!(Status::decode_label(label), status);
        assert_eq!(Status::decode_label(Status::decode_label(label).label()), status);
    }

    #[test]
    fn unknown_ordinal_has_no_status() {
        assert_eq!(Status::from_ordinal(3), None);
        assert_eq!(Status::from_ordinal(u8::MAX), None);
    }

    #[rstest]
    #[case("")]
    #[case("not started")]
    #[case("Done")]
    fn unknown_label_decodes_to_finished(#[case] label: &str) {
        assert_eq!(Status::from_label(label), None);
        assert_eq!(Status::decode_label(label), Status::Finished);
    }

    #[test]
    fn next_and_previous_walk_the_cycle() {
        assert_eq!(Status::NotStarted.step(Direction::Next), Status::InProgress);
        assert_eq!(Status::InProgress.step(Direction::Next), Status::Finished);
        assert_eq!(Status::Finished.step(Direction::Next), Status::NotStarted);
        assert_eq!(Status::NotStarted.step(Direction::Previous), Status::Finished);
        assert_eq!(Status::Finished.step(Direction::Previous), Status::InProgress);
        assert_eq!(Status::InProgress.step(Direction::Previous), Status::NotStarted);
    }

    #[test]
    fn steps_are_reversible_and_close_after_three() {
        for status in Status::ALL {
            assert_eq!(status.step(Direction::Next).step(Direction::Previous), status);
            assert_eq!(status.step(Direction::Previous).step(Direction::Next), status);
            let around = status
                .step(Direction::Next)
                .step(Direction::Next)
                .step(Direction::Next);
            assert_eq!(around, status);
        }
    }

    #[rstest]
    #[case("normal", Urgency::Normal)]
    #[case("urgent", Urgency::Urgent)]
    #[case("", Urgency::Urgent)]
    #[case("xyz", Urgency::Urgent)]
    #[case("Normal", Urgency::Urgent)]
    fn urgency_is_binary(#[case] value: &str, #[case] expected: Urgency) {
        assert_eq!(Urgency::classify(value), expected);
    }

    #[test]
    fn new_todo_starts_not_started() {
        let todo = Todo::new("a".into(), "urgent".into(), String::new());
        assert_eq!(todo.status, Status::NotStarted);
    }
}
