use super::member::Member;
use serde::Serialize;

/// A member's place in the rotation queue.
///
/// Slot 0 is the member choosing this period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    pub member: Member,
    pub slot: usize,
    pub greened: bool,
    pub previous_slot: Option<usize>,
}

impl QueueEntry {
    pub fn new(member: Member, slot: usize, greened: bool) -> Self {
        Self {
            member,
            slot,
            greened,
            previous_slot: None,
        }
    }
}

/// Build a queue from names in order; `greened` flags are matched by index.
pub fn queue_from_names(names: &[&str], greened: &[bool]) -> Vec<QueueEntry> {
    names
        .iter()
        .enumerate()
        .map(|(slot, name)| {
            QueueEntry::new(
                Member::new(name),
                slot,
                greened.get(slot).copied().unwrap_or(false),
            )
        })
        .collect()
}
