//! Rotation scheduling: from the queue of the period that just ended to the
//! queue of the next one.
//!
//! Placement happens in an arena indexed like the current (filtered) queue
//! but sized for the unfiltered one, so members removed as inactive leave
//! free slots at the tail. Slot 0 belongs to the outgoing chooser and is left
//! empty; a greened member asks for their own index, a member who missed asks
//! for the index behind. The chooser always goes behind every placed member.
//! Collapsing the arena afterwards moves everybody up past the chooser.

use crate::core::allocator::{find_slot, find_slot_from};
use crate::core::rules::{ChooserPlacement, Rules};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceStatus, Member, QueueEntry};
use std::collections::{HashMap, HashSet};

/// Where one member asked to go and where they ended up, in arena slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub member: Member,
    pub greened: bool,
    pub previous_slot: usize,
    pub desired: usize,
    pub assigned: usize,
}

/// Outcome of one rotation pass.
#[derive(Debug, Clone)]
pub struct Advance {
    pub next_queue: Vec<QueueEntry>,
    pub chooser: Option<QueueEntry>,
    /// Arena slot the chooser was re-inserted at.
    pub chooser_slot: Option<usize>,
    pub removed: Vec<QueueEntry>,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, Copy)]
enum Seat {
    Member(usize),
    Chooser,
}

pub struct RotationLogic;

impl RotationLogic {
    /// Compute the next queue.
    ///
    /// Members whose status is inactive leave the rotation; members missing
    /// from `statuses` have no history yet and stay. Any broken invariant
    /// aborts the whole pass.
    pub fn advance(
        current: &[QueueEntry],
        statuses: &HashMap<Member, AttendanceStatus>,
        rules: &Rules,
    ) -> AppResult<Advance> {
        let ordered = Self::ordered_input(current)?;
        let nominal_last = ordered.len();

        let (active, removed): (Vec<QueueEntry>, Vec<QueueEntry>) = ordered
            .into_iter()
            .partition(|e| statuses.get(&e.member).is_none_or(|s| s.active));

        let Some((chooser, rest)) = active.split_first() else {
            return Ok(Advance {
                next_queue: Vec::new(),
                chooser: None,
                chooser_slot: None,
                removed,
                placements: Vec::new(),
            });
        };

        let mut arena: Vec<Option<Seat>> = vec![None; nominal_last + 1];
        let mut placements = Vec::with_capacity(rest.len());

        for (i, entry) in rest.iter().enumerate() {
            let index = i + 1;
            let desired = if entry.greened { index } else { index + 1 };
            let assigned = find_slot(&arena, desired)?;
            arena[assigned] = Some(Seat::Member(i));

            placements.push(Placement {
                member: entry.member.clone(),
                greened: entry.greened,
                previous_slot: entry.slot,
                desired,
                assigned,
            });
        }

        let behind_everyone = arena
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |i| i + 1);
        let from = match rules.chooser_placement {
            ChooserPlacement::Last => behind_everyone.max(nominal_last),
            ChooserPlacement::FirstOpen => behind_everyone,
        };
        let chooser_slot = find_slot_from(&mut arena, from);
        arena[chooser_slot] = Some(Seat::Chooser);

        let next_queue: Vec<QueueEntry> = arena
            .iter()
            .flatten()
            .enumerate()
            .map(|(slot, seat)| {
                let source = match seat {
                    Seat::Member(i) => &rest[*i],
                    Seat::Chooser => chooser,
                };
                QueueEntry {
                    member: source.member.clone(),
                    slot,
                    greened: false,
                    previous_slot: Some(source.slot),
                }
            })
            .collect();

        check_postconditions(&active, &next_queue, &placements, &chooser.member)?;

        Ok(Advance {
            next_queue,
            chooser: Some(chooser.clone()),
            chooser_slot: Some(chooser_slot),
            removed,
            placements,
        })
    }

    /// Sort by slot and reject queues that reuse a slot or a member.
    fn ordered_input(current: &[QueueEntry]) -> AppResult<Vec<QueueEntry>> {
        let mut ordered = current.to_vec();
        ordered.sort_by_key(|e| e.slot);

        let mut members = HashSet::new();
        for pair in ordered.windows(2) {
            if pair[0].slot == pair[1].slot {
                return Err(AppError::ReorderingInconsistency(format!(
                    "slot {} is held by both {} and {}",
                    pair[0].slot, pair[0].member, pair[1].member
                )));
            }
        }
        for entry in &ordered {
            if !members.insert(entry.member.key()) {
                return Err(AppError::ReorderingInconsistency(format!(
                    "{} appears more than once in the current queue",
                    entry.member
                )));
            }
        }

        Ok(ordered)
    }
}

/// Validate a freshly computed queue against the fairness rules.
///
/// Baseline for the member at filtered index `p` is `p - 1`: where they
/// would sit if nobody ever missed.
fn check_postconditions(
    active: &[QueueEntry],
    next_queue: &[QueueEntry],
    placements: &[Placement],
    chooser: &Member,
) -> AppResult<()> {
    if next_queue.len() != active.len() {
        return Err(AppError::ReorderingInconsistency(format!(
            "{} active members but {} queue entries",
            active.len(),
            next_queue.len()
        )));
    }

    let mut final_index: HashMap<String, usize> = HashMap::new();
    for (expected, entry) in next_queue.iter().enumerate() {
        if entry.slot != expected {
            return Err(AppError::ReorderingInconsistency(format!(
                "{} sits at slot {} where slot {} was expected",
                entry.member, entry.slot, expected
            )));
        }
        if final_index.insert(entry.member.key(), entry.slot).is_some() {
            return Err(AppError::ReorderingInconsistency(format!(
                "{} was placed twice",
                entry.member
            )));
        }
    }

    let chooser_slot = final_index.get(&chooser.key()).copied();
    let last = next_queue.len().saturating_sub(1);
    if chooser_slot != Some(last) {
        return Err(AppError::ReorderingInconsistency(format!(
            "outgoing chooser {} is not behind every other member",
            chooser
        )));
    }

    for (i, placement) in placements.iter().enumerate() {
        let baseline = i;
        let Some(&slot) = final_index.get(&placement.member.key()) else {
            return Err(AppError::ReorderingInconsistency(format!(
                "{} vanished from the queue",
                placement.member
            )));
        };

        if slot > baseline + 1 {
            return Err(AppError::ReorderingInconsistency(format!(
                "{} dropped {} slots (only one is allowed)",
                placement.member,
                slot - baseline
            )));
        }
        if placement.greened && slot > baseline {
            return Err(AppError::ReorderingInconsistency(format!(
                "{} greened but lost ground (slot {} instead of {})",
                placement.member, slot, baseline
            )));
        }
        if slot > placement.previous_slot {
            return Err(AppError::ReorderingInconsistency(format!(
                "{} moved behind their previous slot {} to {}",
                placement.member, placement.previous_slot, slot
            )));
        }
    }

    Ok(())
}
