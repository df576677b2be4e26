use crate::errors::{AppError, AppResult};

/// Find the nearest free slot at or before `desired`.
///
/// `desired` is clamped to the last index of `slots`. Running past index 0
/// means the arena is over-full, which a well-formed rotation never produces.
pub fn find_slot<T>(slots: &[Option<T>], desired: usize) -> AppResult<usize> {
    if slots.is_empty() {
        return Err(AppError::NoAvailableSlot { desired });
    }

    let mut index = desired.min(slots.len() - 1);

    loop {
        if slots[index].is_none() {
            return Ok(index);
        }
        if index == 0 {
            return Err(AppError::NoAvailableSlot { desired });
        }
        index -= 1;
    }
}

/// First free slot at or after `from`, growing the arena when it is full.
pub fn find_slot_from<T>(slots: &mut Vec<Option<T>>, from: usize) -> usize {
    let mut index = from;
    while index < slots.len() && slots[index].is_some() {
        index += 1;
    }
    if index >= slots.len() {
        slots.resize_with(index + 1, || None);
    }
    index
}
