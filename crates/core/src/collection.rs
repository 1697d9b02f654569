//! Ordering and membership rules shared by the list and edit views.

use crate::types::DbId;

/// An entity that is displayed and ordered by its name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Sort entities by name, ascending.
///
/// The comparison is case-sensitive and byte-wise (`"Zelda" < "alpha"`).
/// The sort is stable, so entities with equal names keep their storage order.
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(|a, b| a.name().cmp(b.name()));
}

/// Whether `id` appears in `ids`.
///
/// Backs the edit form's checkbox pre-fill: a system is checked when its id
/// is among the ids of the systems already attached to the game.
pub fn contains_id<I>(ids: I, id: DbId) -> bool
where
    I: IntoIterator<Item = DbId>,
{
    ids.into_iter().any(|candidate| candidate == id)
}
