//! K-ordering: comparing IDs by their time-ordered prefix.
//!
//! Random layouts compare by the time field alone, so two IDs from the same
//! tick are equivalent. Sequence layouts compare the whole ID, which (for one
//! generator) is generation order.
//!
//! Equality and hashing of IDs are unaffected and always look at every byte.

use crate::Layout;
use core::cmp::Ordering;

/// Compares two IDs by their first [`Layout::ORDER_BYTES`] bytes.
///
/// # Example
/// ```
/// use tickid::{Layout, TickId, ordering};
/// use core::cmp::Ordering;
///
/// let a = TickId::from_components(5, 0, 999);
/// let b = TickId::from_components(5, 0, 1);
/// assert_eq!(ordering::compare(&a, &b), Ordering::Equal);
/// assert_eq!(ordering::compare(&a, &TickId::from_components(6, 0, 1)), Ordering::Less);
/// ```
#[must_use]
pub fn compare<ID: Layout>(a: &ID, b: &ID) -> Ordering {
    a.as_bytes()[..ID::ORDER_BYTES].cmp(&b.as_bytes()[..ID::ORDER_BYTES])
}

/// Sorts IDs by [`compare`]. The sort is stable, so IDs from the same tick of
/// a random layout keep their relative order.
pub fn sort<ID: Layout>(ids: &mut [ID]) {
    ids.sort_by(compare);
}

/// Returns `true` if `ids` is in non-decreasing [`compare`] order.
#[must_use]
pub fn is_sorted<ID: Layout>(ids: &[ID]) -> bool {
    ids.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Wraps an ID so that `Ord` follows [`compare`].
///
/// Useful as a key in ordered collections or with `sort_by_key`.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct KOrd<ID>(pub ID);

impl<ID: Layout> PartialEq for KOrd<ID> {
    fn eq(&self, other: &Self) -> bool {
        compare(&self.0, &other.0) == Ordering::Equal
    }
}

impl<ID: Layout> Eq for KOrd<ID> {}

impl<ID: Layout> PartialOrd for KOrd<ID> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<ID: Layout> Ord for KOrd<ID> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MonoId, TaggedId, TickId};

    #[test]
    fn random_layouts_ignore_entropy() {
        let a = TickId::from_components(7, 0, 0xFFFF);
        let b = TickId::from_components(7, 0, 0x0001);
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert!(a > b, "derived Ord still looks at every byte");
        assert_ne!(a, b);
    }

    #[test]
    fn sequence_layouts_compare_whole_id() {
        let a = MonoId::from_components(7, 0, 1);
        let b = MonoId::from_components(7, 0, 2);
        assert_eq!(compare(&a, &b), Ordering::Less);

        let x = TaggedId::from_components(7, 2, 1);
        let y = TaggedId::from_components(7, 1, 9);
        assert_eq!(compare(&x, &y), Ordering::Greater);
    }

    #[test]
    fn sort_is_stable_within_a_tick() {
        let mut ids = vec![
            TickId::from_components(2, 0, 30),
            TickId::from_components(1, 0, 20),
            TickId::from_components(2, 0, 10),
            TickId::from_components(1, 0, 40),
        ];
        assert!(!is_sorted(&ids));
        sort(&mut ids);
        assert!(is_sorted(&ids));
        let entropy: Vec<u64> = ids.iter().map(|id| id.entropy()).collect();
        assert_eq!(entropy, [20, 40, 30, 10]);
    }

    #[test]
    fn kord_orders_by_prefix() {
        let mut ids = vec![
            KOrd(TickId::from_components(3, 0, 1)),
            KOrd(TickId::from_components(1, 0, 2)),
        ];
        ids.sort();
        assert_eq!(ids[0].0.time(), 1);
        assert_eq!(
            KOrd(TickId::from_components(3, 0, 5)),
            KOrd(TickId::from_components(3, 0, 6))
        );
    }

    #[test]
    fn sort_orders_generated_ids_by_injected_time() {
        use crate::{
            CUSTOM_EPOCH, CounterSequencer, Generator, RandomSequencer, SystemClock, ThreadRandom,
        };
        use core::time::Duration;
        use std::time::UNIX_EPOCH;

        let generator: Generator<TickId, _, _> = Generator::new(
            RandomSequencer::for_layout::<TickId>(ThreadRandom),
            SystemClock,
        );
        let start = UNIX_EPOCH + CUSTOM_EPOCH;
        // Three IDs per second, so equal times carry different entropy.
        let created: Vec<TickId> = (0..60)
            .map(|i| generator.next_id_at(start + Duration::from_secs(i / 3)))
            .collect();

        let mut ids = created.clone();
        ids.reverse();
        ids.rotate_left(17);
        sort(&mut ids);
        assert!(is_sorted(&ids));
        let times: Vec<u64> = ids.iter().map(|id| id.time()).collect();
        let expected: Vec<u64> = created.iter().map(|id| id.time()).collect();
        assert_eq!(times, expected);
        for same in created.chunks(3) {
            assert_eq!(compare(&same[0], &same[1]), Ordering::Equal);
            assert_eq!(compare(&same[1], &same[2]), Ordering::Equal);
        }

        let generator: Generator<MonoId, _, _> =
            Generator::new(CounterSequencer::for_layout::<MonoId>(), SystemClock);
        let created: Vec<MonoId> = (0..60)
            .map(|i| generator.next_id_at(start + Duration::from_millis(i / 3)))
            .collect();
        let mut ids = created.clone();
        ids.reverse();
        sort(&mut ids);
        assert_eq!(ids, created);
    }

    #[test]
    fn empty_and_single_are_sorted() {
        assert!(is_sorted::<MonoId>(&[]));
        assert!(is_sorted(&[MonoId::NIL]));
    }
}
