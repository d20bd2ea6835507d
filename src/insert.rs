use std::iter;

/// Binds an [`Inserter`] to a caller-owned container.
///
/// ```
/// use list_builder::insert_into;
///
/// let mut v = vec![1];
/// insert_into(&mut v).add(2).add(3);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub fn insert_into<C>(container: &mut C) -> Inserter<'_, C> {
    Inserter { container }
}

/// Inserts values one at a time into a borrowed container, with a chainable
/// call interface.
///
/// Each call hands the value to the container's own insertion operation, so
/// the container's semantics (ordering, deduplication, key replacement) apply
/// unchanged. The adapter itself never removes, looks up, or converts.
pub struct Inserter<'a, C> {
    container: &'a mut C,
}

impl<'a, C> Inserter<'a, C> {
    /// Inserts one value.
    #[inline]
    pub fn add<T>(self, value: T) -> Self
    where
        C: Extend<T>,
    {
        self.container.extend(iter::once(value));
        self
    }

    /// Inserts the result of a zero-argument factory.
    #[inline]
    pub fn add_with<T>(self, f: impl FnOnce() -> T) -> Self
    where
        C: Extend<T>,
    {
        self.add(f())
    }

    /// Inserts one key-value tuple, for association containers.
    #[inline]
    pub fn pair<K, V>(self, key: K, value: V) -> Self
    where
        C: Extend<(K, V)>,
    {
        self.add((key, value))
    }

    /// Inserts every item of an iterator, in order.
    pub fn add_all<T>(self, values: impl IntoIterator<Item = T>) -> Self
    where
        C: Extend<T>,
    {
        self.container.extend(values);
        self
    }
}

#[test]
fn appends_in_call_order() {
    use pretty_assertions::assert_eq;

    let mut v = vec![10, 20];
    insert_into(&mut v).add(30).add_with(|| 40).add(50);
    assert_eq!(v, [10, 20, 30, 40, 50]);
}

#[test]
fn set_multiplicity() {
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    let mut set = BTreeSet::new();
    insert_into(&mut set).add(3).add(1).add(3).add(2);

    // The set's own semantics decide what lands where.
    assert_eq!(set.into_iter().collect::<Vec<i32>>(), [1, 2, 3]);
}

#[test]
fn map_pairs() {
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    let mut map: HashMap<i32, &str> = HashMap::new();
    insert_into(&mut map).pair(1, "a").pair(2, "b");

    assert_eq!(map.len(), 2);
    assert_eq!(map[&1], "a");
    assert_eq!(map[&2], "b");
}

#[test]
fn bulk_insert() {
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    let mut q: VecDeque<i32> = VecDeque::new();
    insert_into(&mut q).add(0).add_all(1..4).add(9);
    assert_eq!(q.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3, 9]);
}
