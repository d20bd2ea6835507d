use std::collections::{BinaryHeap, VecDeque};
use std::slice;

use thiserror::Error;

/// The accumulated sequence does not fit in the requested fixed-size array.
///
/// Returned only by [`ListBuilder::to_array`]; every other conversion can hold
/// any number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{len} elements do not fit in an array of capacity {capacity}")]
pub struct CapacityError {
    /// Number of elements accumulated in the builder.
    pub len: usize,
    /// Fixed capacity of the destination array.
    pub capacity: usize,
}

/// Single-value push-style insertion, the capability [`ListBuilder::to_adapter`]
/// requires of its destination type.
pub trait Push<T> {
    fn push(&mut self, value: T);
}

impl<T> Push<T> for Vec<T> {
    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }
}

impl<T> Push<T> for VecDeque<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T: Ord> Push<T> for BinaryHeap<T> {
    #[inline]
    fn push(&mut self, value: T) {
        BinaryHeap::push(self, value);
    }
}

impl Push<char> for String {
    #[inline]
    fn push(&mut self, value: char) {
        String::push(self, value);
    }
}

/// Accumulates an ordered sequence of values and converts it, on demand, into
/// a caller-chosen destination shape.
///
/// Append operations take the builder by value and return it, so a whole
/// sequence can be written as one chained expression. Conversions borrow the
/// builder and never mutate it; they can be repeated and interleaved with
/// further appends, with later appends visible only to later conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBuilder<T> {
    items: Vec<T>,
}

/// Starts a builder from zero or more initial values.
///
/// ```
/// use list_builder::list_of;
///
/// let v: Vec<i32> = list_of([1, 2]).push(3).to_container();
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub fn list_of<T>(values: impl IntoIterator<Item = T>) -> ListBuilder<T> {
    ListBuilder {
        items: values.into_iter().collect(),
    }
}

/// Starts a builder of key-value tuples, suitable for collecting into
/// association containers.
///
/// ```
/// use list_builder::map_list_of;
/// use std::collections::BTreeMap;
///
/// let m: BTreeMap<i32, &str> = map_list_of([(1, "a")]).pair(2, "b").to_container();
/// assert_eq!(m[&2], "b");
/// ```
pub fn map_list_of<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> ListBuilder<(K, V)> {
    list_of(pairs)
}

impl<T> ListBuilder<T> {
    /// Creates an empty builder without allocating memory.
    #[inline]
    pub fn new() -> Self {
        ListBuilder { items: Vec::new() }
    }

    /// Creates an empty builder pre-allocated for `cap` elements.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ListBuilder {
            items: Vec::with_capacity(cap),
        }
    }

    /// Appends one value.
    #[inline]
    pub fn push(mut self, value: impl Into<T>) -> Self {
        self.items.push(value.into());
        self
    }

    /// Appends the element type's default value.
    #[inline]
    pub fn push_default(mut self) -> Self
    where
        T: Default,
    {
        self.items.push(T::default());
        self
    }

    /// Appends the result of a zero-argument factory.
    #[inline]
    pub fn push_with(mut self, f: impl FnOnce() -> T) -> Self {
        self.items.push(f());
        self
    }

    /// Appends `count` clones of `value`.
    pub fn repeat(mut self, count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let new_len = self.items.len() + count;
        self.items.resize(new_len, value);
        self
    }

    /// Appends the result of invoking `f`, `count` times.
    ///
    /// The generator is invoked once per appended slot, so a stateful closure
    /// can produce a different value for each of them.
    pub fn repeat_with(mut self, count: usize, mut f: impl FnMut() -> T) -> Self {
        self.items.reserve(count);
        for _ in 0..count {
            self.items.push(f());
        }
        self
    }

    /// Appends every item of an iterator, in order.
    pub fn append_all(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(values);
        self
    }

    /// Returns the number of accumulated elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Builds a collection of the accumulated elements, in order.
    ///
    /// The destination is anything constructible from an iterator, which
    /// covers the std sequence and association containers.
    pub fn to_container<C>(&self) -> C
    where
        T: Clone,
        C: FromIterator<T>,
    {
        self.items.iter().cloned().collect()
    }

    /// Builds a fixed-size array from the accumulated elements.
    ///
    /// Fails if more than `N` elements were accumulated. Slots past the
    /// accumulated elements are filled with the element type's default value.
    pub fn to_array<const N: usize>(&self) -> Result<[T; N], CapacityError>
    where
        T: Clone + Default,
    {
        if self.items.len() > N {
            return Err(CapacityError {
                len: self.items.len(),
                capacity: N,
            });
        }

        let mut array = std::array::from_fn(|_| T::default());
        for (slot, value) in array.iter_mut().zip(&self.items) {
            *slot = value.clone();
        }

        Ok(array)
    }

    /// Builds a default instance of `A` and pushes each accumulated element
    /// into it, in order.
    pub fn to_adapter<A>(&self) -> A
    where
        T: Clone,
        A: Push<T> + Default,
    {
        let mut adapter = A::default();
        for value in &self.items {
            adapter.push(value.clone());
        }
        adapter
    }

    /// Consumes the builder, returning the accumulated sequence.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<K, V> ListBuilder<(K, V)> {
    /// Appends one key-value tuple.
    #[inline]
    pub fn pair(mut self, key: impl Into<K>, value: impl Into<V>) -> Self {
        self.items.push((key.into(), value.into()));
        self
    }
}

impl<T> Default for ListBuilder<T> {
    fn default() -> Self {
        ListBuilder::new()
    }
}

impl<T> FromIterator<T> for ListBuilder<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        list_of(iter)
    }
}

impl<T> Extend<T> for ListBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ListBuilder<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListBuilder<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<ListBuilder<T>> for Vec<T> {
    fn from(builder: ListBuilder<T>) -> Self {
        builder.items
    }
}

#[test]
fn container_order() {
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    let builder = list_of([1, 2]).push(3).push_with(|| 4);

    let v: Vec<i32> = builder.to_container();
    assert_eq!(v, [1, 2, 3, 4]);

    let q: VecDeque<i32> = builder.to_container();
    assert_eq!(q.into_iter().collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn array_padding_and_overflow() {
    use pretty_assertions::assert_eq;

    let builder = list_of([1, 2, 3]);

    assert_eq!(builder.to_array::<5>(), Ok([1, 2, 3, 0, 0]));
    assert_eq!(builder.to_array::<3>(), Ok([1, 2, 3]));
    assert_eq!(
        builder.to_array::<2>(),
        Err(CapacityError { len: 3, capacity: 2 })
    );

    let empty: ListBuilder<i32> = ListBuilder::new();
    assert_eq!(empty.to_array::<2>(), Ok([0, 0]));
}

#[test]
fn conversion_is_repeatable() {
    use pretty_assertions::assert_eq;

    let builder = list_of(["a".to_string()]).push("b".to_string());

    let first: Vec<String> = builder.to_container();
    let second: Vec<String> = builder.to_container();
    assert_eq!(first, second);

    // Appends after a conversion show up in the next one only.
    let builder = builder.push("c".to_string());
    let third: Vec<String> = builder.to_container();
    assert_eq!(first, ["a", "b"]);
    assert_eq!(third, ["a", "b", "c"]);
}

#[test]
fn repeat_values() {
    use pretty_assertions::assert_eq;

    let v: Vec<u8> = list_of([7u8]).repeat(3, 9).to_container();
    assert_eq!(v, [7, 9, 9, 9]);

    let none: Vec<u8> = ListBuilder::new().repeat(0, 1u8).to_container();
    assert!(none.is_empty());
}

#[test]
fn repeat_with_invokes_generator_per_slot() {
    use pretty_assertions::assert_eq;

    let mut next = 0;
    let v: Vec<i32> = ListBuilder::new()
        .repeat_with(4, || {
            next += 1;
            next
        })
        .to_container();

    // One invocation per appended slot, not one shared value.
    assert_eq!(v, [1, 2, 3, 4]);
}

#[test]
fn map_pairs() {
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeMap, HashMap};

    let builder = map_list_of([(1, "a")]).pair(2, "b");

    let sorted: BTreeMap<i32, &str> = builder.to_container();
    assert_eq!(
        sorted.into_iter().collect::<Vec<_>>(),
        [(1, "a"), (2, "b")]
    );

    let hashed: HashMap<i32, &str> = builder.to_container();
    assert_eq!(hashed.len(), 2);
    assert_eq!(hashed[&1], "a");
    assert_eq!(hashed[&2], "b");
}

#[test]
fn default_values() {
    use pretty_assertions::assert_eq;

    let v: Vec<String> = ListBuilder::new()
        .push("x".to_string())
        .push_default()
        .to_container();
    assert_eq!(v, ["x", ""]);
}

#[test]
fn adapter_push_order() {
    use pretty_assertions::assert_eq;
    use std::collections::{BinaryHeap, VecDeque};

    let builder = list_of([3, 1, 2]);

    let q: VecDeque<i32> = builder.to_adapter();
    assert_eq!(q.into_iter().collect::<Vec<_>>(), [3, 1, 2]);

    let mut heap: BinaryHeap<i32> = builder.to_adapter();
    assert_eq!(heap.pop(), Some(3));

    let s: String = list_of(['h', 'i']).to_adapter();
    assert_eq!(s, "hi");
}

#[test]
fn std_trait_surface() {
    use pretty_assertions::assert_eq;

    let mut builder: ListBuilder<i32> = (0..3).collect();
    builder.extend(3..5);
    assert_eq!(builder.as_slice(), [0, 1, 2, 3, 4]);

    let doubled: Vec<i32> = builder.iter().map(|x| x * 2).collect();
    assert_eq!(doubled, [0, 2, 4, 6, 8]);

    let v: Vec<i32> = builder.clone().into();
    assert_eq!(v, builder.into_iter().collect::<Vec<_>>());
}

#[test]
fn append_all_keeps_order() {
    use pretty_assertions::assert_eq;

    let v: Vec<i32> = list_of([1]).append_all(2..5).push(9).to_container();
    assert_eq!(v, [1, 2, 3, 4, 9]);
}

#[test]
fn capacity_error_message() {
    let err = list_of([1, 2, 3]).to_array::<1>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "3 elements do not fit in an array of capacity 1"
    );
}
