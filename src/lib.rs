//! A fixed-capacity, array-backed singly linked list.
//!
//! Every slot of a [`SlabList`] is allocated once, at construction time, and
//! belongs to exactly one of two chains: the active chain starting at the
//! head, or the free chain of vacant slots. Insertion and deletion both
//! happen at the head and only move a slot from one chain to the other, so
//! neither ever allocates.
//!
//! ```
//! use bookslab::{Error, SlabList};
//!
//! let mut list = SlabList::with_capacity(2).unwrap();
//! list.insert_at_head("A").unwrap();
//! list.insert_at_head("B").unwrap();
//! assert_eq!(list.insert_at_head("C"), Err(Error::CapacityExceeded));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["B", "A"]);
//! assert_eq!(list.delete_at_head(), Ok("B"));
//! ```

use std::iter::FusedIterator;

pub mod command;
pub mod library;
pub mod render;

pub use command::Command;
pub use library::Library;

/// Index of a slot in the list.
#[cfg(feature = "slot_usize")]
pub type Slot = usize;

/// Index of a slot in the list.
#[cfg(all(feature = "slot_u64", not(feature = "slot_usize")))]
pub type Slot = u64;

/// Index of a slot in the list.
#[cfg(not(any(feature = "slot_u64", feature = "slot_usize")))]
pub type Slot = u32;

const NUL: Slot = Slot::MAX;

#[inline]
fn link(slot: Slot) -> Option<Slot> {
    if slot == NUL {
        None
    } else {
        Some(slot)
    }
}

/// A linked list that doesn't do dynamic allocations after construction.
#[derive(Debug, Clone)]
pub struct SlabList<D> {
    vec_next: Vec<Slot>,
    free_head: Slot,
    head: Slot,
    len: usize,
    data: Vec<Option<D>>,
}

/// An error.
#[derive(Debug, Clone, Hash, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested capacity cannot be addressed by a slot index.
    #[error("Too large")]
    TooLarge,
    /// No free slot is left.
    #[error("Capacity exceeded")]
    CapacityExceeded,
    /// The slot is out of range or not in use.
    #[error("Invalid slot")]
    InvalidSlot,
    /// The list is empty.
    #[error("Empty collection")]
    EmptyCollection,
    /// A book title was empty.
    #[error("Empty title")]
    EmptyTitle,
    /// A command line could not be understood.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// One entry of the active chain, as seen from outside the list.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Link<T> {
    /// The stored value.
    pub value: T,
    /// The slot holding the value.
    pub slot: Slot,
    /// The slot of the next entry, or `None` for the tail.
    pub next: Option<Slot>,
}

impl<T> Link<T> {
    /// Apply `f` to the value, keeping the linkage.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Link<U> {
        Link {
            value: f(self.value),
            slot: self.slot,
            next: self.next,
        }
    }
}

impl<D> SlabList<D> {
    /// Create a new list with the given capacity.
    ///
    /// All slots start out in the free chain, linked in index order.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        match Slot::try_from(capacity) {
            Ok(n) if n != NUL => {}
            _ => return Err(Error::TooLarge),
        }
        let mut vec_next = Vec::with_capacity(capacity);
        for i in 1..capacity {
            vec_next.push(i as Slot);
        }
        if capacity > 0 {
            vec_next.push(NUL);
        }
        let mut data = Vec::with_capacity(capacity);
        data.resize_with(capacity, || None);
        Ok(Self {
            vec_next,
            free_head: if capacity > 0 { 0 } else { NUL },
            head: NUL,
            len: 0,
            data,
        })
    }

    /// Return the capacity of the list.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Return the length of the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return the number of elements that can still be stored.
    pub fn free(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Return true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head == NUL
    }

    /// Return true if the list is full.
    pub fn is_full(&self) -> bool {
        self.free_head == NUL
    }

    /// Return the slot of the first element.
    pub fn head(&self) -> Option<Slot> {
        link(self.head)
    }

    /// Return the first slot of the free chain.
    pub fn free_head(&self) -> Option<Slot> {
        link(self.free_head)
    }

    /// Prepend an element to the beginning of the list.
    ///
    /// Returns the slot the element was stored in. When no slot is free,
    /// `value` is dropped and the list is left untouched.
    pub fn insert_at_head(&mut self, value: D) -> Result<Slot, Error> {
        let free_slot = self.free_head;
        if free_slot == NUL {
            return Err(Error::CapacityExceeded);
        }
        let i = free_slot as usize;
        debug_assert!(self.data[i].is_none());
        self.free_head = self.vec_next[i];
        self.data[i] = Some(value);
        self.vec_next[i] = self.head;
        self.head = free_slot;
        self.len += 1;
        debug_assert!(self.len <= self.capacity());
        Ok(free_slot)
    }

    /// Remove and return the first element of the list.
    ///
    /// The vacated slot becomes the head of the free chain.
    pub fn delete_at_head(&mut self) -> Result<D, Error> {
        let slot = self.head;
        if slot == NUL {
            return Err(Error::EmptyCollection);
        }
        let i = slot as usize;
        let value = self.data[i].take().ok_or(Error::InvalidSlot)?;
        self.head = self.vec_next[i];
        self.vec_next[i] = self.free_head;
        self.free_head = slot;
        debug_assert!(self.len > 0);
        self.len -= 1;
        Ok(value)
    }

    /// Return a reference to the element stored in `slot`.
    pub fn get(&self, slot: Slot) -> Result<&D, Error> {
        self.data
            .get(slot as usize)
            .and_then(Option::as_ref)
            .ok_or(Error::InvalidSlot)
    }

    /// Iterate over the values, starting at the head.
    pub fn iter(&self) -> SlabIterator<'_, D> {
        SlabIterator {
            links: self.links(),
        }
    }

    /// Iterate over the active chain, exposing each entry's slot and successor.
    pub fn links(&self) -> Links<'_, D> {
        Links {
            list: self,
            slot: self.head,
            remaining: self.len,
        }
    }

    /// Return a point-in-time copy of the active chain, head first.
    pub fn snapshot(&self) -> Vec<Link<&D>> {
        self.links().collect()
    }

    /// Iterate over the slots of the free chain, starting at the free head.
    pub fn free_slots(&self) -> FreeSlots<'_, D> {
        FreeSlots {
            list: self,
            slot: self.free_head,
            remaining: self.free(),
        }
    }
}

impl<D> core::ops::Index<Slot> for SlabList<D> {
    type Output = D;

    fn index(&self, slot: Slot) -> &Self::Output {
        match self.get(slot) {
            Ok(value) => value,
            Err(_) => panic!("slot {slot} is not in use"),
        }
    }
}

/// Iterator over the entries of the active chain.
#[derive(Debug)]
pub struct Links<'a, D> {
    list: &'a SlabList<D>,
    slot: Slot,
    remaining: usize,
}

impl<'a, D> Iterator for Links<'a, D> {
    type Item = Link<&'a D>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slot;
        if slot == NUL || self.remaining == 0 {
            return None;
        }
        let value = self.list.data[slot as usize].as_ref()?;
        let next = self.list.vec_next[slot as usize];
        self.slot = next;
        self.remaining -= 1;
        Some(Link {
            value,
            slot,
            next: link(next),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<D> ExactSizeIterator for Links<'_, D> {}

impl<D> FusedIterator for Links<'_, D> {}

/// Iterator over the values of the active chain.
#[derive(Debug)]
pub struct SlabIterator<'a, D> {
    links: Links<'a, D>,
}

impl<'a, D> Iterator for SlabIterator<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        self.links.next().map(|link| link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl<D> ExactSizeIterator for SlabIterator<'_, D> {}

impl<D> FusedIterator for SlabIterator<'_, D> {}

impl<'a, D> IntoIterator for &'a SlabList<D> {
    type IntoIter = SlabIterator<'a, D>;
    type Item = &'a D;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the slots of the free chain.
#[derive(Debug)]
pub struct FreeSlots<'a, D> {
    list: &'a SlabList<D>,
    slot: Slot,
    remaining: usize,
}

impl<D> Iterator for FreeSlots<'_, D> {
    type Item = Slot;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slot;
        if slot == NUL || self.remaining == 0 {
            return None;
        }
        self.slot = self.list.vec_next[slot as usize];
        self.remaining -= 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<D> ExactSizeIterator for FreeSlots<'_, D> {}

impl<D> FusedIterator for FreeSlots<'_, D> {}

#[test]
fn test() {
    let mut slab = SlabList::with_capacity(3).unwrap();
    let a = slab.insert_at_head(1).unwrap();
    let b = slab.insert_at_head(2).unwrap();
    slab.insert_at_head(3).unwrap();
    assert_eq!(slab.len(), 3);
    assert_eq!(slab.insert_at_head(4), Err(Error::CapacityExceeded));
    assert_eq!(slab[a], 1);
    assert_eq!(slab[b], 2);
    assert_eq!(slab.delete_at_head(), Ok(3));
    assert_eq!(slab.delete_at_head(), Ok(2));
    assert_eq!(slab.len(), 1);
    assert_eq!(slab.free_head(), Some(b));
    assert_eq!(slab.get(b), Err(Error::InvalidSlot));
}

#[test]
fn test_initial_free_chain() {
    let slab = SlabList::<()>::with_capacity(4).unwrap();
    assert_eq!(slab.head(), None);
    assert_eq!(slab.free_head(), Some(0));
    assert_eq!(slab.free_slots().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert!(slab.snapshot().is_empty());
}

#[test]
fn test_zero_capacity() {
    let mut slab = SlabList::with_capacity(0).unwrap();
    assert!(slab.is_empty());
    assert!(slab.is_full());
    assert_eq!(slab.free_head(), None);
    assert_eq!(slab.insert_at_head('x'), Err(Error::CapacityExceeded));
    assert_eq!(slab.delete_at_head(), Err(Error::EmptyCollection));
    assert_eq!(slab.free_slots().count(), 0);
}

#[test]
fn test_links_expose_successors() {
    let mut slab = SlabList::with_capacity(3).unwrap();
    let a = slab.insert_at_head("a").unwrap();
    let b = slab.insert_at_head("b").unwrap();
    let links = slab.snapshot();
    assert_eq!(
        links,
        vec![
            Link {
                value: &"b",
                slot: b,
                next: Some(a),
            },
            Link {
                value: &"a",
                slot: a,
                next: None,
            },
        ]
    );
    assert_eq!(slab.links().len(), 2);
    assert_eq!(slab.free_slots().len(), 1);
}
