//! A small library's book collection, stored in a [`SlabList`].
//!
//! Books are shelved at the head of the list, so the most recently added
//! book is the first one listed and the first one removed.

use tracing::{debug, warn};

use crate::{Error, FreeSlots, Link, SlabList, Slot};

/// A fixed-size book collection.
#[derive(Debug, Clone)]
pub struct Library {
    books: SlabList<String>,
}

impl Library {
    /// Create a library able to hold `capacity` books.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            books: SlabList::with_capacity(capacity)?,
        })
    }

    /// Add a book to the front of the collection.
    ///
    /// Surrounding whitespace is trimmed from the title; a blank title is
    /// rejected without touching the collection.
    pub fn add_book(&mut self, title: &str) -> Result<Slot, Error> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        match self.books.insert_at_head(title.to_owned()) {
            Ok(slot) => {
                debug!(slot, title, len = self.books.len(), "Book added");
                Ok(slot)
            }
            Err(e) => {
                warn!(
                    capacity = self.books.capacity(),
                    title, "No space available to add a new book"
                );
                Err(e)
            }
        }
    }

    /// Remove the most recently added book and return its title.
    pub fn delete_book(&mut self) -> Result<String, Error> {
        let slot = self.books.head();
        match self.books.delete_at_head() {
            Ok(title) => {
                debug!(?slot, title = %title, len = self.books.len(), "Book deleted");
                Ok(title)
            }
            Err(e) => {
                warn!("Library is empty, no book to delete");
                Err(e)
            }
        }
    }

    /// Return the books, most recently added first, with their slot linkage.
    pub fn books(&self) -> Vec<Link<&str>> {
        self.books
            .links()
            .map(|link| link.map(String::as_str))
            .collect()
    }

    /// Iterate over the vacant slots, in the order they will be reused.
    pub fn free_slots(&self) -> FreeSlots<'_, String> {
        self.books.free_slots()
    }

    /// Return the number of books the library can hold.
    pub fn capacity(&self) -> usize {
        self.books.capacity()
    }

    /// Return the number of books in the library.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Return true if the library holds no book.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
