//! Text rendering of the list, for terminal front-ends.

use std::fmt::Display;

use crate::{Library, Link, Slot};

/// Render the active chain on a single line, e.g. `[2:C] -> [1:B] -> [0:A] -> none`.
pub fn render_chain<T, I>(links: I) -> String
where
    T: Display,
    I: IntoIterator<Item = Link<T>>,
{
    let mut out = String::new();
    for link in links {
        out.push_str(&format!("[{}:{}]", link.slot, link.value));
        out.push_str(match link.next {
            Some(_) => " -> ",
            None => " -> none",
        });
    }
    if out.is_empty() {
        out.push_str("(empty)");
    }
    out
}

/// Render the free chain, e.g. `free: 3 -> 4 -> none`.
pub fn render_free<I>(free_slots: I) -> String
where
    I: IntoIterator<Item = Slot>,
{
    let mut out = String::from("free: ");
    for slot in free_slots {
        out.push_str(&format!("{slot} -> "));
    }
    out.push_str("none");
    out
}

/// Render the whole library: occupancy, the books and the vacant slots.
pub fn render_library(library: &Library) -> String {
    format!(
        "books {}/{}\n{}\n{}",
        library.len(),
        library.capacity(),
        render_chain(library.books()),
        render_free(library.free_slots()),
    )
}
