use bookslab::{Error, SlabList};

#[test]
fn test_scenario_capacity_five() {
    let mut slab = SlabList::with_capacity(5).unwrap();
    slab.insert_at_head("A").unwrap();
    slab.insert_at_head("B").unwrap();
    slab.insert_at_head("C").unwrap();

    let values: Vec<_> = slab.snapshot().into_iter().map(|l| *l.value).collect();
    assert_eq!(values, vec!["C", "B", "A"]);

    assert_eq!(slab.delete_at_head(), Ok("C"));
    let values: Vec<_> = slab.iter().copied().collect();
    assert_eq!(values, vec!["B", "A"]);

    // Three more fill the two untouched slots and the one vacated by the delete.
    slab.insert_at_head("D").unwrap();
    slab.insert_at_head("E").unwrap();
    slab.insert_at_head("D").unwrap();
    assert_eq!(slab.insert_at_head("E"), Err(Error::CapacityExceeded));
    assert_eq!(slab.len(), 5);
    assert!(slab.is_full());
}

#[test]
fn test_full_insert_leaves_state_unchanged() {
    let mut slab = SlabList::with_capacity(3).unwrap();
    for i in 0..3 {
        slab.insert_at_head(i).unwrap();
    }
    let before: Vec<_> = slab.snapshot().into_iter().map(|l| l.map(|v| *v)).collect();
    let head = slab.head();

    assert_eq!(slab.insert_at_head(99), Err(Error::CapacityExceeded));

    let after: Vec<_> = slab.snapshot().into_iter().map(|l| l.map(|v| *v)).collect();
    assert_eq!(before, after);
    assert_eq!(slab.head(), head);
    assert_eq!(slab.free_head(), None);
}

#[test]
fn test_empty_delete_leaves_state_unchanged() {
    let mut slab = SlabList::<String>::with_capacity(3).unwrap();
    let free: Vec<_> = slab.free_slots().collect();

    assert_eq!(slab.delete_at_head(), Err(Error::EmptyCollection));

    assert_eq!(slab.head(), None);
    assert_eq!(slab.free_head(), Some(0));
    assert_eq!(slab.free_slots().collect::<Vec<_>>(), free);
}

#[test]
fn test_deleted_slot_is_reused_first() {
    let mut slab = SlabList::with_capacity(4).unwrap();
    slab.insert_at_head(1).unwrap();
    let b = slab.insert_at_head(2).unwrap();
    slab.delete_at_head().unwrap();

    assert_eq!(slab.free_head(), Some(b));
    assert_eq!(slab.free_slots().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(slab.insert_at_head(3).unwrap(), b);
    assert_eq!(slab[b], 3);
}

#[test]
fn test_get_rejects_free_and_out_of_range_slots() {
    let mut slab = SlabList::with_capacity(2).unwrap();
    let a = slab.insert_at_head('a').unwrap();
    assert_eq!(slab.get(a), Ok(&'a'));
    assert_eq!(slab.get(1), Err(Error::InvalidSlot));
    assert_eq!(slab.get(7), Err(Error::InvalidSlot));
}

#[test]
fn test_insert_then_delete_restores_content() {
    let mut slab = SlabList::with_capacity(3).unwrap();
    slab.insert_at_head(10).unwrap();
    slab.insert_at_head(20).unwrap();
    let before: Vec<_> = slab.iter().copied().collect();

    for round in 0..10 {
        slab.insert_at_head(round).unwrap();
        assert_eq!(slab.delete_at_head(), Ok(round));
        assert_eq!(slab.iter().copied().collect::<Vec<_>>(), before);
        assert_eq!(slab.len(), 2);
    }
}

#[test]
fn test_too_large() {
    let capacity = bookslab::Slot::MAX as usize;
    assert_eq!(
        SlabList::<u8>::with_capacity(capacity).unwrap_err(),
        Error::TooLarge
    );
}
