//! Head churn and snapshot cost at several fill levels.

use bookslab::SlabList;
use std::time::{Duration, Instant};

const CAPACITY: usize = 4_096;
const CHURN_OPS: usize = 200_000;
const SNAPSHOTS: u32 = 200;

fn per_op(elapsed: Duration, ops: usize) -> Duration {
    elapsed / ops.max(1) as u32
}

/// Fill the list to `fill` entries, then randomly insert or delete at the
/// head while keeping the length within a small band around `fill`.
fn churn(fill: usize) -> (Duration, usize) {
    let mut list = SlabList::with_capacity(CAPACITY).expect("Failed to create list");
    for i in 0..fill {
        list.insert_at_head(i).expect("Fill fits the capacity");
    }

    let low = fill.saturating_sub(16);
    let high = (fill + 16).min(CAPACITY);
    let mut refused = 0;
    let start = Instant::now();
    for i in 0..CHURN_OPS {
        let grow = match list.len() {
            len if len <= low => true,
            len if len >= high => false,
            _ => fastrand::bool(),
        };
        let ok = if grow {
            list.insert_at_head(i).is_ok()
        } else {
            list.delete_at_head().is_ok()
        };
        if !ok {
            refused += 1;
        }
    }
    (start.elapsed(), refused)
}

fn snapshot_cost(fill: usize) -> (Duration, usize) {
    let mut list = SlabList::with_capacity(CAPACITY).expect("Failed to create list");
    for _ in 0..fill {
        list.insert_at_head(fastrand::u64(..)).expect("Fill fits the capacity");
    }

    let mut entries = 0;
    let start = Instant::now();
    for _ in 0..SNAPSHOTS {
        entries += list.snapshot().len();
    }
    (start.elapsed() / SNAPSHOTS, entries)
}

fn main() {
    println!("SlabList benchmark, capacity {CAPACITY}");
    println!("{:>8} {:>14} {:>8} {:>16}", "fill", "churn/op", "refused", "snapshot");

    for fill in [0, CAPACITY / 4, CAPACITY / 2, CAPACITY - 8, CAPACITY] {
        let (churn_time, refused) = churn(fill);
        let (snapshot_time, entries) = snapshot_cost(fill);
        assert_eq!(entries, fill * SNAPSHOTS as usize);
        println!(
            "{:>8} {:>14?} {:>8} {:>16?}",
            fill,
            per_op(churn_time, CHURN_OPS),
            refused,
            snapshot_time,
        );
    }
}
