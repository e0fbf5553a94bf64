//! Operands of one call must share an element type.

use sorted_intersect::intersect_update_merge;
use std::collections::BTreeSet;

fn main() {
    let allowed: BTreeSet<i64> = BTreeSet::new();
    let mut target: Vec<i32> = vec![1];
    intersect_update_merge(&allowed, &mut target);
}
