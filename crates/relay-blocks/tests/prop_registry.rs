use proptest::prelude::*;
use relay_blocks::{BlockKind, BlockRegistry, Cell};
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(Cell),
    Remove(Cell),
}

fn small_cell() -> impl Strategy<Value = Cell> {
    (-3i32..3, -3i32..3, -3i32..3)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        small_cell().prop_map(Op::Insert),
        small_cell().prop_map(Op::Remove),
    ]
}

proptest! {
    // The registry always agrees with a set model: no duplicates, exact
    // membership, and len equal to the number of live cells.
    #[test]
    fn matches_set_model(ops in proptest::collection::vec(arb_op(), 1..200)) {
        let mut reg = BlockRegistry::new();
        let mut model: BTreeSet<Cell> = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(c) => {
                    let accepted = reg.insert(c, BlockKind::Wire);
                    prop_assert_eq!(accepted, model.insert(c));
                }
                Op::Remove(c) => {
                    let removed = reg.remove(c);
                    prop_assert_eq!(removed, model.remove(&c));
                }
            }
        }
        prop_assert_eq!(reg.len(), model.len());
        let cells: Vec<Cell> = reg.iter().map(|(c, _)| c).collect();
        let expect: Vec<Cell> = model.iter().copied().collect();
        prop_assert_eq!(cells, expect);
    }

    // rev never decreases and only successful mutations advance it.
    #[test]
    fn rev_is_monotonic(ops in proptest::collection::vec(arb_op(), 1..100)) {
        let mut reg = BlockRegistry::new();
        let mut last = reg.rev();
        for op in ops {
            let changed = match op {
                Op::Insert(c) => reg.insert(c, BlockKind::Wire),
                Op::Remove(c) => reg.remove(c),
            };
            let now = reg.rev();
            if changed {
                prop_assert!(now > last);
            } else {
                prop_assert_eq!(now, last);
            }
            last = now;
        }
    }
}
