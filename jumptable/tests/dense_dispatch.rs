mod common;

use common::{
    DataParser, IntOp, TEST_DATA, add_one, doubler, negate, print_backward, print_forward, square,
    sum_all,
};
use jumptable::prelude::*;
use jumptable::{BoxFn, DenseTable, JumpTableError, testing::CallRecorder};

fn int_parsers() -> JumpTable<i32, DataParser> {
    jump_table!(DataParser; 3 => print_forward, 5 => print_backward, 8 => sum_all).unwrap()
}

#[test]
fn test_keys_span_zero_to_max() {
    let table = int_parsers();
    assert_eq!(table.keys(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_probe_bound_unbound_and_out_of_range() {
    let table = int_parsers();

    match table.probe(&3) {
        Probe::Bound(parse) => assert_eq!(parse(&TEST_DATA), print_forward(&TEST_DATA)),
        Probe::Unbound => panic!("key 3 should be bound"),
    }
    assert!(!table.probe(&4).is_bound());
    assert!(!table.probe(&9).is_bound());
}

#[test]
fn test_fail_fast_accessor() {
    let table = int_parsers();

    assert_eq!(
        table.invoke(&8, (&TEST_DATA[..],)).unwrap(),
        "Sum: 604".to_string()
    );
    assert!(matches!(table.at(&4), Err(LookupError::OutOfRange { len: 9, .. })));
    assert!(matches!(table.at(&9), Err(LookupError::OutOfRange { len: 9, .. })));
}

#[test]
fn test_walk_all_keys() {
    let table = int_parsers();

    let lines: Vec<String> = table
        .keys()
        .into_iter()
        .map(|key| match table.probe(&key).bound() {
            Some(parse) => format!("{key}: {}", parse(&TEST_DATA)),
            None => format!("No function for key {key}"),
        })
        .collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "No function for key 0");
    assert_eq!(lines[3], "3: AA, FE, 23, 4D, 44");
    assert_eq!(lines[5], "5: 44, 4D, 23, FE, AA");
    assert_eq!(lines[8], "8: Sum: 604");
}

#[test]
fn test_negative_key_fails_construction() {
    let result: Result<JumpTable<i64, DataParser>, _> =
        jump_table!(DataParser; 2i64 => print_forward, -7i64 => sum_all);
    assert_eq!(result.unwrap_err(), BuildError::InvalidKey("-7".into()));
}

#[test]
fn test_reseat_through_at_mut() {
    let mut table = int_parsers();

    *table.at_mut(&5).unwrap() = sum_all;
    assert_eq!(table.invoke(&5, (&TEST_DATA[..],)).unwrap(), "Sum: 604");

    assert!(table.at_mut(&6).is_err());
}

#[test]
fn test_positional_table() {
    let table = jump_table!(IntOp; add_one, square, negate).unwrap();

    let results: Vec<i32> = table
        .keys()
        .iter()
        .map(|key| table.invoke(key, (5,)).unwrap())
        .collect();
    assert_eq!(results, vec![6, 25, -5]);
}

#[test]
fn test_nested_tables() {
    let rows = [
        DenseTable::<usize, IntOp>::from_fns([add_one as IntOp, square]).unwrap(),
        DenseTable::<usize, IntOp>::from_fns([negate as IntOp, doubler]).unwrap(),
    ];
    let grid: DenseTable<usize, DenseTable<usize, IntOp>> = DenseTable::from_fns(rows).unwrap();

    let mut results = Vec::new();
    for i in grid.keys() {
        let row = grid.at(&i).unwrap();
        for j in row.keys() {
            results.push(row.invoke(&j, (5,)).unwrap());
        }
    }
    assert_eq!(results, vec![6, 25, -5, 10]);
}

#[test]
fn test_only_probed_entry_runs() {
    let recorder = CallRecorder::new();
    let table: JumpTable<u8, BoxFn<i32, i32>> = jumptable::build([
        (1u8, recorder.track("one", |x: i32| x + 1)),
        (4u8, recorder.track("four", |x: i32| x + 4)),
    ])
    .unwrap();

    for key in table.keys() {
        if let Some(f) = table.probe(&key).bound() {
            f(0);
        }
    }
    assert_eq!(recorder.calls(), vec!["one", "four"]);

    recorder.clear();
    assert!(table.invoke(&2, (0,)).is_err());
    assert_eq!(recorder.count(), 0);
}

/// Build a table and run `calls` against it, surfacing either failure.
fn run_ops(pairs: Vec<(i32, IntOp)>, calls: &[(i32, i32)]) -> Result<Vec<i32>, JumpTableError> {
    let table: JumpTable<i32, IntOp> = jumptable::build(pairs)?;
    calls
        .iter()
        .map(|&(key, arg)| -> Result<i32, JumpTableError> { Ok(table.invoke(&key, (arg,))?) })
        .collect()
}

#[test]
fn test_build_and_lookup_errors_share_one_type() {
    let ops = || vec![(0, add_one as IntOp), (2, square as IntOp)];

    assert_eq!(run_ops(ops(), &[(0, 4), (2, 3)]), Ok(vec![5, 9]));

    let err = run_ops(ops(), &[(0, 4), (1, 3)]).unwrap_err();
    assert!(matches!(
        err,
        JumpTableError::Lookup(LookupError::OutOfRange { len: 3, .. })
    ));

    let err = run_ops(vec![(-1, negate as IntOp)], &[]).unwrap_err();
    assert_eq!(
        err,
        JumpTableError::Build(BuildError::InvalidKey("-1".to_string()))
    );
    assert_eq!(err.to_string(), "build error: invalid key: -1");
}
