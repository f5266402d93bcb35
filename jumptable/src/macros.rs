//! Table literals.

/// Build a jump table from a literal list of entries.
///
/// The first argument is the callable type every entry is coerced to. Two
/// forms follow it:
///
/// - `key => callable, ...` builds the table selected by the key type (see
///   [`TableKey`](crate::TableKey)) and returns
///   `Result<JumpTable<K, F>, BuildError>`.
/// - `callable, ...` builds a [`DenseTable<usize, F>`](crate::DenseTable) keyed
///   by position.
///
/// # Example
///
/// ```rust
/// use jumptable::{DispatchTable, jump_table};
///
/// type Op = fn(i32) -> i32;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let by_name = jump_table!(Op; "inc" => add_one, "sq" => square).unwrap();
/// assert_eq!(by_name.invoke(&"sq", (7,)), Ok(49));
///
/// let by_index = jump_table!(Op; add_one, square).unwrap();
/// assert_eq!(by_index.keys(), vec![0, 1]);
/// ```
#[macro_export]
macro_rules! jump_table {
    ($ty:ty; $($key:expr => $callable:expr),+ $(,)?) => {
        $crate::build([
            $(($key, { let callable: $ty = $callable; callable })),+
        ])
    };
    ($ty:ty; $($callable:expr),+ $(,)?) => {
        $crate::DenseTable::<usize, $ty>::from_fns([
            $({ let callable: $ty = $callable; callable }),+
        ])
    };
}
