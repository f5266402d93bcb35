//! # Callable values
//!
//! A jump table is monomorphic in the shape of its callables: every entry
//! shares one signature, and only the concrete function bound to each key
//! differs. [`Callable`] names that shape as an argument tuple so generic code
//! can invoke whatever a table hands back.
//!
//! # Usage Patterns
//!
//! 1. **Function pointers**: `fn(&[u8]) -> i32`, the cheapest entry type
//! 2. **Boxed closures**: [`BoxFn`] when entries capture state
//! 3. **Shared closures**: `Arc<dyn Fn(..)>` when entries are shared across tables

/// A boxed, shareable single-argument closure.
///
/// Use this when a table holds closures with different captures, which
/// otherwise all have distinct types.
pub type BoxFn<A, R> = Box<dyn Fn(A) -> R + Send + Sync + 'static>;

/// Something that can be invoked with the argument tuple `Args`.
///
/// Implemented for every `Fn` of arity zero through four, so plain functions,
/// fn pointers, closures and boxed closures all qualify.
///
/// # Example
///
/// ```rust
/// use jumptable_core::Callable;
///
/// fn double(x: i32) -> i32 {
///     x * 2
/// }
///
/// assert_eq!(double.invoke((21,)), 42);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked with arguments `{Args}`",
    label = "not callable with these arguments",
    note = "Table entries must be functions or closures; arguments are passed as a tuple."
)]
pub trait Callable<Args> {
    /// The value produced by the call.
    type Output;

    /// Call `self` with the unpacked argument tuple.
    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg),*> Callable<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            #[inline]
            fn invoke(&self, args: ($($arg,)*)) -> Ret {
                let ($($arg,)*) = args;
                (self)($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn invoke_with<F: Callable<(i32,), Output = i32>>(f: &F, x: i32) -> i32 {
        Callable::invoke(f, (x,))
    }

    #[test]
    fn test_fn_item_and_pointer() {
        assert_eq!(invoke_with(&add_one, 5), 6);

        let ptr: fn(i32) -> i32 = add_one;
        assert_eq!(invoke_with(&ptr, 9), 10);
    }

    #[test]
    fn test_closures_of_each_arity() {
        let zero = || 7;
        let two = |a: i32, b: i32| a * b;
        let three = |a: i32, b: i32, c: i32| a + b + c;
        let four = |a: u8, b: u8, c: u8, d: u8| [a, b, c, d];

        assert_eq!(zero.invoke(()), 7);
        assert_eq!(two.invoke((6, 7)), 42);
        assert_eq!(three.invoke((1, 2, 3)), 6);
        assert_eq!(four.invoke((1, 2, 3, 4)), [1, 2, 3, 4]);
    }

    #[test]
    fn test_boxed_closure() {
        let offset = 100;
        let boxed: BoxFn<i32, i32> = Box::new(move |x| x + offset);
        assert_eq!(invoke_with(&boxed, 1), 101);
    }
}
