//! The canonical body: counting up to a bound.
//!
//! Written with generator syntax, it would read:
//!
//! ```rust,ignore
//! fn counter (n: u64)
//! {
//!     let mut value = 0;
//!     for i in 0 .. n {
//!         value = i;
//!         yield_!(value); // Loop
//!     }
//! }
//! ```

use_prelude!();

use crate::body::FromParams;

/// The yield points of [`Counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, crate::Label)]
pub
enum CounterPoint {
    /// The `yield_!` inside the loop.
    Loop,
}

/// Locals of the counting body, live across its single yield point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub
struct Counter {
    /// Loop bound.
    n: u64,
    /// Loop counter.
    i: u64,
    /// Last yielded value.
    value: u64,
}

impl Counter {
    /// Locals counting up to `n`, not started yet.
    #[inline]
    pub
    fn new (n: u64)
      -> Self
    {
        Self { n, i: 0, value: 0 }
    }

    /// The loop bound.
    #[inline]
    pub
    fn bound (self: &'_ Self)
      -> u64
    {
        self.n
    }

    /// The last yielded value (`0` until the first yield).
    #[inline]
    pub
    fn value (self: &'_ Self)
      -> u64
    {
        self.value
    }
}

impl FromParams for Counter {
    type Params = u64;

    #[inline]
    fn from_params (n: u64)
      -> Self
    {
        Self::new(n)
    }
}

impl Body for Counter {
    type Label = CounterPoint;
    type Yield = u64;
    type Return = ();

    fn step (
        self: &'_ mut Self,
        from: Option<CounterPoint>,
        (): (),
    ) -> Step<CounterPoint, u64>
    {
        match from {
            | None => {
                self.value = 0;
                self.i = 0;
            },
            // back in the loop, right after the `yield_!`
            | Some(CounterPoint::Loop) => {
                self.i += 1;
            },
        }
        if self.i < self.n {
            self.value = self.i;
            Step::Yield(CounterPoint::Loop, self.value)
        } else {
            Step::Return(())
        }
    }
}

/// A [not started][`Position::NotStarted`] generator yielding `0, 1, …, n-1`.
///
/// ```rust
/// use ::resumable::{prelude::*, counter::count_to};
///
/// let mut generator = count_to(2);
/// assert_eq!(generator.resume(()), Ok(YieldOutcome::Yielded(0)));
/// assert_eq!(generator.resume(()), Ok(YieldOutcome::Yielded(1)));
/// assert_eq!(generator.resume(()), Ok(YieldOutcome::Finished(())));
/// ```
#[inline]
pub
fn count_to (n: u64)
  -> GeneratorState<Counter>
{
    GeneratorState::create(n)
}
