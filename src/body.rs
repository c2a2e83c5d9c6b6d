//! A generator body, desugared by hand into an explicit state machine.

use_prelude!();

use ::core::marker::PhantomData;

/// What a single resume step of a [`Body`] ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub
enum Step<L, Y, R = ()> {
    /// The body reached yield point `L`, producing `Y`.
    Yield(L, Y),

    /// The body fell off its end (or `return`ed) with `R`.
    Return(R),
}

/// The resumable computation itself: a struct holding every local that is live
/// across a yield point, plus a `step` function that re-enters the body.
///
/// `step` is called with the label of the yield point the body last
/// suspended at (`None` the first time), so its implementation is a `match`
/// on that label which jumps right after the corresponding yield:
///
/// ```rust
/// use ::resumable::prelude::*;
///
/// /// ```text
/// /// for i in 0 .. rows {
/// ///     yield_!(i);            // Row
/// ///     for j in 0 .. i {
/// ///         yield_!(10 * i + j); // Cell
/// ///     }
/// /// }
/// /// ```
/// struct Triangle { rows: u32, i: u32, j: u32 }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
/// enum Point { Row, Cell }
///
/// impl Body for Triangle {
///     type Label = Point;
///     type Yield = u32;
///     type Return = ();
///
///     fn step (&mut self, from: Option<Point>, (): ())
///       -> Step<Point, u32>
///     {
///         match from {
///             | None => self.i = 0,
///             | Some(Point::Row) => self.j = 0,
///             | Some(Point::Cell) => self.j += 1,
///         }
///         if from.is_some() {
///             if self.j < self.i {
///                 return Step::Yield(Point::Cell, 10 * self.i + self.j);
///             }
///             self.i += 1;
///         }
///         if self.i < self.rows {
///             Step::Yield(Point::Row, self.i)
///         } else {
///             Step::Return(())
///         }
///     }
/// }
///
/// let generator = GeneratorState::new(Triangle { rows: 3, i: 0, j: 0 });
/// assert_eq!(
///     generator.gen_into_iter().collect::<Vec<_>>(),
///     [0, 1, 10, 2, 20, 21],
/// );
/// ```
///
/// The `ResumeArg` is the value handed to
/// [`.resume()`][`GeneratorState::resume`]; on the very first step it is the
/// body's initial argument.
pub
trait Body<ResumeArg = ()> {
    /// The yield points of this body.
    type Label : Label;

    /// The type of the yielded values.
    type Yield;

    /// The type of the value the body finishes with.
    type Return;

    /// Runs the body from right after yield point `from` (or from the top,
    /// when `None`), until the next yield point or until completion.
    fn step (
        self: &'_ mut Self,
        from: Option<Self::Label>,
        resume_arg: ResumeArg,
    ) -> Step<Self::Label, Self::Yield, Self::Return>
    ;
}

/// Bodies which can be built out of some parameters, enabling
/// [`GeneratorState::create`].
pub
trait FromParams : Sized {
    /// The caller-supplied parameters, _e.g._, a loop bound.
    type Params;

    /// Stores `params` into a fresh set of locals. Must not run any of the
    /// body.
    fn from_params (params: Self::Params)
      -> Self
    ;
}

/// A [`Body`] made of an explicit locals value and a step closure.
///
/// See [`from_fn`].
pub
struct FnBody<S, F, L, Y, R = ()> {
    locals: S,
    step: F,
    _step_output: PhantomData<fn() -> Step<L, Y, R>>,
}

/// Builds a [`Body`] out of `locals` and a `step` closure which receives them
/// mutably along with the label to resume from.
///
/// ```rust
/// use ::resumable::{prelude::*, body::from_fn};
///
/// // Running sum of the resume arguments, until a zero is fed.
/// let body = from_fn(0_i32, |sum: &mut i32, _: Option<()>, arg: i32| {
///     if arg == 0 {
///         Step::Return(*sum)
///     } else {
///         *sum += arg;
///         Step::Yield((), *sum)
///     }
/// });
/// let mut generator = GeneratorState::new(body);
/// assert_eq!(generator.resume(3), Ok(YieldOutcome::Yielded(3)));
/// assert_eq!(generator.resume(4), Ok(YieldOutcome::Yielded(7)));
/// assert_eq!(generator.resume(0), Ok(YieldOutcome::Finished(7)));
/// ```
pub
fn from_fn<S, L, A, Y, R, F> (locals: S, step: F)
  -> FnBody<S, F, L, Y, R>
where
    L : Label,
    F : FnMut(&'_ mut S, Option<L>, A) -> Step<L, Y, R>,
{
    FnBody { locals, step, _step_output: PhantomData }
}

impl<S, F, L, Y, R> FnBody<S, F, L, Y, R> {
    /// The locals, as last saved.
    #[inline]
    pub
    fn locals (self: &'_ Self)
      -> &'_ S
    {
        &self.locals
    }

    /// Detaches the locals from the step closure.
    #[inline]
    pub
    fn into_locals (self: Self)
      -> S
    {
        self.locals
    }
}

impl<S, F, L, A, Y, R> Body<A> for FnBody<S, F, L, Y, R>
where
    L : Label,
    F : FnMut(&'_ mut S, Option<L>, A) -> Step<L, Y, R>,
{
    type Label = L;
    type Yield = Y;
    type Return = R;

    #[inline]
    fn step (
        self: &'_ mut Self,
        from: Option<L>,
        resume_arg: A,
    ) -> Step<L, Y, R>
    {
        (self.step)(&mut self.locals, from, resume_arg)
    }
}
