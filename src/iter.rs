//! Generators as [`Iterator`]s.

use_prelude!();

use ::core::iter::FusedIterator;

/// An [`Iterator`] over the values yielded by an argument-less generator.
///
/// Obtained through [`.gen_iter()`][`crate::GeneratorExt::gen_iter`] or
/// [`.gen_into_iter()`][`crate::GeneratorExt::gen_into_iter`].
///
/// Iteration stops at the first [`Finished`][`YieldOutcome::Finished`]
/// _or_ at the first [`ResumeError`]: the iterator is fused, and which of
/// the two ended it is kept until [`.finish()`][`Iter::finish`] hands it out.
pub
struct Iter<G>
where
    G : Generator<()>,
{
    generator: G,
    end: Option<Result<G::Return>>,
}

impl<G> Iter<G>
where
    G : Generator<()>,
{
    /// Iterates over what `generator` yields from now on.
    #[inline]
    pub
    fn new (generator: G)
      -> Self
    {
        Self { generator, end: None }
    }

    /// Runs the generator to completion (discarding any further yielded
    /// value), and returns what ended it.
    ///
    /// ```rust
    /// use ::resumable::{prelude::*, counter::count_to};
    ///
    /// let mut generator = count_to(3);
    /// assert_eq!(generator.gen_iter().finish(), Ok(()));
    /// // Iterating an already completed generator is a bug, which is reported.
    /// assert_eq!(
    ///     generator.gen_iter().finish(),
    ///     Err(ResumeError::IllegalResume),
    /// );
    /// ```
    pub
    fn finish (mut self: Self)
      -> Result<G::Return>
    {
        loop {
            if let Some(end) = self.end.take() {
                return end;
            }
            let _ = self.next();
        }
    }

    /// What ended the iteration, if it has ended.
    #[inline]
    pub
    fn end (self: &'_ Self)
      -> Option<&'_ Result<G::Return>>
    {
        self.end.as_ref()
    }

    /// Gets the generator back, _e.g._, to keep resuming it after a partial
    /// iteration.
    #[inline]
    pub
    fn into_inner (self: Self)
      -> G
    {
        self.generator
    }
}

impl<G> Iterator for Iter<G>
where
    G : Generator<()>,
{
    type Item = G::Yield;

    fn next (self: &'_ mut Self)
      -> Option<G::Yield>
    {
        if self.end.is_some() {
            return None;
        }
        match self.generator.resume(()) {
            | Ok(YieldOutcome::Yielded(value)) => Some(value),
            | Ok(YieldOutcome::Finished(returned)) => {
                self.end = Some(Ok(returned));
                None
            },
            | Err(err) => {
                ::log::error!("iteration stopped: {}", err);
                self.end = Some(Err(err));
                None
            },
        }
    }
}

impl<G> FusedIterator for Iter<G>
where
    G : Generator<()>,
{}

impl<B> IntoIterator for GeneratorState<B>
where
    B : Body,
{
    type IntoIter = Iter<Self>;
    type Item = B::Yield;

    #[inline]
    fn into_iter (self: Self)
      -> Iter<Self>
    {
        Iter::new(self)
    }
}

impl<'generator, B> IntoIterator for &'generator mut GeneratorState<B>
where
    B : Body,
{
    type IntoIter = Iter<Self>;
    type Item = B::Yield;

    #[inline]
    fn into_iter (self: Self)
      -> Iter<Self>
    {
        Iter::new(self)
    }
}

/// Loops over the values yielded by a generator, and then evaluates to what
/// ended it: `Ok(return_value)` or `Err(ResumeError)`.
///
/// ```rust
/// use ::resumable::{prelude::*, body::from_fn};
///
/// type Question = &'static str;
/// type Answer = i32;
///
/// let answer = from_fn((), |&mut (), from: Option<()>, ()| match from {
///     | None => Step::Yield((), "What is the answer to life, the universe and everything?"),
///     | Some(()) => Step::<(), Question, Answer>::Return(42),
/// });
/// let mut generator = GeneratorState::new(answer);
///
/// let ret = gen_iter!(
///     for question in &mut generator {
///         assert_eq!(
///             question,
///             "What is the answer to life, the universe and everything?",
///         );
///     }
/// );
/// assert_eq!(ret, Ok(42));
/// ```
///
/// Leaving the loop early with `break` still runs the generator to
/// completion before evaluating to its return value.
#[macro_export]
macro_rules! gen_iter {
    (
        @split [$pat:pat] [$($generator:tt)*]
        $body:block
    ) => ({
        let mut iter = $crate::iter::Iter::new($($generator)*);
        while let $crate::core::option::Option::Some($pat) =
            $crate::core::iter::Iterator::next(&mut iter)
        $body
        iter.finish()
    });

    (
        @split [$pat:pat] [$($generator:tt)*]
        $next:tt $($rest:tt)+
    ) => (
        $crate::gen_iter!(
            @split [$pat] [$($generator)* $next]
            $($rest)+
        )
    );

    (
        for $pat:pat in $($rest:tt)+
    ) => (
        $crate::gen_iter!(@split [$pat] [] $($rest)+)
    );
}
