//! The generator state machine, and the [`Generator`] abstraction drivers are
//! written against.

use_prelude!();

use ::core::{
    marker::PhantomData,
    mem,
};

use crate::{
    body::FromParams,
    iter::Iter,
};

/// Value obtained when [resuming][`Generator::resume`] a generator.
///
/// This corresponds to:
///
///   - either a [suspension point][`YieldOutcome::Yielded`],
///
///   - or a [termination point][`YieldOutcome::Finished`].
#[derive(
    Debug,
    Clone, Copy,
    PartialOrd, Ord,
    PartialEq, Eq,
    Hash
)]
pub
enum YieldOutcome<Yield, Return = ()> {
    /// The generator suspended with a value.
    ///
    /// It is parked at a yield point and may be resumed again later (or
    /// simply dropped).
    Yielded(Yield),

    /// The generator ran to completion, with the given return value.
    ///
    /// Resuming it again fails with [`ResumeError::IllegalResume`].
    Finished(Return),
}

impl<Yield, Return> YieldOutcome<Yield, Return> {
    /// The yielded value, if any.
    #[inline]
    pub
    fn yielded (self: Self)
      -> Option<Yield>
    {
        match self {
            | Self::Yielded(value) => Some(value),
            | Self::Finished(_) => None,
        }
    }

    /// Whether this is a [`Finished`][`YieldOutcome::Finished`] outcome.
    #[inline]
    pub
    fn is_finished (self: &'_ Self)
      -> bool
    {
        matches!(*self, Self::Finished(_))
    }
}

/// One instance of a resumable computation: a [`Body`] (which owns the locals
/// that survive suspensions) along with the [`Position`] it is parked at.
///
/// ```rust
/// use ::resumable::{prelude::*, counter::Counter};
///
/// let mut generator = GeneratorState::<Counter>::create(5);
/// for expected in 0 .. 5 {
///     assert_eq!(generator.resume(()), Ok(YieldOutcome::Yielded(expected)));
/// }
/// assert_eq!(generator.resume(()), Ok(YieldOutcome::Finished(())));
/// assert_eq!(generator.resume(()), Err(ResumeError::IllegalResume));
/// ```
///
/// The locals are private to the body: outside of a resume step they can
/// only be [looked at][`GeneratorState::body`].
///
/// Dropping a generator before it completes is how it gets abandoned; since
/// it owns nothing but its locals, nothing else needs to happen.
pub
struct GeneratorState<B, ResumeArg = ()>
where
    B : Body<ResumeArg>,
{
    body: B,

    position: Position<B::Label>,

    /// How many times each yield point has been reached.
    visits: <B::Label as Label>::Counters,

    yields: u64,

    _resume_arg: PhantomData<fn(ResumeArg)>,
}

impl<B, ResumeArg> GeneratorState<B, ResumeArg>
where
    B : Body<ResumeArg>,
{
    /// A [not started][`Position::NotStarted`] generator over `body`.
    ///
    /// None of the body runs until the first
    /// [`.resume()`][`GeneratorState::resume`].
    pub
    fn new (body: B)
      -> Self
    {
        Self {
            body,
            position: Position::NotStarted,
            visits: <B::Label as Label>::counters(),
            yields: 0,
            _resume_arg: PhantomData,
        }
    }

    /// Builds the body's locals out of `params`, and wraps them in a
    /// [not started][`Position::NotStarted`] generator.
    pub
    fn create (params: B::Params)
      -> Self
    where
        B : FromParams,
    {
        Self::new(B::from_params(params))
    }

    /// Resumes the execution of this generator.
    ///
    /// The body is re-entered right after the yield point it last suspended
    /// at (or from the top, if it has not started yet), and runs until it
    /// either yields again or completes.
    ///
    /// # Errors
    ///
    ///   - [`ResumeError::IllegalResume`] if the generator had already
    ///     [completed][`Position::Completed`]. This is reported on every such
    ///     call; the body is not run.
    ///
    ///   - [`ResumeError::Poisoned`] if the body panicked during a previous
    ///     resume.
    pub
    fn resume (
        self: &'_ mut Self,
        resume_arg: ResumeArg,
    ) -> Result<YieldOutcome<B::Yield, B::Return>>
    {
        let from = match mem::replace(&mut self.position, Position::Running) {
            | Position::NotStarted => None,
            | Position::Suspended(Suspension { label, .. }) => Some(label),
            | Position::Completed => {
                self.position = Position::Completed;
                return Err(ResumeError::IllegalResume);
            },
            | Position::Running => return Err(ResumeError::Poisoned),
        };
        // An unwinding `step` leaves `Running` behind: the generator is poisoned.
        match self.body.step(from, resume_arg) {
            | Step::Yield(label, value) => {
                let visits = &mut self.visits.as_mut()[label.ordinal()];
                let suspension = Suspension {
                    label,
                    iteration: *visits,
                    step: self.yields,
                };
                *visits += 1;
                self.yields += 1;
                ::log::trace!(
                    "generator suspended at `{}` (iteration {}, step {})",
                    label.name(), suspension.iteration, suspension.step,
                );
                self.position = Position::Suspended(suspension);
                Ok(YieldOutcome::Yielded(value))
            },

            | Step::Return(value) => {
                ::log::debug!("generator completed after {} yields", self.yields);
                self.position = Position::Completed;
                Ok(YieldOutcome::Finished(value))
            },
        }
    }

    /// Where the generator is currently parked.
    #[inline]
    pub
    fn position (self: &'_ Self)
      -> Position<B::Label>
    {
        self.position
    }

    /// How many values have been yielded so far.
    #[inline]
    pub
    fn yields (self: &'_ Self)
      -> u64
    {
        self.yields
    }

    /// How many times yield point `label` has been reached so far.
    #[inline]
    pub
    fn visits (self: &'_ Self, label: B::Label)
      -> u64
    {
        self.visits.as_ref()[label.ordinal()]
    }

    /// Whether the body ran to completion.
    #[inline]
    pub
    fn is_finished (self: &'_ Self)
      -> bool
    {
        self.position.is_completed()
    }

    /// Read-only view of the locals, as saved at the last suspension.
    #[inline]
    pub
    fn body (self: &'_ Self)
      -> &'_ B
    {
        &self.body
    }

    /// Detaches the locals from the generator.
    #[inline]
    pub
    fn into_body (self: Self)
      -> B
    {
        self.body
    }
}

impl<B, ResumeArg> fmt::Debug for GeneratorState<B, ResumeArg>
where
    B : Body<ResumeArg> + fmt::Debug,
{
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_struct("GeneratorState")
            .field("body", &self.body)
            .field("position", &self.position)
            .field("yields", &self.yields)
            .finish()
    }
}

/// Anything which can be resumed until it finishes.
///
/// Implemented by [`GeneratorState`], and forwarded through `&mut` and
/// (with the `alloc` feature) `Box`, so that a [`Driver`][`crate::Driver`]
/// can either own its generator or borrow it.
///
/// Resuming takes `&mut self`: a generator can thus never be resumed from
/// two places at once, nor from within its own body.
///
/// ```rust,compile_fail
/// use ::resumable::{prelude::*, counter::count_to};
///
/// let generator = count_to(3);
/// let shared = &generator;
/// let _ = shared.resume(());
/// ```
///
/// ```rust,compile_fail
/// use ::resumable::{prelude::*, counter::count_to};
///
/// let mut generator = count_to(3);
/// let first = &mut generator;
/// let second = &mut generator;
/// let _ = first.resume(());
/// let _ = second.resume(());
/// ```
pub
trait Generator<ResumeArg = ()> {
    /// The type of the yielded values.
    type Yield;

    /// The type of the value the generator finishes with.
    type Return;

    /// Resumes the execution of this generator.
    ///
    /// See [`GeneratorState::resume`].
    fn resume (
        self: &'_ mut Self,
        resume_arg: ResumeArg,
    ) -> Result<YieldOutcome<Self::Yield, Self::Return>>
    ;
}

impl<B, ResumeArg> Generator<ResumeArg>
    for GeneratorState<B, ResumeArg>
where
    B : Body<ResumeArg>,
{
    type Yield = B::Yield;

    type Return = B::Return;

    #[inline]
    fn resume (
        self: &'_ mut Self,
        resume_arg: ResumeArg,
    ) -> Result<YieldOutcome<B::Yield, B::Return>>
    {
        GeneratorState::resume(self, resume_arg)
    }
}

// # TRANSITIVE IMPLS
impl<ResumeArg, G : ?Sized>
    Generator<ResumeArg>
for
    &'_ mut G
where
    G : Generator<ResumeArg>,
{
    transitive_impl_deferring_to!(|self| &mut **self);
}
#[cfg(feature = "alloc")]
impl<ResumeArg, G : ?Sized>
    Generator<ResumeArg>
for
    ::alloc::boxed::Box<G>
where
    G : Generator<ResumeArg>,
{
    transitive_impl_deferring_to!(|self| &mut **self);
}

// where:
macro_rules! transitive_impl_deferring_to {(
    |$self:tt| $expr:expr $(,)?
) => (
    type Yield = G::Yield;
    type Return = G::Return;

    #[inline]
    fn resume (
        $self: &'_ mut Self,
        arg: ResumeArg,
    ) -> Result<YieldOutcome<Self::Yield, Self::Return>>
    {
        <G as Generator<ResumeArg>>::resume($expr, arg)
    }
)} use transitive_impl_deferring_to;

/// Extension trait with some convenience methods for argument-less
/// [`Generator`]s.
pub
trait GeneratorExt
:
    Generator<()> +
{
    /// Iterates over the values yielded by a borrowed generator.
    ///
    /// The iterator stops at completion; the return value (or a
    /// [`ResumeError`]) is then available through [`Iter::finish`].
    ///
    /// ```rust
    /// use ::resumable::{prelude::*, counter::count_to};
    ///
    /// let mut generator = count_to(4);
    /// let firsts = generator.gen_iter().take(2).collect::<Vec<_>>();
    /// assert_eq!(firsts, [0, 1]);
    /// // `generator` is still usable, and resumes where it left off.
    /// assert_eq!(generator.gen_iter().collect::<Vec<_>>(), [2, 3]);
    /// ```
    #[inline]
    fn gen_iter (self: &'_ mut Self)
      -> Iter<&'_ mut Self>
    {
        Iter::new(self)
    }

    /// Converts the generator into an iterator over its yielded values.
    ///
    /// ```rust
    /// use ::resumable::{prelude::*, counter::count_to};
    ///
    /// let total: u64 = count_to(5).gen_into_iter().sum();
    /// assert_eq!(total, 0 + 1 + 2 + 3 + 4);
    /// ```
    #[inline]
    fn gen_into_iter (self: Self)
      -> Iter<Self>
    where
        Self : Sized,
    {
        Iter::new(self)
    }
}

impl<G : ?Sized> GeneratorExt for G
where
    G : Generator<()>,
{}

/// Ensure that the [`Send`] trait is only implemented for generators whose
/// locals also implement [`Send`].
/// ```compile_fail
/// use ::resumable::{prelude::*, body::from_fn};
/// use ::std::rc::Rc;
///
/// let body = from_fn(Rc::new(0_u8), |count: &mut Rc<u8>, _: Option<()>, ()| {
///     Step::<(), u8>::Yield((), **count)
/// });
/// let mut generator = GeneratorState::new(body);
/// ::std::thread::spawn(move || {
///     let _ = generator.resume(());
/// }).join().unwrap();
/// ```
fn _compile_error_test() {}
