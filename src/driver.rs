//! Drivers: the loops that resume generators and consume what they yield.

use_prelude!();

/// Owns a generator and drives it: the only thing resuming it.
///
/// `G` is usually a [`GeneratorState`], or a `&mut` to one when the caller
/// wants it back afterwards.
///
/// ```rust
/// use ::resumable::{prelude::*, counter::count_to};
///
/// let mut seen = vec![];
/// let ret = Driver::new(count_to(5)).run_to_completion(|value| seen.push(value));
/// assert_eq!(ret, Ok(()));
/// assert_eq!(seen, [0, 1, 2, 3, 4]);
/// ```
#[derive(Debug)]
pub
struct Driver<G> {
    generator: G,
    resumes: u64,
}

impl<G> Driver<G> {
    /// A driver owning `generator` (or a `&mut` to it).
    #[inline]
    pub
    fn new (generator: G)
      -> Self
    {
        Self { generator, resumes: 0 }
    }

    /// How many times this driver resumed its generator.
    #[inline]
    pub
    fn resumes (self: &'_ Self)
      -> u64
    {
        self.resumes
    }

    /// Read-only access to the driven generator, _e.g._, to look at its
    /// [`.position()`][`GeneratorState::position`].
    #[inline]
    pub
    fn generator (self: &'_ Self)
      -> &'_ G
    {
        &self.generator
    }

    /// Stops driving, handing the generator back wherever it is parked.
    #[inline]
    pub
    fn into_inner (self: Self)
      -> G
    {
        self.generator
    }

    /// Stops driving, dropping the generator wherever it is parked.
    pub
    fn abandon (self: Self)
    {
        ::log::debug!("generator abandoned after {} resumes", self.resumes);
        drop(self.generator);
    }

    /// Resumes the generator once.
    ///
    /// # Errors
    ///
    /// Those of [`Generator::resume`], which are also logged: they are bugs
    /// of the calling code.
    pub
    fn resume<ResumeArg> (
        self: &'_ mut Self,
        resume_arg: ResumeArg,
    ) -> Result<YieldOutcome<G::Yield, G::Return>>
    where
        G : Generator<ResumeArg>,
    {
        self.resumes += 1;
        self.generator
            .resume(resume_arg)
            .map_err(|err| {
                ::log::error!("resume #{} failed: {}", self.resumes, err);
                err
            })
    }

    /// Resumes the generator until it finishes, feeding each yielded value
    /// to `consumer` and the value it returns back as the next resume
    /// argument.
    ///
    /// ```rust
    /// use ::resumable::{prelude::*, body::from_fn};
    ///
    /// // Asks for its value to be doubled, three times.
    /// let body = from_fn(vec![], |got: &mut Vec<u32>, from: Option<()>, arg: u32| {
    ///     if from.is_some() {
    ///         got.push(arg);
    ///     }
    ///     match got.len() as u32 {
    ///         | n if n < 3 => Step::Yield((), n + 1),
    ///         | _ => Step::Return(::core::mem::take(got)),
    ///     }
    /// });
    /// let doubled = Driver::new(GeneratorState::new(body))
    ///     .run_with(0, |n| 2 * n)
    /// ;
    /// assert_eq!(doubled, Ok(vec![2, 4, 6]));
    /// ```
    ///
    /// # Errors
    ///
    /// The first [`ResumeError`]; no further resume is attempted.
    pub
    fn run_with<ResumeArg> (
        mut self: Self,
        first_arg: ResumeArg,
        mut consumer: impl FnMut(G::Yield) -> ResumeArg,
    ) -> Result<G::Return>
    where
        G : Generator<ResumeArg>,
    {
        let mut resume_arg = first_arg;
        loop {
            match self.resume(resume_arg)? {
                | YieldOutcome::Yielded(value) => {
                    resume_arg = consumer(value);
                },
                | YieldOutcome::Finished(returned) => {
                    ::log::debug!("driver done after {} resumes", self.resumes);
                    return Ok(returned);
                },
            }
        }
    }

    /// Resumes the generator until it finishes, feeding each yielded value
    /// to `consumer`.
    ///
    /// # Errors
    ///
    /// [`ResumeError::IllegalResume`] if the generator had already finished
    /// (or [`ResumeError::Poisoned`]).
    #[inline]
    pub
    fn run_to_completion (
        self: Self,
        consumer: impl FnMut(G::Yield),
    ) -> Result<G::Return>
    where
        G : Generator<()>,
    {
        self.run_with((), consumer)
    }

    /// Like [`.run_to_completion()`][`Driver::run_to_completion`], but
    /// stopping after at most `max_yields` values.
    ///
    /// Evaluates to `None` when no [`Finished`][`YieldOutcome::Finished`] was
    /// observed within `max_yields` resumes: a suspended generator can then be
    /// driven further, or [abandoned][`Driver::abandon`].
    ///
    /// ```rust
    /// use ::resumable::{prelude::*, counter::count_to};
    ///
    /// let mut driver = Driver::new(count_to(1_000_000));
    /// let mut seen = vec![];
    /// assert_eq!(driver.run_for(3, |value| seen.push(value)), Ok(None));
    /// assert_eq!(seen, [0, 1, 2]);
    /// driver.abandon();
    /// ```
    ///
    /// # Errors
    ///
    /// The first [`ResumeError`].
    pub
    fn run_for (
        self: &'_ mut Self,
        max_yields: u64,
        mut consumer: impl FnMut(G::Yield),
    ) -> Result<Option<G::Return>>
    where
        G : Generator<()>,
    {
        for _ in 0 .. max_yields {
            match self.resume(())? {
                | YieldOutcome::Yielded(value) => consumer(value),
                | YieldOutcome::Finished(returned) => return Ok(Some(returned)),
            }
        }
        Ok(None)
    }
}

/// Shorthand for [`Driver::new(generator).run_to_completion(consumer)`][
/// `Driver::run_to_completion`].
///
/// # Errors
///
/// See [`Driver::run_to_completion`].
#[inline]
pub
fn run_to_completion<G> (
    generator: G,
    consumer: impl FnMut(G::Yield),
) -> Result<G::Return>
where
    G : Generator<()>,
{
    Driver::new(generator).run_to_completion(consumer)
}

/// Runs a recursive computation without recursing on the call stack.
///
/// A recursive computation can be seen as a suspensible generator which,
/// whenever it needs the result for (smaller) parameters, suspends and
/// yields those parameters, and gets resumed with the result.
///
/// This driver starts with `arg`, and resumes the innermost computation
/// until it yields (a new computation is then started, for the yielded
/// argument, while the yielder is kept suspended on a heap-allocated stack)
/// or finishes (its return value is then fed to the computation right
/// below it on the stack, which gets resumed with it).
///
/// The very first resume of each computation gets a `R::default()` dummy.
///
/// ```rust
/// use ::resumable::{prelude::*, driver::drive_recursion};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
/// enum Point { Recurse }
///
/// /// `n + triangular(n - 1)`
/// struct Triangular { n: u64 }
///
/// impl Body<u64> for Triangular {
///     type Label = Point;
///     type Yield = u64;
///     type Return = u64;
///
///     fn step (&mut self, from: Option<Point>, sub_result: u64)
///       -> Step<Point, u64, u64>
///     {
///         match from {
///             | None if self.n == 0 => Step::Return(0),
///             | None => Step::Yield(Point::Recurse, self.n - 1),
///             | Some(Point::Recurse) => Step::Return(self.n + sub_result),
///         }
///     }
/// }
///
/// let ret = drive_recursion(100, |n| GeneratorState::<_, u64>::new(Triangular { n }));
/// assert_eq!(ret, Ok(5050));
/// ```
///
/// # Errors
///
/// The first [`ResumeError`] of any of the computations.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "better-docs",
    doc(cfg(feature = "alloc")),
)]
pub
fn drive_recursion<Arg, G, R> (
    arg: Arg,
    mut start_computing: impl FnMut(Arg) -> G,
) -> Result<R>
where
    G : Generator<R, Yield = Arg, Return = R>,
    R : Default, // to feed the initial dummies.
{
    // The "recursive state stack", with the suspended callers' locals.
    let mut suspended_computations = ::alloc::vec::Vec::<G>::new();

    let mut last_suspended_computation = start_computing(arg);
    let mut computation_result = R::default(); // start with a dummy

    loop {
        match last_suspended_computation.resume(computation_result)? {
            // Completion of the current computation.
            | YieldOutcome::Finished(computation_result_) => {
                match suspended_computations.pop() {
                    // If it was the outer-most computation, we've finished.
                    | None => return Ok(computation_result_),
                    // Otherwise, feed the current result to the computation
                    // which had yield-requested it.
                    | Some(suspended_computation) => {
                        last_suspended_computation = suspended_computation;
                        computation_result = computation_result_;
                    },
                }
            },
            // We need to "compute-recurse" ourselves with this new `arg`.
            | YieldOutcome::Yielded(arg) => {
                suspended_computations.push(last_suspended_computation);
                ::log::trace!(
                    "recursion depth: {}",
                    suspended_computations.len(),
                );
                last_suspended_computation = start_computing(arg);
                computation_result = R::default();
            },
        }
    }
}
