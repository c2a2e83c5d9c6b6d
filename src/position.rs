//! Where a generator is parked.

use_prelude!();

/// The saved progress marker of a [`GeneratorState`].
///
/// Positions only ever move forward:
///
/// ```text
/// NotStarted --resume()--> Suspended --resume()--> Suspended --...--> Completed
/// ```
///
/// and compare accordingly: [`NotStarted`][`Position::NotStarted`] is the
/// smallest, [`Completed`][`Position::Completed`] the greatest, and two
/// [`Suspended`][`Position::Suspended`] positions compare by how many yields
/// preceded them.
///
/// ```rust
/// use ::resumable::{prelude::*, counter::count_to};
///
/// let mut generator = count_to(3);
/// let mut previous = generator.position();
/// while let Ok(YieldOutcome::Yielded(_)) = generator.resume(()) {
///     assert!(generator.position() > previous);
///     previous = generator.position();
/// }
/// assert!(generator.position().is_completed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub
enum Position<L> {
    /// Created, never resumed: no code of the body has run yet.
    NotStarted,

    /// Parked right after a yield point.
    Suspended(Suspension<L>),

    /// A resume step is in progress.
    ///
    /// Since resuming requires exclusive access, this is only ever observed
    /// after a body panicked mid-step: the generator is then poisoned.
    Running,

    /// The body ran to completion. Terminal.
    Completed,
}

/// A suspended position: which yield point, and which visit of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub
struct Suspension<L> {
    /// The textual yield point.
    pub label: L,

    /// How many times `label` had been reached before this suspension, over
    /// the whole run.
    pub iteration: u64,

    /// How many values the generator had yielded before this one.
    pub step: u64,
}

impl<L> Position<L> {
    /// Whether the body is parked at a yield point.
    #[inline]
    pub
    fn is_suspended (self: &'_ Self)
      -> bool
    {
        matches!(*self, Self::Suspended(_))
    }

    /// Whether the body ran to completion.
    #[inline]
    pub
    fn is_completed (self: &'_ Self)
      -> bool
    {
        matches!(*self, Self::Completed)
    }

    /// The saved suspension, when parked at a yield point.
    #[inline]
    pub
    fn suspension (self: &'_ Self)
      -> Option<&'_ Suspension<L>>
    {
        match *self {
            | Self::Suspended(ref suspension) => Some(suspension),
            | _ => None,
        }
    }

    /// The yield point the body is parked at, if any.
    #[inline]
    pub
    fn label (self: &'_ Self)
      -> Option<L>
    where
        L : Copy,
    {
        self.suspension().map(|it| it.label)
    }
}

impl<L : Eq> PartialOrd for Position<L> {
    fn partial_cmp (self: &'_ Self, other: &'_ Self)
      -> Option<Ordering>
    {
        if self == other {
            return Some(Ordering::Equal);
        }
        fn rank<L> (position: &'_ Position<L>)
          -> Option<(u8, u64)>
        {
            Some(match *position {
                | Position::NotStarted => (0, 0),
                | Position::Suspended(Suspension { step, .. }) => (1, step),
                | Position::Completed => (2, 0),
                | Position::Running => return None,
            })
        }
        match (rank(self)?, rank(other)?) {
            // Same step, different point: not two positions of one run.
            | (lhs, rhs) if lhs == rhs => None,
            | (lhs, rhs) => Some(lhs.cmp(&rhs)),
        }
    }
}

impl<L : Label> fmt::Display for Position<L> {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        match *self {
            | Self::NotStarted => f.write_str("not started"),
            | Self::Suspended(Suspension { label, iteration, step }) => write!(f,
                "suspended at `{}` (iteration {}, step {})",
                label.name(), iteration, step,
            ),
            | Self::Running => f.write_str("running"),
            | Self::Completed => f.write_str("completed"),
        }
    }
}
