//! Resumption labels: the names of a body's yield points.

use_prelude!();

/// One textual yield point of a [`Body`].
///
/// A generator's saved position is a label plus the number of times that
/// label has already been reached, so the label alone tells a [`Body`] where
/// to re-enter, while the locals it owns tell it which loop iteration it is in.
///
/// Usually derived:
///
/// ```rust
/// use ::resumable::Label;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
/// enum Point {
///     BeforeLoop,
///     InLoop,
/// }
///
/// assert_eq!(<Point as Label>::COUNT, 2);
/// assert_eq!(Point::InLoop.ordinal(), 1);
/// assert_eq!(Point::BeforeLoop.name(), "BeforeLoop");
/// ```
///
/// Variants must be fieldless: whatever needs to survive a suspension lives
/// in the body itself.
///
/// ```rust,compile_fail
/// use ::resumable::Label;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
/// enum Point {
///     InLoop(u8),
/// }
/// ```
///
/// Their ordinals follow declaration order, so explicit discriminants are
/// rejected:
///
/// ```rust,compile_fail
/// use ::resumable::Label;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
/// enum Point {
///     BeforeLoop = 1,
///     InLoop = 0,
/// }
/// ```
///
/// A body has at least one yield point:
///
/// ```rust,compile_fail
/// use ::resumable::Label;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
/// enum Point {}
/// ```
///
/// Labels are not generic:
///
/// ```rust,compile_fail
/// use ::resumable::Label;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
/// enum Point<const N: usize> {
///     InLoop,
/// }
/// ```
///
/// And only `enum`s can be derived:
///
/// ```rust,compile_fail
/// use ::resumable::Label;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
/// struct Point;
/// ```
///
/// ```rust,compile_fail
/// use ::resumable::Label;
///
/// #[derive(Clone, Copy, Label)]
/// union Point {
///     in_loop: u8,
/// }
/// ```
pub
trait Label : Copy + Eq + fmt::Debug {
    /// How many yield points there are.
    const COUNT: usize;

    /// One visit counter per yield point, indexed by
    /// [`.ordinal()`][`Label::ordinal`].
    type Counters : AsRef<[u64]> + AsMut<[u64]>;

    /// Zeroed counters.
    fn counters ()
      -> Self::Counters
    ;

    /// Position of this yield point in declaration order, `< COUNT`.
    fn ordinal (self: Self)
      -> usize
    ;

    /// Human-readable name, used in logs.
    fn name (self: Self)
      -> &'static str
    ;
}

/// The label of a body with a single yield point.
impl Label for () {
    const COUNT: usize = 1;

    type Counters = [u64; 1];

    #[inline]
    fn counters ()
      -> [u64; 1]
    {
        [0]
    }

    #[inline]
    fn ordinal (self: ())
      -> usize
    {
        0
    }

    #[inline]
    fn name (self: ())
      -> &'static str
    {
        "yield"
    }
}
