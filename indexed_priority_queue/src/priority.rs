use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::QueueError;

/// Float priority that is guaranteed to be totally ordered.
///
/// Plain `f64` doesn't implement `Ord` because of NaN,
/// so it cannot be used as priority directly.
/// This wrapper refuses NaN on construction and orders remaining values
/// with [`f64::total_cmp`], so `-0.0 < 0.0` and infinities are allowed.
///
/// ```
/// use indexed_priority_queue::{FloatPriority, IndexedPriorityQueue, QueueError};
///
/// let mut queue = IndexedPriorityQueue::new();
/// queue.insert("slow", FloatPriority::new(2.5)?);
/// queue.try_insert("fast", 0.25)?;
/// assert_eq!(queue.try_insert("broken", f64::NAN), Err(QueueError::InvalidPriority));
/// assert_eq!(FloatPriority::try_from(f32::NAN), Err(QueueError::InvalidPriority));
///
/// assert_eq!(queue.extract_min()?, ("fast", FloatPriority::new(0.25)?));
/// assert_eq!(queue.len(), 1);
/// # Ok::<(), QueueError>(())
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct FloatPriority(f64);

impl FloatPriority {
    /// Wraps value, fails with [`QueueError::InvalidPriority`] for NaN.
    #[inline]
    pub fn new(value: f64) -> Result<Self, QueueError> {
        if value.is_nan() {
            Err(QueueError::InvalidPriority)
        } else {
            Ok(Self(value))
        }
    }

    /// Wrapped value, never NaN.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatPriority {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatPriority {}

impl PartialOrd for FloatPriority {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatPriority {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

// total_cmp treats values as equal only if their bits are equal
impl Hash for FloatPriority {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state)
    }
}

impl TryFrom<f64> for FloatPriority {
    type Error = QueueError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f32> for FloatPriority {
    type Error = QueueError;

    #[inline]
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(f64::from(value))
    }
}

impl From<FloatPriority> for f64 {
    #[inline]
    fn from(priority: FloatPriority) -> Self {
        priority.0
    }
}

impl Display for FloatPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
