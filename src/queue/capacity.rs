use std::fmt;

/// Maximum number of elements a queue may hold, fixed when the queue is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Capacity {
    Bounded(usize),
    #[default]
    Unbounded,
}

impl Capacity {
    pub fn is_unbounded(self) -> bool {
        matches!(self, Capacity::Unbounded)
    }

    /// The element limit, or `None` for an unbounded queue.
    pub fn limit(self) -> Option<usize> {
        match self {
            Capacity::Bounded(limit) => Some(limit),
            Capacity::Unbounded => None,
        }
    }

    /// Whether a queue currently holding `len` elements can take one more.
    pub fn admits(self, len: usize) -> bool {
        match self {
            Capacity::Bounded(limit) => len < limit,
            Capacity::Unbounded => true,
        }
    }
}

impl From<Option<usize>> for Capacity {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Capacity::Unbounded, Capacity::Bounded)
    }
}

impl From<usize> for Capacity {
    fn from(limit: usize) -> Self {
        Capacity::Bounded(limit)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(limit) => write!(f, "{limit}"),
            Capacity::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Capacity;

    #[test]
    fn bounded_admits_below_limit_only() {
        let cap = Capacity::Bounded(2);
        assert!(cap.admits(0));
        assert!(cap.admits(1));
        assert!(!cap.admits(2));
        assert!(!Capacity::Bounded(0).admits(0));
        assert!(Capacity::Unbounded.admits(usize::MAX));
    }

    #[test]
    fn conversions() {
        assert_eq!(Capacity::from(None), Capacity::Unbounded);
        assert_eq!(Capacity::from(Some(3)), Capacity::Bounded(3));
        assert_eq!(Capacity::from(7).limit(), Some(7));
        assert!(Capacity::default().is_unbounded());
        assert_eq!(Capacity::Bounded(10).to_string(), "10");
        assert_eq!(Capacity::Unbounded.to_string(), "unbounded");
    }
}
