//! Out-of-order result protection for interactive queries.
//!
//! Each keystroke starts a query with [`QuerySession::begin`]. Results may come
//! back in any order; [`QuerySession::resolve`] only publishes a result whose
//! ticket is newer than the last published one, so a slow stale query can
//! never overwrite a fresher answer.
//!
//! ```rust
//! use sheets_core::QuerySession;
//!
//! let mut session = QuerySession::new(Vec::<&str>::new());
//! let first = session.begin();
//! let second = session.begin();
//!
//! assert!(session.resolve(second, vec!["docker"]));
//! assert!(!session.resolve(first, vec!["django"]));
//! assert_eq!(session.visible(), &vec!["docker"]);
//! ```

/// Generation handed out for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw generation number, starting at 1.
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Tracks issued and applied generations with the currently visible value.
#[derive(Debug, Clone, Default)]
pub struct QuerySession<T> {
    issued: u64,
    applied: u64,
    visible: T,
}

impl<T> QuerySession<T> {
    /// Session showing `initial` until a result is resolved.
    pub const fn new(initial: T) -> Self {
        Self {
            issued: 0,
            applied: 0,
            visible: initial,
        }
    }

    /// Start a query.
    pub const fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Publish `value` if `ticket` is newer than the last published result.
    ///
    /// Returns whether the value became visible.
    pub fn resolve(&mut self, ticket: Ticket, value: T) -> bool {
        if ticket.0 <= self.applied || ticket.0 > self.issued {
            return false;
        }
        self.applied = ticket.0;
        self.visible = value;
        true
    }

    /// Whether `ticket` belongs to the most recently started query.
    pub const fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Whether a newer query has been started than the last published one.
    pub const fn is_pending(&self) -> bool {
        self.applied < self.issued
    }

    /// The currently visible value.
    pub const fn visible(&self) -> &T {
        &self.visible
    }

    /// Consume the session, returning the visible value.
    pub fn into_visible(self) -> T {
        self.visible
    }
}
