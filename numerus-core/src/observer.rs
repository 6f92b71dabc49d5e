/// Watches solver progress and may steer it.
///
/// A solver hands each event it produces to its observer. Returning
/// `Some(action)` asks the solver to perform a solver-specific action,
/// `None` lets it carry on. This is how callers stream iteration tables to a
/// display or cut a long run short without the solver knowing about either.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never intervenes.
pub trait Observer<E, A> {
    /// Inspects one solver event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
