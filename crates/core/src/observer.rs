/// Receives solver events and decides whether the search should keep going.
///
/// Solvers call `observe` for every event they emit. Returning `None` lets the
/// solver continue unchanged; returning `Some(action)` requests one of the
/// solver's actions (for example, stopping early).
///
/// Observers never influence which candidates are drawn, so a search that is
/// observed but never steered produces exactly the same result as an
/// unobserved one.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is a
/// no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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
