//! Read-only view of a solver's incumbent.

/// The best tour found so far, as handed to a
/// [`ProgressObserver`](crate::progress::ProgressObserver).
///
/// Borrowed from the solver: observers may copy it out but can never mutate
/// solver state through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourSnapshot<'a> {
    /// Name of the reporting solver (`"greedy"`, `"genetic"`, `"ant-colony"`).
    pub solver: &'static str,
    /// Generation or ant number at which the improvement was found.
    pub iteration: usize,
    /// Visiting order of the incumbent tour.
    pub order: &'a [usize],
    /// Cost of the incumbent tour.
    pub cost: f64,
}

impl TourSnapshot<'_> {
    /// Copies the visiting order out of the solver.
    pub fn to_order(&self) -> Vec<usize> {
        self.order.to_vec()
    }
}
