/// Actions an observer can request during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the best point found so far.
    StopEarly,

    /// Rank this point below the one it is compared against.
    ///
    /// The interval shrinks away from the point and the evaluation, if it
    /// succeeded, is never reported as the best. Useful to recover from a
    /// failed evaluation or to keep the search out of a region.
    AssumeWorse,
}
