/// Tri-state dirty marker, kept separately for layout and for drawing.
///
/// Variants are ordered `Clean < DirtyKid < Dirty`; markers only move up
/// until the pass that owns them completes.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// No work needed.
    Clean,
    /// Unchanged itself, but some descendant needs the pass.
    DirtyKid,
    /// Changed itself; must fully redo the pass.
    #[default]
    Dirty,
}

impl State {
    pub fn is_clean(self) -> bool {
        self == State::Clean
    }

    /// Raise the marker to at least `to`. Never downgrades.
    pub fn escalate(&mut self, to: State) {
        if to > *self {
            *self = to;
        }
    }
}
