//! Interaction state flags.

const STATE_COUNT: usize = 2;

/// A state a slider can be in. Several may hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderState {
    /// A handle is being dragged.
    Drag,
    /// A handle holds focus.
    Focus,
}

impl SliderState {
    pub const ALL: [SliderState; STATE_COUNT] = [SliderState::Drag, SliderState::Focus];

    fn slot(self) -> usize {
        match self {
            SliderState::Drag => 0,
            SliderState::Focus => 1,
        }
    }
}

/// A small set of [`SliderState`] flags.
///
/// ```
/// use u_slider::handles::{SliderState, StateSet};
///
/// let mut states = StateSet::new();
/// states.add(SliderState::Drag);
/// assert!(states.has(SliderState::Drag));
/// assert!(!states.has(SliderState::Focus));
/// states.remove(SliderState::Drag);
/// assert!(states.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateSet {
    flags: [bool; STATE_COUNT],
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, state: SliderState) {
        self.flags[state.slot()] = true;
    }

    pub fn remove(&mut self, state: SliderState) {
        self.flags[state.slot()] = false;
    }

    pub fn has(&self, state: SliderState) -> bool {
        self.flags[state.slot()]
    }

    pub fn clear(&mut self) {
        self.flags = [false; STATE_COUNT];
    }

    pub fn is_empty(&self) -> bool {
        self.flags.iter().all(|f| !f)
    }

    /// States currently set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = SliderState> + '_ {
        SliderState::ALL.into_iter().filter(|s| self.has(*s))
    }
}
