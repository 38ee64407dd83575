//! Change notifications emitted by [`AccordionModel`](super::AccordionModel).

use accordion_core::Signal;

/// Collection of signals emitted by the accordion model.
///
/// Every signal fires after the mutation has been applied and the version
/// has been bumped, so slots observe the new state. Operations that leave the
/// model unchanged emit nothing.
///
/// # Signal Usage
///
/// - **Single-row changes**: `section_*`, `item_*`, `expansion_changed`
/// - **Reordering and bulk changes**: `layout_changed`
/// - **Any structural change**: `version_changed`
pub struct AccordionSignals {
    /// Emitted after a section has been inserted.
    /// Args: section position
    pub section_inserted: Signal<usize>,

    /// Emitted after a section has been removed.
    /// Args: former section position
    pub section_removed: Signal<usize>,

    /// Emitted after an item has been inserted.
    /// Args: (section position, item position)
    pub item_inserted: Signal<(usize, usize)>,

    /// Emitted after an item has been removed.
    /// Args: (section position, former item position)
    pub item_removed: Signal<(usize, usize)>,

    /// Emitted when a single section is expanded or collapsed.
    /// Args: (section position, now expanded)
    pub expansion_changed: Signal<(usize, bool)>,

    /// Emitted after sorts, moves, bulk expansion changes and clears.
    /// Args: new version
    pub layout_changed: Signal<u64>,

    /// Emitted after every structural change.
    /// Args: new version
    pub version_changed: Signal<u64>,
}

impl Default for AccordionSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AccordionSignals {
    /// Creates a new set of accordion signals.
    pub fn new() -> Self {
        Self {
            section_inserted: Signal::new(),
            section_removed: Signal::new(),
            item_inserted: Signal::new(),
            item_removed: Signal::new(),
            expansion_changed: Signal::new(),
            layout_changed: Signal::new(),
            version_changed: Signal::new(),
        }
    }

    /// Blocks or unblocks every signal in the set.
    pub fn set_blocked(&self, blocked: bool) {
        self.section_inserted.set_blocked(blocked);
        self.section_removed.set_blocked(blocked);
        self.item_inserted.set_blocked(blocked);
        self.item_removed.set_blocked(blocked);
        self.expansion_changed.set_blocked(blocked);
        self.layout_changed.set_blocked(blocked);
        self.version_changed.set_blocked(blocked);
    }
}
