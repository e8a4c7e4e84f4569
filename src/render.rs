//! Render collaborator contract.
//!
//! The slider never touches windows or textures; it reports what changed and
//! the renderer keeps its own handles.

/// Emitted after every index change. `prior` is `None` for the initial render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub current: usize,
    pub prior: Option<usize>,
}

/// Emitted on every clock tick while autoplay runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub active: usize,
    pub fraction: f64,
}

pub trait RenderSink {
    fn index_changed(&mut self, change: IndexChange);
    fn progress(&mut self, update: Progress);
}

impl<R: RenderSink + ?Sized> RenderSink for &mut R {
    fn index_changed(&mut self, change: IndexChange) {
        (**self).index_changed(change);
    }

    fn progress(&mut self, update: Progress) {
        (**self).progress(update);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Index(IndexChange),
    Progress(Progress),
}

/// Keeps every render call in order. Used headless and in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<RenderEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    pub fn index_changes(&self) -> impl Iterator<Item = IndexChange> + '_ {
        self.events.iter().filter_map(|event| match event {
            RenderEvent::Index(change) => Some(*change),
            RenderEvent::Progress(_) => None,
        })
    }

    pub fn last_progress(&self) -> Option<Progress> {
        self.events.iter().rev().find_map(|event| match event {
            RenderEvent::Progress(update) => Some(*update),
            RenderEvent::Index(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RenderSink for RecordingSink {
    fn index_changed(&mut self, change: IndexChange) {
        self.events.push(RenderEvent::Index(change));
    }

    fn progress(&mut self, update: Progress) {
        self.events.push(RenderEvent::Progress(update));
    }
}
