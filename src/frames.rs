use serde::Serialize;

use crate::error::Error;

/// Per-entity animation shape: either a single set of data or one set per
/// frame. Modeling this as a tagged variant keeps the frame dimension
/// explicit; builders match on it instead of branching on a flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Timeline<T> {
    Static(T),
    Animated(Vec<T>),
}

impl<T> Timeline<T> {
    pub fn is_animated(&self) -> bool {
        matches!(self, Timeline::Animated(_))
    }

    /// Number of frames; a static timeline counts as one.
    pub fn frame_count(&self) -> usize {
        match self {
            Timeline::Static(_) => 1,
            Timeline::Animated(frames) => frames.len(),
        }
    }

    /// Uniform per-frame view. Static data is a single borrowed frame, so
    /// per-frame processing never needs to know whether the entity animates.
    pub fn frames(&self) -> &[T] {
        match self {
            Timeline::Static(frame) => std::slice::from_ref(frame),
            Timeline::Animated(frames) => frames,
        }
    }

    /// Applies `f` to every frame, preserving the Static/Animated tag.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Timeline<U> {
        match self {
            Timeline::Static(frame) => Timeline::Static(f(frame)),
            Timeline::Animated(frames) => Timeline::Animated(frames.iter().map(f).collect()),
        }
    }

    /// Fails fast on an animated timeline with no frames.
    pub fn ensure_nonempty(&self, name: &'static str) -> Result<(), Error> {
        match self {
            Timeline::Animated(frames) if frames.is_empty() => Err(Error::NoFrames { name }),
            _ => Ok(()),
        }
    }
}

/// Wire shape of one descriptor field: the bare frame for static entities,
/// the frame list for animated ones. Serialized untagged so the payload
/// carries no extra nesting for static data.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FramePayload<T> {
    Static(T),
    Animated(Vec<T>),
}

/// Packages per-frame processing results back into the wire shape. The
/// inverse of the uniform `frames()` view: a static entity's single frame is
/// unwrapped, an animated entity keeps its frame list.
pub fn collapse<T>(is_animated: bool, mut frames: Vec<T>) -> FramePayload<T> {
    debug_assert!(!frames.is_empty());
    if is_animated {
        FramePayload::Animated(frames)
    } else {
        FramePayload::Static(frames.swap_remove(0))
    }
}
