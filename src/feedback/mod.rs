//! Collision feedback: queued collision events swept into play/stop calls.
//!
//! Runtime hosts push collision events as they happen and call `sweep` once
//! per frame with whatever actually makes noise (audio engine, haptics, a
//! test recorder). The queue owns its events; finished ones move into a
//! history list for inspection.

/// What kind of feedback a collision triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Alarm,
    Sound,
}

/// One collision being tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Name of the thing collided with, for logs and history.
    pub what: String,
    pub kind: FeedbackKind,
    /// Still colliding. Cleared via `CollisionFeedback::finish`.
    pub active: bool,
    playing: bool,
}

impl CollisionEvent {
    pub fn new(what: impl Into<String>, kind: FeedbackKind) -> Self {
        CollisionEvent {
            what: what.into(),
            kind,
            active: true,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Receiver for feedback playback calls.
pub trait FeedbackSink {
    fn play(&mut self, kind: FeedbackKind);
    fn stop(&mut self, kind: FeedbackKind);
}

/// Collision event queue with per-sweep processing.
#[derive(Debug, Default)]
pub struct CollisionFeedback {
    pending: Vec<CollisionEvent>,
    history: Vec<CollisionEvent>,
}

impl CollisionFeedback {
    pub fn new() -> Self {
        CollisionFeedback::default()
    }

    pub fn push(&mut self, event: CollisionEvent) {
        self.pending.push(event);
    }

    /// Mark every pending event with this name as no longer colliding. The
    /// next sweep stops and retires them.
    pub fn finish(&mut self, what: &str) {
        for event in &mut self.pending {
            if event.what == what {
                event.active = false;
            }
        }
    }

    /// Process every pending event once.
    ///
    /// Active events start playback the first time they are seen and stay
    /// queued; inactive events get a stop call and retire into the history.
    pub fn sweep(&mut self, sink: &mut dyn FeedbackSink) {
        let mut remaining = Vec::with_capacity(self.pending.len());
        for mut event in self.pending.drain(..) {
            log::debug!("collision with {}", event.what);
            if event.active {
                if !event.playing {
                    sink.play(event.kind);
                    event.playing = true;
                }
                remaining.push(event);
            } else {
                sink.stop(event.kind);
                event.playing = false;
                self.history.push(event);
            }
        }
        self.pending = remaining;
    }

    pub fn pending(&self) -> &[CollisionEvent] {
        &self.pending
    }

    pub fn history(&self) -> &[CollisionEvent] {
        &self.history
    }
}
