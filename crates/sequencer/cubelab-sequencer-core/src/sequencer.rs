//! Step sequencer: owned state machine over an index into the grid sequence.
//!
//! Methods:
//! - advance, retreat, reset, toggle_play / set_playing, apply (commands)
//! - tick (autoplay driven by the host's frame loop)
//!
//! All operations are total. Requests that would move the index outside
//! `[0, len - 1]` degrade to no-ops, and each mutating call reports whether
//! anything changed.

use std::collections::VecDeque;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::autoplay::AutoplayTimer;
use crate::config::SequencerConfig;
use crate::error::SequencerError;
use crate::grid::{generate, GridCoordinate};
use crate::inputs::SequencerCommand;
use crate::outputs::SequencerEvent;

/// Undrained events kept before the oldest are dropped.
pub const MAX_QUEUED_EVENTS: usize = 256;

/// Snapshot of the sequencer's observable state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceState {
    pub current_index: usize,
    pub is_playing: bool,
}

#[derive(Debug)]
pub struct StepSequencer {
    coords: Vec<GridCoordinate>,
    state: SequenceState,
    interval: Duration,
    /// Present exactly while playing.
    autoplay: Option<AutoplayTimer>,
    revision: u64,
    events: VecDeque<SequencerEvent>,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::with_interval(SequencerConfig::default().autoplay_interval())
    }
}

impl StepSequencer {
    /// Build a sequencer from a validated config.
    pub fn new(cfg: &SequencerConfig) -> Result<Self, SequencerError> {
        cfg.validate()?;
        Ok(Self::with_interval(cfg.autoplay_interval()))
    }

    fn with_interval(interval: Duration) -> Self {
        Self {
            coords: generate(),
            state: SequenceState::default(),
            interval,
            autoplay: None,
            revision: 0,
            events: VecDeque::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> SequenceState {
        self.state
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    #[inline]
    pub fn coordinates(&self) -> &[GridCoordinate] {
        &self.coords
    }

    pub fn current_coordinate(&self) -> GridCoordinate {
        self.coords[self.state.current_index]
    }

    /// Monotonic counter bumped on every state change. Observers compare it
    /// against the last value they rendered.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The live autoplay timer, if playing.
    #[inline]
    pub fn autoplay(&self) -> Option<&AutoplayTimer> {
        self.autoplay.as_ref()
    }

    /// Take the queued events, oldest first. At most [`MAX_QUEUED_EVENTS`]
    /// are kept between drains.
    pub fn drain_events(&mut self) -> Vec<SequencerEvent> {
        self.events.drain(..).collect()
    }

    #[inline]
    pub fn queued_events(&self) -> usize {
        self.events.len()
    }

    fn emit(&mut self, event: SequencerEvent) {
        if self.events.len() == MAX_QUEUED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Step forward by one. Reaching the last index stops playback.
    pub fn advance(&mut self) -> bool {
        let last = self.last_index();
        let from = self.state.current_index;
        if from >= last {
            // Nothing to advance to; a running autoplay ends here.
            return self.set_playing(false);
        }
        self.state.current_index = from + 1;
        self.touch();
        self.emit(SequencerEvent::Stepped {
            from,
            to: from + 1,
        });
        debug!("sequencer advanced {} -> {}", from, from + 1);

        if self.state.current_index == last {
            self.emit(SequencerEvent::ReachedEnd { index: last });
            self.set_playing(false);
        }
        true
    }

    /// Step back by one; no-op at index 0 whether or not playing.
    pub fn retreat(&mut self) -> bool {
        let from = self.state.current_index;
        if from == 0 {
            return false;
        }
        self.state.current_index = from - 1;
        self.touch();
        self.emit(SequencerEvent::Stepped {
            from,
            to: from - 1,
        });
        debug!("sequencer retreated {} -> {}", from, from - 1);
        true
    }

    /// Return to index 0. Playback state is left as is.
    pub fn reset(&mut self) -> bool {
        let from = self.state.current_index;
        if from == 0 {
            return false;
        }
        self.state.current_index = 0;
        self.touch();
        self.emit(SequencerEvent::Reset { from });
        debug!("sequencer reset from {}", from);
        true
    }

    pub fn toggle_play(&mut self) -> bool {
        self.set_playing(!self.state.is_playing)
    }

    /// Start or stop autoplay. Starting arms a fresh timer, stopping drops it.
    pub fn set_playing(&mut self, playing: bool) -> bool {
        if self.state.is_playing == playing {
            return false;
        }
        self.state.is_playing = playing;
        let index = self.state.current_index;
        if playing {
            self.autoplay = Some(AutoplayTimer::armed(self.interval));
            self.emit(SequencerEvent::PlaybackStarted { index });
            debug!("sequencer playback started at {}", index);
        } else {
            self.autoplay = None;
            self.emit(SequencerEvent::PlaybackStopped { index });
            debug!("sequencer playback stopped at {}", index);
        }
        self.touch();
        true
    }

    pub fn apply(&mut self, cmd: SequencerCommand) -> bool {
        match cmd {
            SequencerCommand::Previous => self.retreat(),
            SequencerCommand::Next => self.advance(),
            SequencerCommand::TogglePlay => self.toggle_play(),
            SequencerCommand::Play => self.set_playing(true),
            SequencerCommand::Pause => self.set_playing(false),
            SequencerCommand::Reset => self.reset(),
        }
    }

    /// Feed elapsed frame time into the autoplay timer and advance once per
    /// completed interval, never past the last index. Returns the number of
    /// advances performed.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let fired = match self.autoplay.as_mut() {
            Some(timer) => timer.tick(dt),
            None => return 0,
        };
        let remaining = self.last_index().saturating_sub(self.state.current_index);
        let steps = (fired as usize).min(remaining);
        let mut advanced = 0;
        for _ in 0..steps {
            if !self.advance() {
                break;
            }
            advanced += 1;
        }
        // Already on the last index: the fired interval ends playback.
        if fired > 0 && remaining == 0 {
            self.set_playing(false);
        }
        advanced
    }
}
