use std::time::{Duration, Instant};

use super::{ChordInfo, Progression};

/// Most chords a loop holds.
pub const LOOP_CAPACITY: usize = 8;
/// Time between the onsets of consecutive loop chords.
pub const LOOP_GAP: Duration = Duration::from_secs(1);

/// An ordered, bounded list of chords picked by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordLoop {
    chords: Vec<ChordInfo>,
}

impl ChordLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chord. Returns `false` and leaves the loop unchanged when it
    /// is already at [`LOOP_CAPACITY`].
    pub fn push(&mut self, chord: ChordInfo) -> bool {
        if self.is_full() {
            return false;
        }
        self.chords.push(chord);
        true
    }

    /// Loop holding the chords of a suggested progression.
    ///
    /// Only the first [`LOOP_CAPACITY`] chords are kept; see
    /// [`replace_with`](Self::replace_with).
    pub fn from_progression(progression: &Progression) -> Self {
        let mut chord_loop = Self::new();
        chord_loop.replace_with(progression.chords.iter().cloned());
        chord_loop
    }

    /// Replace the whole loop with `chords`, in order.
    ///
    /// The capacity holds on this path too: chords past [`LOOP_CAPACITY`]
    /// are dropped. Returns how many were dropped.
    pub fn replace_with(&mut self, chords: impl IntoIterator<Item = ChordInfo>) -> usize {
        self.chords.clear();
        let mut dropped = 0;
        for chord in chords {
            if !self.push(chord) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::info!("loop holds {} chords, dropped {}", LOOP_CAPACITY, dropped);
        }
        dropped
    }

    /// Remove the chord at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<ChordInfo> {
        (index < self.chords.len()).then(|| self.chords.remove(index))
    }

    /// Remove the most recently added chord.
    pub fn pop(&mut self) -> Option<ChordInfo> {
        self.chords.pop()
    }

    pub fn clear(&mut self) {
        self.chords.clear();
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chords.len() >= LOOP_CAPACITY
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChordInfo> {
        self.chords.iter()
    }

    pub fn chords(&self) -> &[ChordInfo] {
        &self.chords
    }
}

/*
Loop playback timeline (gap = 1 s, three chords):

  start
    |--- gap ---|--- gap ---|--- gap ---|
    ^           ^           ^           ^
  chord 0     chord 1     chord 2     stopped

Each chord is handed out by `poll` once its onset has passed. Playback stays
"playing" for one gap after the last onset so the last chord can ring before a
new start is accepted.
*/

/// Clock-driven playback of a [`ChordLoop`].
///
/// Holds a snapshot of the loop taken at [`start`](Self::start); edits to the
/// loop while it plays do not affect the running pass.
#[derive(Debug, Clone)]
pub struct LoopPlayback {
    gap: Duration,
    chords: Vec<ChordInfo>,
    started: Option<Instant>,
    next: usize,
}

impl LoopPlayback {
    pub fn new() -> Self {
        Self::with_gap(LOOP_GAP)
    }

    pub fn with_gap(gap: Duration) -> Self {
        Self {
            gap,
            chords: Vec::new(),
            started: None,
            next: 0,
        }
    }

    pub fn gap(&self) -> Duration {
        self.gap
    }

    pub fn is_playing(&self) -> bool {
        self.started.is_some()
    }

    /// Index of the chord most recently handed out by `poll`.
    pub fn current(&self) -> Option<usize> {
        self.is_playing().then(|| self.next.checked_sub(1)).flatten()
    }

    /// The chord most recently handed out by `poll`.
    pub fn current_chord(&self) -> Option<&ChordInfo> {
        self.current().and_then(|i| self.chords.get(i))
    }

    /// Begin a pass over `chord_loop` at `now`.
    ///
    /// Returns `false` and does nothing if a pass is already running or the
    /// loop is empty.
    pub fn start(&mut self, chord_loop: &ChordLoop, now: Instant) -> bool {
        if self.is_playing() || chord_loop.is_empty() {
            return false;
        }
        self.chords = chord_loop.chords().to_vec();
        self.started = Some(now);
        self.next = 0;
        log::debug!("loop playback started with {} chords", self.chords.len());
        true
    }

    pub fn stop(&mut self) {
        self.started = None;
        self.next = 0;
        self.chords.clear();
    }

    /// Advance to `now`, returning the chord whose onset has come due.
    ///
    /// At most one chord is returned per call; a caller polling late catches
    /// up one chord per poll.
    pub fn poll(&mut self, now: Instant) -> Option<&ChordInfo> {
        let started = self.started?;
        let elapsed = now.saturating_duration_since(started);

        if self.next < self.chords.len() {
            if elapsed >= self.onset(self.next) {
                self.next += 1;
                return self.chords.get(self.next - 1);
            }
            return None;
        }

        if elapsed >= self.onset(self.chords.len()) {
            log::debug!("loop playback finished");
            self.stop();
        }
        None
    }

    /// Time from start to the onset of chord `index`, saturating at
    /// `Duration::MAX`.
    fn onset(&self, index: usize) -> Duration {
        u32::try_from(index)
            .ok()
            .and_then(|i| self.gap.checked_mul(i))
            .unwrap_or(Duration::MAX)
    }
}

impl Default for LoopPlayback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(name: &str) -> ChordInfo {
        ChordInfo::new("I", name, &["C", "E", "G"], "Major")
    }

    #[test]
    fn loop_is_bounded() {
        let mut chord_loop = ChordLoop::new();
        for i in 0..LOOP_CAPACITY {
            assert!(chord_loop.push(chord(&i.to_string())));
        }
        assert!(chord_loop.is_full());
        assert!(!chord_loop.push(chord("extra")));
        assert_eq!(chord_loop.len(), LOOP_CAPACITY);
        assert_eq!(chord_loop.chords()[LOOP_CAPACITY - 1].name, "7");
    }

    #[test]
    fn remove_and_clear() {
        let mut chord_loop = ChordLoop::new();
        chord_loop.push(chord("a"));
        chord_loop.push(chord("b"));
        chord_loop.push(chord("c"));

        assert_eq!(chord_loop.remove(1).map(|c| c.name), Some("b".to_string()));
        assert_eq!(chord_loop.remove(5), None);
        let names: Vec<&str> = chord_loop.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);

        chord_loop.clear();
        assert!(chord_loop.is_empty());
    }

    #[test]
    fn progression_fills_loop_up_to_capacity() {
        let progression = Progression {
            name: "Long walk".to_string(),
            chords: (0..10).map(|i| chord(&i.to_string())).collect(),
            description: String::new(),
        };

        let chord_loop = ChordLoop::from_progression(&progression);
        assert_eq!(chord_loop.len(), LOOP_CAPACITY);
        assert_eq!(chord_loop.chords()[0].name, "0");
        assert_eq!(chord_loop.chords()[LOOP_CAPACITY - 1].name, "7");
    }

    #[test]
    fn replace_with_discards_previous_chords() {
        let mut chord_loop = ChordLoop::new();
        chord_loop.push(chord("old"));

        let dropped = chord_loop.replace_with(vec![chord("a"), chord("b")]);
        assert_eq!(dropped, 0);
        let names: Vec<&str> = chord_loop.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let dropped = chord_loop.replace_with((0..9).map(|i| chord(&i.to_string())));
        assert_eq!(dropped, 1);
        assert!(chord_loop.is_full());
    }

    #[test]
    fn huge_gap_does_not_overflow() {
        let mut chord_loop = ChordLoop::new();
        chord_loop.push(chord("a"));
        chord_loop.push(chord("b"));

        let t0 = Instant::now();
        let mut playback = LoopPlayback::with_gap(Duration::MAX);
        assert!(playback.start(&chord_loop, t0));
        assert!(playback.poll(t0).is_some());
        assert!(playback.poll(t0 + Duration::from_secs(3600)).is_none());
        assert!(playback.is_playing());
    }

    #[test]
    fn plays_each_chord_one_gap_apart() {
        let mut chord_loop = ChordLoop::new();
        chord_loop.push(chord("a"));
        chord_loop.push(chord("b"));

        let t0 = Instant::now();
        let mut playback = LoopPlayback::new();
        assert!(playback.start(&chord_loop, t0));

        assert_eq!(playback.poll(t0).map(|c| c.name.clone()), Some("a".into()));
        assert_eq!(playback.current(), Some(0));
        assert_eq!(playback.current_chord().map(|c| c.name.as_str()), Some("a"));
        assert!(playback.poll(t0 + Duration::from_millis(500)).is_none());
        assert_eq!(
            playback.poll(t0 + Duration::from_millis(1000)).map(|c| c.name.clone()),
            Some("b".into())
        );
        assert!(playback.poll(t0 + Duration::from_millis(1500)).is_none());
        assert!(playback.is_playing());

        assert!(playback.poll(t0 + Duration::from_millis(2000)).is_none());
        assert!(!playback.is_playing());
        assert_eq!(playback.current(), None);
    }

    #[test]
    fn start_ignored_while_playing_or_empty() {
        let t0 = Instant::now();
        let mut playback = LoopPlayback::new();
        assert!(!playback.start(&ChordLoop::new(), t0));

        let mut chord_loop = ChordLoop::new();
        chord_loop.push(chord("a"));
        assert!(playback.start(&chord_loop, t0));
        assert!(!playback.start(&chord_loop, t0));

        playback.stop();
        assert!(playback.start(&chord_loop, t0));
    }

    #[test]
    fn snapshot_ignores_later_edits() {
        let mut chord_loop = ChordLoop::new();
        chord_loop.push(chord("a"));
        let t0 = Instant::now();
        let mut playback = LoopPlayback::with_gap(Duration::from_millis(10));
        playback.start(&chord_loop, t0);
        chord_loop.clear();

        assert_eq!(playback.poll(t0).map(|c| c.name.clone()), Some("a".into()));
    }
}
