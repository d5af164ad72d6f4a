use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::playback::ToneRequest;

/// Source of tone requests drained by the mixer at the start of each block.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ToneRequest>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ToneRequest> {
    fn pop(&mut self) -> Option<ToneRequest> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for VecDeque<ToneRequest> {
    fn pop(&mut self) -> Option<ToneRequest> {
        self.pop_front()
    }
}
