use crate::{
    playback::ToneRequest,
    synth::{message::MessageReceiver, voice::ToneVoice},
};

/// Upper bound on simultaneously sounding tones.
pub const MAX_VOICES: usize = 64;

/// Renders every scheduled tone into a mono block.
///
/// Requests are drained from the receiver at the top of each block and
/// anchored to the mixer's frame clock: a request with `start_delay` d that
/// arrives when the clock reads `frame` starts at `frame + d * sample_rate`.
/// The clock only moves while blocks are rendered, so a suspended stream
/// also freezes pending start times.
pub struct ToneMixer<R: MessageReceiver> {
    voices: Vec<ToneVoice>,
    rx: R,
    sample_rate: f32,
    frame_counter: u64,
}

impl<R: MessageReceiver> ToneMixer<R> {
    pub fn new(sample_rate: f32, rx: R) -> Self {
        Self {
            voices: Vec::with_capacity(MAX_VOICES),
            rx,
            sample_rate,
            frame_counter: 0,
        }
    }

    pub fn render_block(&mut self, out: &mut [f32]) {
        // Process pending requests
        while let Some(request) = self.rx.pop() {
            self.schedule(&request);
        }

        out.fill(0.0);
        for voice in &mut self.voices {
            voice.render_add(out, self.frame_counter);
        }
        self.voices.retain(|v| !v.is_finished());

        self.frame_counter += out.len() as u64;
    }

    /// Start a tone relative to the current frame.
    pub fn schedule(&mut self, request: &ToneRequest) {
        let offset = (request.start_delay.max(0.0) * self.sample_rate as f64).round() as u64;
        let voice = ToneVoice::new(request, self.frame_counter + offset, self.sample_rate);

        if self.voices.len() < MAX_VOICES {
            self.voices.push(voice);
            return;
        }

        // Full: steal the voice that started first
        if let Some(idx) = self
            .voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| v.start_frame())
            .map(|(idx, _)| idx)
        {
            self.voices[idx] = voice;
        }
    }

    /// Frames rendered so far.
    pub fn frame(&self) -> u64 {
        self.frame_counter
    }

    /// Seconds rendered so far.
    pub fn current_time(&self) -> f64 {
        self.frame_counter as f64 / self.sample_rate as f64
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Pitch values of the tones currently scheduled or sounding.
    pub fn sounding(&self) -> impl Iterator<Item = i32> + '_ {
        self.voices.iter().map(|v| v.pitch_value())
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.rx
    }
}
