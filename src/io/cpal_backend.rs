use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};

use crate::{
    playback::{PlaybackError, ToneBackend, ToneRequest},
    synth::mixer::ToneMixer,
    MAX_BLOCK_SIZE, REQUEST_QUEUE_SIZE,
};

/// Tone output on the host's default device.
///
/// The audio callback owns a [`ToneMixer`]; requests reach it through a
/// lock-free ring buffer, so scheduling never blocks on the audio thread.
/// The stream is built paused and starts on the first `resume`.
pub struct CpalBackend {
    stream: cpal::Stream,
    tx: Producer<ToneRequest>,
    sample_rate: f32,
    channels: usize,
    suspended: bool,
}

impl CpalBackend {
    pub fn open() -> Result<Self, PlaybackError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(PlaybackError::NoOutputDevice)?;
        let config = device
            .default_output_config()
            .map_err(|e| PlaybackError::StreamConfig(e.to_string()))?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (tx, rx) = RingBuffer::<ToneRequest>::new(REQUEST_QUEUE_SIZE);
        let mut mixer = ToneMixer::new(sample_rate, rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames_remaining = total_frames - frames_written;
                        let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                        let block = &mut render_buf[..frames_to_render];
                        mixer.render_block(block);

                        // Copy to output (mono to all channels)
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }

                        frames_written += frames_to_render;
                    }
                },
                |err| log::error!("audio stream error: {}", err),
                None,
            )
            .map_err(|e| PlaybackError::BuildStream(e.to_string()))?;

        log::info!("output stream open: {} Hz, {} channels", sample_rate, channels);

        Ok(Self {
            stream,
            tx,
            sample_rate,
            channels,
            suspended: true,
        })
    }

    /// Pause output. Pending start times freeze until the next `resume`.
    pub fn suspend(&mut self) -> Result<(), PlaybackError> {
        self.stream
            .pause()
            .map_err(|e| PlaybackError::Stream(e.to_string()))?;
        self.suspended = true;
        Ok(())
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }
}

impl ToneBackend for CpalBackend {
    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        self.stream
            .play()
            .map_err(|e| PlaybackError::Stream(e.to_string()))?;
        self.suspended = false;
        Ok(())
    }

    fn schedule(&mut self, request: ToneRequest) -> Result<(), PlaybackError> {
        self.tx.push(request).map_err(|_| PlaybackError::QueueFull)
    }
}
