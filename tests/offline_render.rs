use tonal_keys::{
    io::OfflineBackend,
    playback::{PlaybackConfig, TonePlayer},
};

const SAMPLE_RATE: f32 = 8_000.0;

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

fn first_sound(samples: &[f32]) -> Option<usize> {
    samples.iter().position(|s| s.abs() > 0.0)
}

#[test]
fn suspended_output_resumes_on_first_tone() {
    let mut player = TonePlayer::with_backend(OfflineBackend::suspended(SAMPLE_RATE));
    player.play_note("A4").unwrap();

    let backend = player.backend_mut().unwrap();
    let out = backend.render_seconds(0.5);
    assert!(peak(&out) > 0.2);
    assert!(peak(&out) <= 0.3 + 1e-6);
}

#[test]
fn delayed_tone_is_silent_until_its_start() {
    let mut player = TonePlayer::with_backend(OfflineBackend::new(SAMPLE_RATE));
    player.play_single_tone("C4", 0.5, 0.25).unwrap();

    let backend = player.backend_mut().unwrap();
    let out = backend.render_seconds(1.0);
    let onset = first_sound(&out).unwrap();
    let expected = (0.25 * SAMPLE_RATE) as usize;
    assert!(onset >= expected && onset <= expected + 1, "onset {onset}");

    // Stopped by start + duration
    let end = (0.75 * SAMPLE_RATE) as usize;
    assert!(out[end + 1..].iter().all(|&s| s == 0.0));
}

#[test]
fn strummed_chord_fades_out() {
    let mut player = TonePlayer::with_backend(OfflineBackend::new(SAMPLE_RATE));
    player.play_tone_stack(&["C", "E", "G"]).unwrap();

    let backend = player.backend_mut().unwrap();
    let head = backend.render_seconds(0.05);
    assert!(peak(&head) <= 0.3 + 1e-6, "only the first note has started");

    let body = backend.render_seconds(0.5);
    assert!(peak(&body) > 0.3);
    assert!(peak(&body) <= 0.9 + 1e-6);
    assert_eq!(backend.active_voices(), 3);

    // Last note ends at 0.10 + 1.5
    backend.render_seconds(1.1);
    assert_eq!(backend.active_voices(), 0);
    assert!(peak(&backend.render_seconds(0.1)) == 0.0);
}

#[test]
fn zero_strum_starts_together() {
    let config = PlaybackConfig::new().strum(0.0);
    let mut player = TonePlayer::with_backend(OfflineBackend::new(SAMPLE_RATE)).with_config(config);
    player.play_tone_stack(&["C", "C", "C"]).unwrap();

    let backend = player.backend_mut().unwrap();
    let out = backend.render_seconds(0.1);
    // Three identical tones in phase: three times the single-tone attack
    let attack_peak = 0.3 * 3.0;
    assert!(peak(&out) > attack_peak * 0.8);
    assert!(peak(&out) <= attack_peak + 1e-5);
}

#[test]
fn clock_only_moves_while_rendering() {
    let mut backend = OfflineBackend::new(SAMPLE_RATE);
    backend.render(4_000);
    assert!((backend.current_time() - 0.5).abs() < 1e-9);
}
