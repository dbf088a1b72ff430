use vhuman::kernel::dialogue::types::Intent;
use vhuman::kernel::emotion::types::EmotionLabel;
use vhuman::kernel::telemetry::event::TelemetryEvent;
use vhuman::kernel::telemetry::recorder::TelemetryRecorder;
use vhuman::kernel::time::Tick;

#[test]
fn test_snapshot_counts() {
    let mut recorder = TelemetryRecorder::new();
    let tick = Tick { frame: 1 };

    recorder.record(TelemetryEvent::TurnCompleted { tick, emotion: EmotionLabel::Happy, intent: Intent::Thanks });
    recorder.record(TelemetryEvent::TurnCompleted { tick, emotion: EmotionLabel::Happy, intent: Intent::Other });
    recorder.record(TelemetryEvent::SpeechSkipped { tick });
    recorder.record(TelemetryEvent::FrameProcessed { tick, face_detected: true });
    recorder.record(TelemetryEvent::FrameProcessed { tick, face_detected: false });
    recorder.record(TelemetryEvent::FrameMissing { tick });

    let snap = recorder.snapshot();
    assert_eq!(snap.turn_stats.total, 2);
    assert_eq!(snap.turn_stats.emotion(EmotionLabel::Happy), 2);
    assert_eq!(snap.turn_stats.intent(Intent::Thanks), 1);
    assert_eq!(snap.turn_stats.intent(Intent::Other), 1);
    assert_eq!(snap.speech_stats.skipped, 1);
    assert_eq!(snap.vision_stats.frames, 2);
    assert_eq!(snap.vision_stats.missing, 1);
    assert!((snap.vision_stats.face_ratio - 0.5).abs() < 1e-9);

    recorder.clear();
    assert!(recorder.is_empty());
}

#[test]
fn test_buffer_is_bounded() {
    let mut recorder = TelemetryRecorder::new();
    for frame in 0..10_050 {
        recorder.record(TelemetryEvent::FrameMissing { tick: Tick { frame } });
    }
    assert_eq!(recorder.len(), 10_000);
    assert_eq!(recorder.snapshot().vision_stats.missing, 10_000);
}

#[test]
fn test_events_carry_no_text() {
    // Serialized events only hold labels and counters
    let event = TelemetryEvent::TurnCompleted {
        tick: Tick { frame: 7 },
        emotion: EmotionLabel::Sad,
        intent: Intent::Apology,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(
        json,
        r#"{"TurnCompleted":{"tick":{"frame":7},"emotion":"sad","intent":"apology"}}"#
    );
}

#[test]
fn test_frame_events_carry_tick() {
    let event = TelemetryEvent::FrameProcessed {
        tick: Tick { frame: 3 },
        face_detected: false,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(
        json,
        r#"{"FrameProcessed":{"tick":{"frame":3},"face_detected":false}}"#
    );

    let json = serde_json::to_string(&TelemetryEvent::FrameMissing { tick: Tick { frame: 4 } }).unwrap();
    assert_eq!(json, r#"{"FrameMissing":{"tick":{"frame":4}}}"#);
}

#[test]
fn test_turn_stats_cover_every_label() {
    let mut recorder = TelemetryRecorder::new();
    let tick = Tick { frame: 1 };
    for (emotion, intent) in EmotionLabel::ALL.iter().zip(Intent::ALL.iter()) {
        recorder.record(TelemetryEvent::TurnCompleted { tick, emotion: *emotion, intent: *intent });
    }

    let snap = recorder.snapshot();
    assert_eq!(snap.turn_stats.by_emotion.len(), EmotionLabel::ALL.len());
    assert_eq!(snap.turn_stats.by_intent.len(), Intent::ALL.len());
    for emotion in EmotionLabel::ALL {
        assert_eq!(snap.turn_stats.emotion(emotion), 1);
    }
    // Four labels zipped against five intents
    assert_eq!(snap.turn_stats.intent(Intent::Apology), 1);
    assert_eq!(snap.turn_stats.intent(Intent::Other), 0);
}
