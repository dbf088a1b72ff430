use std::collections::VecDeque;

use serde::Serialize;

use super::event::TelemetryEvent;
use crate::kernel::dialogue::types::Intent;
use crate::kernel::emotion::types::EmotionLabel;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TelemetrySnapshot {
    pub turn_stats: TurnStats,
    pub speech_stats: SpeechStats,
    pub vision_stats: VisionStats,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TurnStats {
    pub total: u64,
    /// Indexed like `EmotionLabel::ALL`
    pub by_emotion: [u64; EmotionLabel::ALL.len()],
    /// Indexed like `Intent::ALL`
    pub by_intent: [u64; Intent::ALL.len()],
}

impl TurnStats {
    pub fn emotion(&self, label: EmotionLabel) -> u64 {
        self.by_emotion[label.index()]
    }

    pub fn intent(&self, intent: Intent) -> u64 {
        self.by_intent[intent.index()]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SpeechStats {
    pub enqueued: u64,
    pub skipped: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VisionStats {
    pub frames: u64,
    pub missing: u64,
    pub faces: u64,
    pub face_ratio: f64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::TurnCompleted { emotion, intent, .. } => {
                snap.turn_stats.total += 1;
                snap.turn_stats.by_emotion[emotion.index()] += 1;
                snap.turn_stats.by_intent[intent.index()] += 1;
            }
            TelemetryEvent::SpeechEnqueued { .. } => snap.speech_stats.enqueued += 1,
            TelemetryEvent::SpeechSkipped { .. } => snap.speech_stats.skipped += 1,
            TelemetryEvent::FrameProcessed { face_detected, .. } => {
                snap.vision_stats.frames += 1;
                if *face_detected {
                    snap.vision_stats.faces += 1;
                }
            }
            TelemetryEvent::FrameMissing { .. } => snap.vision_stats.missing += 1,
        }
    }

    if snap.vision_stats.frames > 0 {
        snap.vision_stats.face_ratio =
            snap.vision_stats.faces as f64 / snap.vision_stats.frames as f64;
    }

    snap
}
