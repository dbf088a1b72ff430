use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::time::{interval, Duration}; // Only for the loop driver
use tracing::{debug, info};

use super::event::InputEvent;
use super::session::Companion;
use super::speech::SpeechTaskId;
use super::telemetry::event::TelemetryEvent;
use super::telemetry::metrics::TelemetrySnapshot;
use super::telemetry::recorder::TelemetryRecorder;
use super::time::Tick;
use crate::vision::pipeline::{FacePipeline, FrameOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Rendered transcript line for the panel
    Display(String),
    Shutdown,
}

/// Owns the UI-side context and drives it at a fixed tick rate.
pub struct Reactor {
    pub receiver: mpsc::Receiver<InputEvent>,
    pub companion: Companion,
    pub face: Option<FacePipeline>,
    pub telemetry: TelemetryRecorder,
    pub tick: Tick,
    period: Duration,
}

impl Reactor {
    pub fn new(
        receiver: mpsc::Receiver<InputEvent>,
        companion: Companion,
        face: Option<FacePipeline>,
        period: Duration,
    ) -> Self {
        Self {
            receiver,
            companion,
            face,
            telemetry: TelemetryRecorder::new(),
            tick: Tick::new(),
            period,
        }
    }

    /// One UI iteration: handle submissions in arrival order, then one face frame.
    /// MUST NOT await I/O or timers.
    pub fn tick_step(&mut self, events: Vec<InputEvent>) -> Vec<SideEffect> {
        self.tick = self.tick.next();
        let mut effects = Vec::new();

        for event in events {
            match event {
                InputEvent::Submit(text) => self.handle_submit(&text, &mut effects),
                InputEvent::Introduce => {
                    let task = self.companion.introduce();
                    self.record_speech(task);
                }
                InputEvent::Quit => {
                    // Anything after Quit in the same batch is never seen.
                    effects.push(SideEffect::Shutdown);
                    return effects;
                }
            }
        }

        if let Some(face) = self.face.as_mut() {
            match face.process_frame() {
                FrameOutcome::NoFrame => self
                    .telemetry
                    .record(TelemetryEvent::FrameMissing { tick: self.tick }),
                FrameOutcome::NoFace => self.telemetry.record(TelemetryEvent::FrameProcessed {
                    tick: self.tick,
                    face_detected: false,
                }),
                FrameOutcome::Face(_landmarks) => {
                    // Hook for face-driven behaviour; landmarks are not consumed yet.
                    self.telemetry.record(TelemetryEvent::FrameProcessed {
                        tick: self.tick,
                        face_detected: true,
                    })
                }
            }
        }

        effects
    }

    fn handle_submit(&mut self, text: &str, effects: &mut Vec<SideEffect>) {
        let before = self.companion.transcript().len();
        let Some((turn, task)) = self.companion.submit_tracked(text) else {
            return;
        };

        self.telemetry.record(TelemetryEvent::TurnCompleted {
            tick: self.tick,
            emotion: turn.emotion,
            intent: turn.intent,
        });
        self.record_speech(task);

        let transcript = self.companion.transcript();
        for entry in transcript.since(before) {
            effects.push(SideEffect::Display(transcript.render(entry).to_string()));
        }
    }

    fn record_speech(&mut self, task: Option<SpeechTaskId>) {
        self.telemetry.record(match task {
            Some(id) => TelemetryEvent::SpeechEnqueued {
                tick: self.tick,
                task_id: id.0,
            },
            None => TelemetryEvent::SpeechSkipped { tick: self.tick },
        });
    }

    /// Async Driver Loop. Returns when asked to quit or when input closes.
    pub async fn run(&mut self) -> TelemetrySnapshot {
        info!(
            period_ms = self.period.as_millis() as u64,
            language = ?self.companion.lexicon().language,
            "reactor started"
        );

        let mut cadence = interval(self.period);
        cadence.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        'driver: loop {
            // Driver: Wait for physical time boundary
            cadence.tick().await;

            // Driver: Drain Events
            let mut events = Vec::new();
            let mut closed = false;
            loop {
                match self.receiver.try_recv() {
                    Ok(event) => events.push(event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        closed = true;
                        break;
                    }
                }
            }
            if closed {
                debug!("input channel closed");
                events.push(InputEvent::Quit);
            }

            // Core: Execute Step
            for effect in self.tick_step(events) {
                match effect {
                    SideEffect::Display(line) => println!("{}", line),
                    SideEffect::Shutdown => break 'driver,
                }
            }
        }

        let snapshot = self.telemetry.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => info!(ticks = self.tick.frame, summary = %json, "reactor stopped"),
            Err(e) => info!(ticks = self.tick.frame, error = %e, "reactor stopped"),
        }
        snapshot
    }
}
