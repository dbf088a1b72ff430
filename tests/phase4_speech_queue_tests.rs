use std::sync::mpsc as std_mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use vhuman::kernel::speech::SpeechDispatcher;
use vhuman::services::tts::SpeechSynthesizer;
use vhuman::{Error, Result};

/// Records every text it is asked to speak. Texts containing "fail" error
/// out, texts containing "panic" panic.
struct RecordingBackend {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl SpeechSynthesizer for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        if text.contains("panic") {
            panic!("backend blew up on {text}");
        }
        if text.contains("fail") {
            return Err(Error::Synthesis(format!("refused {text}")));
        }
        Ok(())
    }
}

/// Blocks on every call until the test releases it.
struct GatedBackend {
    gate: std_mpsc::Receiver<()>,
    spoken: Arc<Mutex<Vec<String>>>,
}

impl SpeechSynthesizer for GatedBackend {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        let _ = self.gate.recv();
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[test]
fn test_fifo_order_preserved() {
    let spoken = Arc::new(Mutex::new(Vec::new()));
    let mut dispatcher = SpeechDispatcher::spawn(RecordingBackend { spoken: spoken.clone() }).unwrap();

    let texts: Vec<String> = (0..20).map(|i| format!("utterance {i}")).collect();
    for text in &texts {
        assert!(dispatcher.enqueue(text.clone()).is_some());
    }
    assert_eq!(dispatcher.enqueued(), 20);

    dispatcher.shutdown();
    assert_eq!(*spoken.lock().unwrap(), texts);
}

#[test]
fn test_failure_does_not_block_next_task() {
    let spoken = Arc::new(Mutex::new(Vec::new()));
    let mut dispatcher = SpeechDispatcher::spawn(RecordingBackend { spoken: spoken.clone() }).unwrap();

    dispatcher.enqueue("one");
    dispatcher.enqueue("two fail");
    dispatcher.enqueue("three");
    dispatcher.enqueue("four fail");
    dispatcher.enqueue("five");

    dispatcher.shutdown();
    assert_eq!(
        *spoken.lock().unwrap(),
        vec!["one", "two fail", "three", "four fail", "five"]
    );
}

#[test]
fn test_panicking_backend_does_not_stop_worker() {
    let spoken = Arc::new(Mutex::new(Vec::new()));
    let mut dispatcher = SpeechDispatcher::spawn(RecordingBackend { spoken: spoken.clone() }).unwrap();

    dispatcher.enqueue("before");
    dispatcher.enqueue("panic now");
    dispatcher.enqueue("after");

    dispatcher.shutdown();
    // The panic happens after the push, so the poisoned lock is still readable.
    let spoken = spoken.lock().unwrap_or_else(|e| e.into_inner());
    assert_eq!(*spoken, vec!["before", "panic now", "after"]);
}

#[test]
fn test_enqueue_does_not_block_on_stalled_backend() {
    let (release, gate) = std_mpsc::channel();
    let spoken = Arc::new(Mutex::new(Vec::new()));
    let mut dispatcher = SpeechDispatcher::spawn(GatedBackend {
        gate,
        spoken: spoken.clone(),
    })
    .unwrap();

    let started = Instant::now();
    for i in 0..100 {
        dispatcher.enqueue(format!("queued {i}"));
    }
    assert!(
        started.elapsed() < Duration::from_millis(200),
        "enqueue blocked for {:?}",
        started.elapsed()
    );
    assert!(spoken.lock().unwrap().is_empty(), "backend is still stalled");

    // Release the backend and let it drain
    for _ in 0..100 {
        release.send(()).unwrap();
    }
    dispatcher.shutdown();
    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken.len(), 100);
    assert_eq!(spoken[0], "queued 0");
    assert_eq!(spoken[99], "queued 99");
}

#[test]
fn test_one_task_in_flight_at_a_time() {
    struct Exclusive {
        busy: Arc<Mutex<bool>>,
        overlaps: Arc<Mutex<u32>>,
    }

    impl SpeechSynthesizer for Exclusive {
        fn name(&self) -> &'static str {
            "exclusive"
        }

        fn speak(&mut self, _text: &str) -> Result<()> {
            {
                let mut busy = self.busy.lock().unwrap();
                if *busy {
                    *self.overlaps.lock().unwrap() += 1;
                }
                *busy = true;
            }
            std::thread::sleep(Duration::from_millis(2));
            *self.busy.lock().unwrap() = false;
            Ok(())
        }
    }

    let overlaps = Arc::new(Mutex::new(0));
    let mut dispatcher = SpeechDispatcher::spawn(Exclusive {
        busy: Arc::new(Mutex::new(false)),
        overlaps: overlaps.clone(),
    })
    .unwrap();
    for i in 0..10 {
        dispatcher.enqueue(format!("{i}"));
    }
    dispatcher.shutdown();
    assert_eq!(*overlaps.lock().unwrap(), 0);
}

#[test]
fn test_task_ids_are_unique() {
    let spoken = Arc::new(Mutex::new(Vec::new()));
    let mut dispatcher = SpeechDispatcher::spawn(RecordingBackend { spoken }).unwrap();

    let a = dispatcher.enqueue("a").unwrap();
    let b = dispatcher.enqueue("b").unwrap();
    assert_ne!(a, b);
    dispatcher.shutdown();
}
