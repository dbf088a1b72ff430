use image::RgbImage;

use vhuman::vision::pipeline::{
    BgrFrame, FaceLandmarks, FacePipeline, FrameOutcome, FrameSource, Landmark, LandmarkProvider,
    NoFaceProvider, SyntheticFrameSource,
};

/// Yields the scripted frames once each, then nothing.
struct ScriptedSource {
    frames: Vec<Option<BgrFrame>>,
}

impl FrameSource for ScriptedSource {
    fn read_frame(&mut self) -> Option<BgrFrame> {
        if self.frames.is_empty() {
            return None;
        }
        self.frames.remove(0)
    }
}

/// Reports a face whenever the top-left pixel is pure red.
struct RedCornerProvider;

impl LandmarkProvider for RedCornerProvider {
    fn detect(&mut self, frame: &RgbImage) -> Option<FaceLandmarks> {
        if frame.get_pixel(0, 0).0 == [255, 0, 0] {
            Some(FaceLandmarks {
                points: vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }],
            })
        } else {
            None
        }
    }
}

#[test]
fn test_bgr_to_rgb_swaps_channels() {
    // 1x1 frame, B=10 G=20 R=30
    let frame = BgrFrame::new(1, 1, vec![10, 20, 30]).unwrap();
    let rgb = frame.to_rgb(false);
    assert_eq!(rgb.get_pixel(0, 0).0, [30, 20, 10]);
}

#[test]
fn test_mirror_flips_horizontally() {
    // 2x1 frame: left pixel pure blue, right pixel pure red (BGR bytes)
    let frame = BgrFrame::new(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();

    let plain = frame.to_rgb(false);
    assert_eq!(plain.get_pixel(0, 0).0, [0, 0, 255]);
    assert_eq!(plain.get_pixel(1, 0).0, [255, 0, 0]);

    let mirrored = frame.to_rgb(true);
    assert_eq!(mirrored.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(mirrored.get_pixel(1, 0).0, [0, 0, 255]);
}

#[test]
fn test_frame_size_is_checked() {
    assert!(BgrFrame::new(2, 2, vec![0; 11]).is_none());
    assert!(BgrFrame::new(2, 2, vec![0; 12]).is_some());
}

#[test]
fn test_missing_frame_is_not_fatal() {
    let red_right = BgrFrame::new(2, 1, vec![0, 0, 0, 0, 0, 255]).unwrap();
    let source = ScriptedSource {
        frames: vec![None, Some(red_right.clone()), None, Some(red_right)],
    };
    let mut pipeline = FacePipeline::new(Box::new(source), Box::new(RedCornerProvider), true);

    assert_eq!(pipeline.process_frame(), FrameOutcome::NoFrame);
    assert!(matches!(pipeline.process_frame(), FrameOutcome::Face(_)), "mirrored red reaches (0,0)");
    assert_eq!(pipeline.process_frame(), FrameOutcome::NoFrame);
    assert!(matches!(pipeline.process_frame(), FrameOutcome::Face(_)));
    // Source exhausted: keeps answering NoFrame
    assert_eq!(pipeline.process_frame(), FrameOutcome::NoFrame);
    assert_eq!(pipeline.process_frame(), FrameOutcome::NoFrame);
}

#[test]
fn test_synthetic_source_reports_no_face() {
    let mut pipeline = FacePipeline::new(
        Box::new(SyntheticFrameSource::new(8, 6)),
        Box::new(NoFaceProvider),
        true,
    );
    for _ in 0..3 {
        assert_eq!(pipeline.process_frame(), FrameOutcome::NoFace);
    }
}

/// Capture device that hands over short buffers, like a truncated read.
struct TruncatedSource {
    reads: u32,
}

impl FrameSource for TruncatedSource {
    fn read_frame(&mut self) -> Option<BgrFrame> {
        self.reads += 1;
        if self.reads % 2 == 1 {
            // 4x4 needs 48 bytes
            BgrFrame::new(4, 4, vec![0; 10])
        } else {
            BgrFrame::new(4, 4, vec![0; 48])
        }
    }
}

#[test]
fn test_truncated_capture_counts_as_no_frame() {
    let mut pipeline = FacePipeline::new(
        Box::new(TruncatedSource { reads: 0 }),
        Box::new(NoFaceProvider),
        true,
    );

    // Bad buffer never reaches conversion; the loop keeps going.
    assert_eq!(pipeline.process_frame(), FrameOutcome::NoFrame);
    assert_eq!(pipeline.process_frame(), FrameOutcome::NoFace);
    assert_eq!(pipeline.process_frame(), FrameOutcome::NoFrame);
    assert_eq!(pipeline.process_frame(), FrameOutcome::NoFace);
}

#[test]
fn test_frame_accessors() {
    let frame = BgrFrame::blank(3, 2);
    assert_eq!(frame.width(), 3);
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.data().len(), 18);
}
