use image::{imageops, ImageBuffer, Rgb, RgbImage};
use tracing::trace;

/// Raw camera frame, 3 bytes per pixel in B, G, R order.
///
/// Only constructible with a buffer matching its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BgrFrame {
    /// `None` if `data` does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return None;
        }
        Some(Self { width, height, data })
    }

    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Swap to RGB, optionally mirrored so the preview behaves like a mirror.
    pub fn to_rgb(&self, mirror: bool) -> RgbImage {
        let width = self.width as usize;
        let rgb: RgbImage = ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let i = ((y as usize) * width + (x as usize)) * 3;
            Rgb([self.data[i + 2], self.data[i + 1], self.data[i]])
        });
        if mirror {
            imageops::flip_horizontal(&rgb)
        } else {
            rgb
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaceLandmarks {
    pub points: Vec<Landmark>,
}

/// Camera or other frame producer. `None` means nothing to show this tick.
pub trait FrameSource: Send {
    fn read_frame(&mut self) -> Option<BgrFrame>;
}

/// Face detector. At most one face per call; no state carried between calls.
pub trait LandmarkProvider: Send {
    fn detect(&mut self, frame: &RgbImage) -> Option<FaceLandmarks>;
}

/// Stand-in capture device producing a constant frame.
#[derive(Debug, Clone)]
pub struct SyntheticFrameSource {
    frame: BgrFrame,
}

impl SyntheticFrameSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: BgrFrame::blank(width, height),
        }
    }
}

impl FrameSource for SyntheticFrameSource {
    fn read_frame(&mut self) -> Option<BgrFrame> {
        Some(self.frame.clone())
    }
}

/// Detector that never finds a face.
#[derive(Debug, Default)]
pub struct NoFaceProvider;

impl LandmarkProvider for NoFaceProvider {
    fn detect(&mut self, _frame: &RgbImage) -> Option<FaceLandmarks> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Source had no frame (device gone, end of stream). Not an error.
    NoFrame,
    NoFace,
    Face(FaceLandmarks),
}

pub struct FacePipeline {
    source: Box<dyn FrameSource>,
    provider: Box<dyn LandmarkProvider>,
    mirror: bool,
}

impl FacePipeline {
    pub fn new(
        source: Box<dyn FrameSource>,
        provider: Box<dyn LandmarkProvider>,
        mirror: bool,
    ) -> Self {
        Self {
            source,
            provider,
            mirror,
        }
    }

    /// Read one frame and look for a face. Called once per driver tick.
    pub fn process_frame(&mut self) -> FrameOutcome {
        let Some(frame) = self.source.read_frame() else {
            // Capture failed? Silent. No face data this tick.
            return FrameOutcome::NoFrame;
        };

        let rgb = frame.to_rgb(self.mirror);
        match self.provider.detect(&rgb) {
            Some(face) => {
                trace!(points = face.points.len(), "face landmarks detected");
                FrameOutcome::Face(face)
            }
            None => FrameOutcome::NoFace,
        }
    }
}
