use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Point-of-gaze sample in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazePoint {
    pub x: f64,
    pub y: f64,
}

/// Callback invoked for every sample; `None` means no signal
pub type GazeListener = Box<dyn Fn(Option<GazePoint>) + Send + 'static>;

#[derive(Debug, Error)]
pub enum GazeError {
    #[error("gaze tracker unavailable: {0}")]
    Unavailable(String),
}

/// Lifecycle of an external gaze sensor. The engine never talks to a
/// concrete sensor directly, only through this capability.
pub trait GazeTracker: Send {
    fn begin(&mut self) -> Result<(), GazeError>;
    fn end(&mut self);
    fn set_listener(&mut self, listener: GazeListener);
}

/// Classify a horizontal position into one of four equal viewport bands,
/// numbered 1..=4. Positions outside the viewport clamp to the edge bands.
pub fn quadrant_for(x: f64, viewport_width: f64) -> u8 {
    if viewport_width <= 0.0 {
        return 1;
    }
    let band = viewport_width / 4.0;
    let q = (x / band).floor() as i64 + 1;
    q.clamp(1, 4) as u8
}

#[derive(Debug, Clone, Copy, Default)]
struct SpanAccum {
    min_quadrant: Option<u8>,
    max_quadrant: Option<u8>,
}

impl SpanAccum {
    fn observe(&mut self, q: u8) {
        self.min_quadrant = Some(self.min_quadrant.map_or(q, |m| m.min(q)));
        self.max_quadrant = Some(self.max_quadrant.map_or(q, |m| m.max(q)));
    }

    /// Span of quadrants visited; a line with no samples spans zero
    fn span(&self) -> u8 {
        match (self.min_quadrant, self.max_quadrant) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }
}

/// Per-line quadrant tracking shared between the sensor callback and the
/// scheduler thread. One instance per playback; nothing here is global,
/// so concurrent sessions cannot interfere.
#[derive(Debug)]
pub struct QuadrantSpanStats {
    viewport_width: f64,
    accum: Mutex<SpanAccum>,
}

impl QuadrantSpanStats {
    pub fn new(viewport_width: f64) -> Arc<Self> {
        Arc::new(Self {
            viewport_width,
            accum: Mutex::new(SpanAccum::default()),
        })
    }

    /// Feed one sample; `None` (no signal) is ignored
    pub fn observe(&self, sample: Option<GazePoint>) {
        if let Some(point) = sample {
            let q = quadrant_for(point.x, self.viewport_width);
            if let Ok(mut accum) = self.accum.lock() {
                accum.observe(q);
            }
        }
    }

    /// Called when a new line is revealed
    pub fn start_line(&self) {
        if let Ok(mut accum) = self.accum.lock() {
            *accum = SpanAccum::default();
        }
    }

    /// Span accumulated while the finished line was on screen
    pub fn line_span(&self) -> u8 {
        self.accum.lock().map(|a| a.span()).unwrap_or(0)
    }

    /// Listener suitable for [`GazeTracker::set_listener`]
    pub fn listener(self: &Arc<Self>) -> GazeListener {
        let stats = Arc::clone(self);
        Box::new(move |sample| stats.observe(sample))
    }
}

/// Tracker that never produces samples; used when no sensor is attached
#[derive(Debug, Default)]
pub struct NullGazeTracker;

impl GazeTracker for NullGazeTracker {
    fn begin(&mut self) -> Result<(), GazeError> {
        Ok(())
    }

    fn end(&mut self) {}

    fn set_listener(&mut self, _listener: GazeListener) {}
}

/// Tracker fed by the host event loop (terminal pointer position stands
/// in for a real eye tracker). `push` fans the sample out to the listener.
pub struct PointerGazeTracker {
    listener: Option<GazeListener>,
    active: bool,
}

impl PointerGazeTracker {
    pub fn new() -> Self {
        Self {
            listener: None,
            active: false,
        }
    }

    pub fn push(&self, sample: Option<GazePoint>) {
        if self.active {
            if let Some(ref listener) = self.listener {
                listener(sample);
            }
        }
    }
}

impl Default for PointerGazeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GazeTracker for PointerGazeTracker {
    fn begin(&mut self) -> Result<(), GazeError> {
        self.active = true;
        Ok(())
    }

    fn end(&mut self) {
        self.active = false;
    }

    fn set_listener(&mut self, listener: GazeListener) {
        self.listener = Some(listener);
    }
}
