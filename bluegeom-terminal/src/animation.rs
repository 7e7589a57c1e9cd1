/// A point travelling from a source to a destination
use bluegeom_core::prelude::*;

/// Drives a mutable point toward a frozen destination.
///
/// Progress accumulates by `step` each frame. Interpolation saturates, so
/// once progress reaches 1 the point sits exactly on the destination.
#[derive(Debug, Clone)]
pub struct Animation {
    source: Point3f,
    destination: Point3f,
    position: Point3f,
    frame: u32,
    step: f32,
}

impl Animation {
    /// Fails unless `step` is finite and above zero, since any other step
    /// never reaches the destination.
    pub fn new(source: Point3f, destination: Point3f, step: f32) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GeomError::InvalidArgument(format!(
                "step must be a finite number above zero, got {}",
                step
            )));
        }
        Ok(Self {
            source: source.to_frozen(),
            destination: destination.to_frozen(),
            position: source.to_mutable(),
            frame: 0,
            step,
        })
    }

    /// Advance one frame. Returns true once the point has arrived.
    pub fn advance(&mut self) -> Result<bool> {
        if self.arrived() {
            return Ok(true);
        }
        // Progress from the frame count, so small steps cannot stall on
        // float accumulation.
        self.frame = self.frame.saturating_add(1);
        let next = Point3f::lerp(&self.source, &self.destination, self.raw_progress())?;
        self.position.set(&next)?;
        Ok(self.arrived())
    }

    /// Nudge the destination; the trip restarts from the current position.
    pub fn retarget(&mut self, axis: Axis, delta: f32) -> Result<()> {
        self.destination = self.destination.added_value(axis, delta)?.to_frozen();
        self.source = self.position.to_frozen();
        self.frame = 0;
        tracing::debug!(destination = %self.destination, "retargeted");
        Ok(())
    }

    pub fn restart(&mut self) -> Result<()> {
        self.position.set(&self.source)?;
        self.frame = 0;
        Ok(())
    }

    pub fn arrived(&self) -> bool {
        self.position.at(&self.destination)
    }

    pub fn position(&self) -> &Point3f {
        &self.position
    }

    pub fn source(&self) -> &Point3f {
        &self.source
    }

    pub fn destination(&self) -> &Point3f {
        &self.destination
    }

    /// Fraction travelled, clamped to `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.raw_progress().clamp(0.0, 1.0)
    }

    fn raw_progress(&self) -> f32 {
        (f64::from(self.frame) * f64::from(self.step)) as f32
    }
}
