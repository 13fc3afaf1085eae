// Bookkeeping for the animation loop. Holds the lifecycle state and the
// handle of the frame currently requested from the host, so stopping can
// cancel it. `H` is whatever the host scheduler hands back; for
// requestAnimationFrame that is an i32.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Mounted, no frame requested yet.
    Idle,
    Running,
    /// Terminal.
    Stopped,
}

#[derive(Debug)]
pub struct FrameLoop<H> {
    state: LoopState,
    pending: Option<H>,
    frames: u64,
}

impl<H> Default for FrameLoop<H> {
    fn default() -> Self {
        FrameLoop::new()
    }
}

impl<H> FrameLoop<H> {
    pub fn new() -> Self {
        FrameLoop {
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames that have actually ticked.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    pub(crate) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns true when the caller should request the first frame.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            true
        } else {
            false
        }
    }

    /// Records a requested frame. If the loop stopped meanwhile the handle
    /// is given back and must be cancelled by the caller.
    pub fn scheduled(&mut self, handle: H) -> Option<H> {
        if self.is_running() {
            self.pending = Some(handle);
            None
        } else {
            Some(handle)
        }
    }

    /// Called when a requested frame fires. Returns whether to tick.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.is_running() {
            self.frames += 1;
            true
        } else {
            false
        }
    }

    /// Undoes a `start` whose first frame could not be set up, so a later
    /// `start` can try again. Returns the pending handle, if any.
    pub fn abort_start(&mut self) -> Option<H> {
        if self.state == LoopState::Running {
            self.state = LoopState::Idle;
        }
        self.pending.take()
    }

    /// Stops for good. Returns the outstanding frame handle, if any; calling
    /// again is a no-op.
    pub fn stop(&mut self) -> Option<H> {
        self.state = LoopState::Stopped;
        self.pending.take()
    }
}
