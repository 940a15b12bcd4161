//! Frame pacing
//!
//! Schedules frame deadlines for a target rate and keeps a rolling fps figure.

use std::time::{Duration, Instant};

/// Frames in the rolling fps window
const FPS_WINDOW: usize = 60;

/// Fixed-rate frame clock
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next_frame: Instant,
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
}

impl FrameClock {
    /// Clock whose first frame is due immediately. `fps` of 0 is treated as 1.
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next_frame: now,
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame should run
    #[inline]
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// True once the current deadline has passed
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record a frame at `now` and schedule the next one. A late frame does
    /// not trigger catch-up frames: the schedule restarts from `now`.
    pub fn frame_done(&mut self, now: Instant) {
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        self.next_frame += self.period;
        if self.next_frame <= now {
            self.next_frame = now + self.period;
        }
    }

    /// Average fps over the last 60 frames (0 until the window is full)
    pub fn fps(&self) -> f32 {
        // Slot at frame_index is the oldest once the ring has wrapped
        let oldest = self.frame_times[self.frame_index];
        let newest = self.frame_times[(self.frame_index + FPS_WINDOW - 1) % FPS_WINDOW];
        match (oldest, newest) {
            (Some(oldest), Some(newest)) if newest > oldest => {
                (FPS_WINDOW - 1) as f32 / (newest - oldest).as_secs_f32()
            }
            _ => 0.0,
        }
    }
}
