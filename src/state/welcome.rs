#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

/// Headline typed out on the welcome screen.
pub const WELCOME_TEXT: &str = "Welcome to Pictora";

const TYPE_DELAY_MS: u32 = 100;
const PAUSE_DELAY_MS: u32 = 1_500;
const DELETE_DELAY_MS: u32 = 50;
const EXIT_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Pausing,
    Deleting,
    Done,
}

/// Typewriter sequencer for the welcome headline: type the full text, hold
/// it, delete it, then finish (the page navigates away).
///
/// Each [`Self::step`] advances one animation frame and returns the delay
/// until the next step, or `None` once the sequence has finished. The
/// driving component owns the timeout handles; this type only sequences.
#[derive(Clone, Debug)]
pub struct Typewriter {
    target: &'static str,
    visible: usize,
    phase: Phase,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(WELCOME_TEXT)
    }
}

impl Typewriter {
    /// `target` must be ASCII; the animation reveals one byte per step.
    pub fn new(target: &'static str) -> Self {
        debug_assert!(target.is_ascii());
        Self { target, visible: 0, phase: Phase::Typing }
    }

    /// The currently visible prefix of the headline.
    pub fn text(&self) -> &str {
        &self.target[..self.visible]
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance one frame. Returns the delay in milliseconds before the next
    /// call, or `None` when the sequence is over.
    pub fn step(&mut self) -> Option<u32> {
        match self.phase {
            Phase::Typing => {
                if self.visible < self.target.len() {
                    self.visible += 1;
                    Some(TYPE_DELAY_MS)
                } else {
                    self.phase = Phase::Pausing;
                    Some(PAUSE_DELAY_MS)
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                Some(DELETE_DELAY_MS)
            }
            Phase::Deleting => {
                if self.visible > 0 {
                    self.visible -= 1;
                    if self.visible == 0 {
                        self.phase = Phase::Done;
                        Some(EXIT_DELAY_MS)
                    } else {
                        Some(DELETE_DELAY_MS)
                    }
                } else {
                    self.phase = Phase::Done;
                    Some(EXIT_DELAY_MS)
                }
            }
            Phase::Done => None,
        }
    }
}
