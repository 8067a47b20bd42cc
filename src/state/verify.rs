#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

/// Number of digit slots in a verification code.
pub const CODE_LEN: usize = 6;

/// Seconds a user must wait before a new code can be requested.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Delay before the post-check transition fires (navigate on match,
/// clear-and-refocus on mismatch), in milliseconds.
pub const RESULT_DELAY_MS: u32 = 1_000;

/// Demo verification code. There is no backend check; both verification
/// screens compare against this literal.
pub const DEMO_CODE: &str = "123456";

/// Outcome of comparing an assembled code against the expected value.
///
/// Reset to `Unknown` whenever any slot changes, on mismatch recovery, and
/// on resend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodeCheck {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// What a single digit-entry event did, so the caller can issue the
/// matching side effects (move focus, schedule the delayed transition).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitOutcome {
    /// False when the input was rejected with no state change.
    pub accepted: bool,
    /// Slot that should receive focus after this event, if any.
    pub focus: Option<usize>,
    /// Set when this event filled the last empty slot and the assembled
    /// code was checked.
    pub completed: Option<CodeCheck>,
}

impl DigitOutcome {
    pub const REJECTED: Self = Self { accepted: false, focus: None, completed: None };
}

/// State for a fixed-length code-entry form: slot contents, check result,
/// and the resend countdown.
///
/// All methods are pure state transitions. Timers (the 1-second countdown
/// tick and the delayed post-check transition) belong to the component
/// driving this state and must be cancelled on teardown.
#[derive(Clone, Debug)]
pub struct VerifyState {
    slots: [Option<char>; CODE_LEN],
    check: CodeCheck,
    countdown: u32,
    navigated: bool,
}

impl Default for VerifyState {
    fn default() -> Self {
        Self {
            slots: [None; CODE_LEN],
            check: CodeCheck::Unknown,
            countdown: RESEND_COOLDOWN_SECS,
            navigated: false,
        }
    }
}

/// Compare an assembled code against the expected value.
///
/// Pure and side-effect free; callers decide what to do with the result.
pub fn check_code(assembled: &str, expected: &str) -> CodeCheck {
    if assembled == expected {
        CodeCheck::Valid
    } else {
        CodeCheck::Invalid
    }
}

impl VerifyState {
    /// Text content of one slot, for rendering.
    pub fn slot_text(&self, index: usize) -> String {
        self.slots
            .get(index)
            .copied()
            .flatten()
            .map(String::from)
            .unwrap_or_default()
    }

    pub fn check(&self) -> CodeCheck {
        self.check
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// The concatenated code once every slot holds a digit.
    pub fn assembled(&self) -> Option<String> {
        self.slots.iter().copied().collect::<Option<String>>()
    }

    /// Handle input into one slot.
    ///
    /// Accepts a single decimal digit (fills the slot, advances focus) or
    /// an empty string (clears the slot). Multi-character and non-digit
    /// input is rejected with no state change. Any accepted edit resets the
    /// check result to `Unknown`; filling the last empty slot checks the
    /// assembled code against `expected`.
    pub fn input_digit(&mut self, index: usize, value: &str, expected: &str) -> DigitOutcome {
        if index >= CODE_LEN || value.chars().count() > 1 {
            return DigitOutcome::REJECTED;
        }

        let digit = match value.chars().next() {
            Some(c) if c.is_ascii_digit() => Some(c),
            Some(_) => return DigitOutcome::REJECTED,
            None => None,
        };

        self.slots[index] = digit;
        self.check = CodeCheck::Unknown;

        let focus = match digit {
            Some(_) if index + 1 < CODE_LEN => Some(index + 1),
            _ => None,
        };

        let completed = self.assembled().map(|code| {
            self.check = check_code(&code, expected);
            self.check
        });

        DigitOutcome { accepted: true, focus, completed }
    }

    /// Handle backspace in one slot: if the slot is already empty, focus
    /// moves to the previous slot. Deleting a digit goes through
    /// [`Self::input_digit`] with an empty value.
    pub fn backspace(&mut self, index: usize) -> Option<usize> {
        if index > 0 && index < CODE_LEN && self.slots[index].is_none() {
            Some(index - 1)
        } else {
            None
        }
    }

    /// One countdown second elapsed. Saturates at zero.
    pub fn tick(&mut self) {
        self.countdown = self.countdown.saturating_sub(1);
    }

    /// Resend is only permitted once the countdown has run out.
    pub fn can_resend(&self) -> bool {
        self.countdown == 0
    }

    /// Request a new code: restart the countdown and clear all entry state.
    /// Returns false (no state change) while the countdown is still running.
    /// The caller emits the actual send-code request on success.
    pub fn resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.countdown = RESEND_COOLDOWN_SECS;
        self.slots = [None; CODE_LEN];
        self.check = CodeCheck::Unknown;
        true
    }

    /// Delayed recovery after a mismatch: clear all slots and return the
    /// check result to `Unknown`. Focus should return to slot 0.
    pub fn reset_after_mismatch(&mut self) {
        self.slots = [None; CODE_LEN];
        self.check = CodeCheck::Unknown;
    }

    /// One-shot guard for the post-match navigation side effect. Returns
    /// true exactly once per screen.
    pub fn begin_navigation(&mut self) -> bool {
        !std::mem::replace(&mut self.navigated, true)
    }
}
