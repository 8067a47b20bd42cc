// Pure validation rules for the account-setup and password-reset forms.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Tri-state validity for the username field: `None` until the user has
/// typed something.
pub fn validate_username(value: &str) -> Option<bool> {
    if value.is_empty() {
        return None;
    }
    let valid = value.len() >= 3 && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    Some(valid)
}

/// Password strength score in 0..=100.
///
/// Length, mixed case, digits, and symbols each contribute a fixed amount,
/// capped at 100.
pub fn password_strength(value: &str) -> u8 {
    let mut strength: u32 = 0;
    if value.len() >= 8 {
        strength += 25;
    }
    if value.len() >= 12 {
        strength += 25;
    }
    if value.chars().any(|c| c.is_ascii_lowercase()) && value.chars().any(|c| c.is_ascii_uppercase())
    {
        strength += 25;
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        strength += 15;
    }
    if value.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 10;
    }
    #[allow(clippy::cast_possible_truncation)]
    {
        strength.min(100) as u8
    }
}

/// Coarse strength band shown next to the meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => Self::Weak,
            30..=59 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// CSS modifier suffix for the meter bar and label.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Whether a password/confirmation pair is ready to submit.
pub fn password_ready(password: &str, confirm: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN && password == confirm
}
