//! Client-side access gate for the premium report sections.
//!
//! The codes below live in client logic on purpose: this gate is cosmetic,
//! not a security boundary. There is no server-side verification, and any
//! string carrying the issuing prefix passes.

/// Fixed codes handed out for internal testing and campaigns.
const VALID_CODES: [&str; 3] = ["JUYOU2025", "VIP888", "OPENLAB"];

/// Keys minted by the external card-code vendor all start with this prefix,
/// e.g. "JUYOU-A7B2".
const UNLOCK_PREFIX: &str = "JUYOU-";

const PURCHASE_URL: &str = "https://mianbaoduo.com/o/your-product-link";

/// Normalize and check an unlock code: trim, uppercase, then exact match
/// against the fixed set or a prefix match for vendor-issued keys.
pub fn code_is_valid(input: &str) -> bool {
    let clean = input.trim().to_uppercase();

    if clean.starts_with(UNLOCK_PREFIX) {
        return true;
    }

    VALID_CODES.contains(&clean.as_str())
}

/// External purchase page. Completing a purchase is never verified here; the
/// buyer comes back with a code.
pub fn purchase_url() -> &'static str {
    PURCHASE_URL
}

/// Unlock state scoped to the currently displayed report.
#[derive(Debug, Default)]
pub struct AccessGate {
    unlocked: bool,
    rejected_attempts: u32,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Number of rejected codes since the last unlock or reset. Retries are
    /// unlimited; this only feeds the inline error display.
    pub fn rejected_attempts(&self) -> u32 {
        self.rejected_attempts
    }

    /// Try a code. Accepting reveals the premium content for this report;
    /// rejection counts an attempt and leaves the gate closed.
    pub fn unlock(&mut self, code: &str) -> bool {
        if code_is_valid(code) {
            self.unlocked = true;
            self.rejected_attempts = 0;
        } else {
            self.rejected_attempts += 1;
        }
        self.unlocked
    }

    /// Relock, e.g. when a new report replaces the current one.
    pub fn reset(&mut self) {
        self.unlocked = false;
        self.rejected_attempts = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_codes_accept_case_insensitively_and_trimmed() {
        assert!(code_is_valid("JUYOU2025"));
        assert!(code_is_valid("juyou2025"));
        assert!(code_is_valid(" vip888 "));
        assert!(code_is_valid("OpenLab"));
    }

    #[test]
    fn prefix_acts_as_wildcard() {
        assert!(code_is_valid("JUYOU-A7B2"));
        assert!(code_is_valid("juyou-x"));
        assert!(code_is_valid("  juyou-  "));
    }

    #[test]
    fn near_misses_reject() {
        assert!(!code_is_valid("JUYOU"));
        assert!(!code_is_valid("random"));
        assert!(!code_is_valid(""));
        assert!(!code_is_valid("VIP8888"));
    }

    #[test]
    fn gate_tracks_attempts_and_unlocks() {
        let mut gate = AccessGate::new();
        assert!(!gate.is_unlocked());

        assert!(!gate.unlock("nope"));
        assert!(!gate.unlock("still nope"));
        assert_eq!(gate.rejected_attempts(), 2);

        assert!(gate.unlock("JUYOU-KEY"));
        assert!(gate.is_unlocked());
        assert_eq!(gate.rejected_attempts(), 0);

        gate.reset();
        assert!(!gate.is_unlocked());
    }
}
