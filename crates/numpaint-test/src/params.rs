//! Regression test parameters and operations

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare against expected values (default)
    #[default]
    Compare,
    /// Display mode - run and report without failing the build
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the running check
/// index, the mode, and the recorded failures.
pub struct RegParams {
    /// Name of the test (e.g. "process")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values.
    ///
    /// Records a failure (and returns `false`) if they differ by more
    /// than `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Check a boolean condition with a label.
    pub fn check(&mut self, condition: bool, label: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check '{}' for index {}",
                self.test_name, label, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two id sequences for exact equality.
    pub fn compare_ids(&mut self, expected: &[u32], actual: &[u32]) -> bool {
        self.index += 1;
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: id comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Clean up and report results.
    ///
    /// Returns `true` if all checks passed (display mode always passes).
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success || self.mode == RegTestMode::Display
    }

    /// Check if all tests have passed so far.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the list of failures.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("params");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure_is_recorded() {
        let mut rp = RegParams::new("params");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_check_and_ids() {
        let mut rp = RegParams::new("params");
        assert!(rp.check(true, "holds"));
        assert!(rp.compare_ids(&[1, 2, 3], &[1, 2, 3]));
        assert!(!rp.compare_ids(&[1, 2, 3], &[1, 2]));
        assert_eq!(rp.index(), 3);
    }
}
