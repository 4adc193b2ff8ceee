//! Environment overrides for property-test suites.
//!
//! Every proptest suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so CI can scale all of them at once.

use std::{env, str::FromStr};

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable toggling forked execution of property cases.
pub const WEFT_PBT_FORK_ENV_KEY: &str = "WEFT_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the environment, keeping the suite defaults
    /// for unset or unparsable variables.
    ///
    /// # Examples
    /// ```
    /// use weft_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override::<CaseCount>(PROGTEST_CASES_ENV_KEY)
                .map_or(default_cases, |count| count.0),
            fork: read_override::<Switch>(WEFT_PBT_FORK_ENV_KEY)
                .map_or(default_fork, |switch| switch.0),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn read_override<T>(key: &'static str) -> Option<T>
where
    T: FromStr<Err = &'static str>,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(reason) => {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason,
                "ignoring invalid property-test override",
            );
            None
        }
    }
}

/// Strictly positive case count.
struct CaseCount(u32);

impl FromStr for CaseCount {
    type Err = &'static str;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().parse::<u32>() {
            Ok(0) => Err("case count must be positive"),
            Ok(count) => Ok(Self(count)),
            Err(_) => Err("case count must be an unsigned integer"),
        }
    }
}

/// Boolean accepting the usual spellings of on and off.
struct Switch(bool);

impl FromStr for Switch {
    type Err = &'static str;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Self(true)),
            "0" | "false" | "no" | "off" => Ok(Self(false)),
            _ => Err("expected true/false, yes/no, on/off or 1/0"),
        }
    }
}
