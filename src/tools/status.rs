//! BACGuard Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Estimation instructions for AI assistants
pub const BAC_INSTRUCTIONS: &str = r#"
# BACGuard Instructions

BACGuard estimates Blood Alcohol Concentration (BAC) from what someone drank and
tells them whether it is safe to drive. It is advisory only and never a
substitute for a breathalyzer.

## Workflow

1. Call `list_drinks` to see the catalog (Soju, Beer, Makgeolli, Wine, Whiskey).
   Each quantity is one typical serving (e.g. one soju shot glass, 50ml).
2. Collect from the user:
   - gender (`male` or `female`)
   - body weight (`weight_unit` defaults to `kg`; `lb` and `g` also work)
   - each drink and how many servings
   - how long ago they started drinking
3. Call `estimate_bac`. Pass either `elapsed_hours` or `drinking_started_at`
   (RFC 3339, e.g. `2026-03-14T21:30:00+09:00`). If both are given,
   `elapsed_hours` wins.
4. Show the user `bac_percent`, `tier_display`, and `advisory`.

## Tiers

| Tier | BAC | Meaning |
|------|-----|---------|
| safe | below 0.03% | below the suspension level, still only an estimate |
| caution | 0.03% to below 0.08% | license suspension level, do not drive |
| danger | 0.08% or more | license revocation level, do not drive |

## Notes

- Drinks not in the catalog count as zero alcohol and are listed under
  `unresolved_drinks`. Tell the user when this happens.
- `hours_until_safe` is the wait until BAC falls to 0.03%.
  `hours_until_sober` is the wait until it reaches 0.
- For caution and danger, always suggest a designated driver or a taxi.
- Use `classify_bac` when the user already knows a BAC value.
"#;

/// Service status
#[derive(Debug, Serialize)]
pub struct BacStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks service start time for status reports
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> BacStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        BacStatus {
            name: build_info.name,
            version: build_info.version,
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_own_process() {
        let status = StatusTracker::new().get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.name, "bacguard");
    }

    #[test]
    fn test_instructions_cover_every_tool() {
        for tool in ["list_drinks", "estimate_bac", "classify_bac"] {
            assert!(BAC_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
