//! Capability gating for the decorative background effect.
//!
//! The page always paints a cheap static backdrop. A heavier animated layer
//! is mounted on top only when the device looks capable of it. The check
//! runs once per mount:
//!
//! 1. [`CapabilitySnapshot::capture`] reads every signal from a
//!    [`CapabilityProbe`], absorbing errors and panics into
//!    [`ProbeFailure`]s
//! 2. [`decide`] turns the snapshot into an [`EffectDecision`] under an
//!    [`EffectPolicy`]
//!
//! `decide` is a pure function, so policies are tested against hand-built
//! snapshots.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Network quality class, as reported by the Network Information API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectiveConnectionType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
}

impl EffectiveConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveConnectionType::Slow2g => "slow-2g",
            EffectiveConnectionType::TwoG => "2g",
            EffectiveConnectionType::ThreeG => "3g",
            EffectiveConnectionType::FourG => "4g",
        }
    }
}

impl FromStr for EffectiveConnectionType {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow-2g" => Ok(EffectiveConnectionType::Slow2g),
            "2g" => Ok(EffectiveConnectionType::TwoG),
            "3g" => Ok(EffectiveConnectionType::ThreeG),
            "4g" => Ok(EffectiveConnectionType::FourG),
            other => Err(PortfolioError::Probe(format!(
                "unknown connection type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for EffectiveConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The individual environment signals a probe can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilitySignal {
    ReducedMotion,
    HardwareConcurrency,
    ViewportWidth,
    UserAgent,
    EffectiveConnection,
    DeviceMemory,
    PageLoad,
}

/// Read-only environment sensors.
///
/// `Ok(None)` means the platform does not expose the signal; it is simply
/// ignored. `Err` means reading it failed, which gates the effect off.
pub trait CapabilityProbe {
    fn reduced_motion(&self) -> PortfolioResult<Option<bool>>;
    fn hardware_concurrency(&self) -> PortfolioResult<Option<usize>>;
    fn viewport_width(&self) -> PortfolioResult<Option<u32>>;
    fn user_agent(&self) -> PortfolioResult<Option<String>>;
    fn effective_connection(&self) -> PortfolioResult<Option<EffectiveConnectionType>>;
    fn device_memory_gb(&self) -> PortfolioResult<Option<f32>>;
    fn page_load_elapsed(&self) -> PortfolioResult<Option<Duration>>;
}

/// A signal that could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeFailure {
    pub signal: CapabilitySignal,
    pub message: String,
}

/// One-time reading of every capability signal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilitySnapshot {
    pub prefers_reduced_motion: Option<bool>,
    pub hardware_concurrency: Option<usize>,
    pub viewport_width: Option<u32>,
    pub user_agent: Option<String>,
    pub effective_connection: Option<EffectiveConnectionType>,
    pub device_memory_gb: Option<f32>,
    pub page_load: Option<Duration>,
    pub failures: Vec<ProbeFailure>,
}

impl CapabilitySnapshot {
    /// Read all signals from `probe`. Never fails and never panics.
    pub fn capture(probe: &dyn CapabilityProbe) -> Self {
        let mut failures = Vec::new();
        let snapshot = Self {
            prefers_reduced_motion: read_signal(
                CapabilitySignal::ReducedMotion,
                &mut failures,
                || probe.reduced_motion(),
            ),
            hardware_concurrency: read_signal(
                CapabilitySignal::HardwareConcurrency,
                &mut failures,
                || probe.hardware_concurrency(),
            ),
            viewport_width: read_signal(CapabilitySignal::ViewportWidth, &mut failures, || {
                probe.viewport_width()
            }),
            user_agent: read_signal(CapabilitySignal::UserAgent, &mut failures, || {
                probe.user_agent()
            }),
            effective_connection: read_signal(
                CapabilitySignal::EffectiveConnection,
                &mut failures,
                || probe.effective_connection(),
            ),
            device_memory_gb: read_signal(CapabilitySignal::DeviceMemory, &mut failures, || {
                probe.device_memory_gb()
            }),
            page_load: read_signal(CapabilitySignal::PageLoad, &mut failures, || {
                probe.page_load_elapsed()
            }),
            failures: Vec::new(),
        };
        Self { failures, ..snapshot }
    }
}

fn read_signal<T>(
    signal: CapabilitySignal,
    failures: &mut Vec<ProbeFailure>,
    read: impl FnOnce() -> PortfolioResult<Option<T>>,
) -> Option<T> {
    let message = match catch_unwind(AssertUnwindSafe(read)) {
        Ok(Ok(value)) => return value,
        Ok(Err(e)) => e.to_string(),
        Err(_) => "probe panicked".to_string(),
    };
    tracing::warn!(?signal, %message, "Capability probe failed");
    failures.push(ProbeFailure { signal, message });
    None
}

/// Thresholds that classify a device as low capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectPolicy {
    /// Fewer logical cores than this disables the effect
    pub min_cores: usize,
    /// Viewports at or below this width count as mobile
    pub mobile_max_width: u32,
    /// User-agent fragments that mark a mobile device
    pub mobile_user_agents: Vec<String>,
    /// Less reported device memory than this (GB) disables the effect
    pub min_device_memory_gb: f32,
    /// Connection classes considered too slow
    pub slow_connections: Vec<EffectiveConnectionType>,
    /// Page loads slower than this (ms) disable the effect
    pub max_page_load_ms: u64,
    /// Delay before mounting the effect once enabled (ms)
    pub defer_ms: u64,
}

impl Default for EffectPolicy {
    fn default() -> Self {
        Self {
            min_cores: 2,
            mobile_max_width: 768,
            mobile_user_agents: ["Android", "iPhone", "iPad", "iPod", "Mobile"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_device_memory_gb: 2.0,
            slow_connections: vec![EffectiveConnectionType::Slow2g, EffectiveConnectionType::TwoG],
            max_page_load_ms: 4000,
            defer_ms: 200,
        }
    }
}

/// Why the effect stays off.
#[derive(Debug, Clone, PartialEq)]
pub enum LowCapability {
    ReducedMotion,
    FewCores(usize),
    NarrowViewport(u32),
    MobileUserAgent,
    SlowNetwork(EffectiveConnectionType),
    LowMemory(f32),
    SlowPageLoad(Duration),
    ProbeFailed(CapabilitySignal),
}

impl fmt::Display for LowCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowCapability::ReducedMotion => write!(f, "reduced motion requested"),
            LowCapability::FewCores(n) => write!(f, "only {} logical cores", n),
            LowCapability::NarrowViewport(w) => write!(f, "narrow viewport ({}px)", w),
            LowCapability::MobileUserAgent => write!(f, "mobile user agent"),
            LowCapability::SlowNetwork(t) => write!(f, "slow network ({})", t),
            LowCapability::LowMemory(gb) => write!(f, "low device memory ({}GB)", gb),
            LowCapability::SlowPageLoad(d) => write!(f, "slow page load ({}ms)", d.as_millis()),
            LowCapability::ProbeFailed(signal) => write!(f, "probe failed: {:?}", signal),
        }
    }
}

/// Outcome of the capability check.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectDecision {
    /// Mount the effect after `defer`
    Enabled { defer: Duration },
    /// Keep only the static fallback for this session
    Disabled { reason: LowCapability },
}

impl EffectDecision {
    pub fn is_enabled(&self) -> bool {
        matches!(self, EffectDecision::Enabled { .. })
    }
}

/// Decide whether to mount the decorative effect.
pub fn decide(snapshot: &CapabilitySnapshot, policy: &EffectPolicy) -> EffectDecision {
    match first_low_signal(snapshot, policy) {
        Some(reason) => EffectDecision::Disabled { reason },
        None => EffectDecision::Enabled {
            defer: Duration::from_millis(policy.defer_ms),
        },
    }
}

fn first_low_signal(snapshot: &CapabilitySnapshot, policy: &EffectPolicy) -> Option<LowCapability> {
    if let Some(failure) = snapshot.failures.first() {
        return Some(LowCapability::ProbeFailed(failure.signal));
    }
    if snapshot.prefers_reduced_motion == Some(true) {
        return Some(LowCapability::ReducedMotion);
    }
    if let Some(cores) = snapshot.hardware_concurrency {
        if cores < policy.min_cores {
            return Some(LowCapability::FewCores(cores));
        }
    }
    if let Some(width) = snapshot.viewport_width {
        if width <= policy.mobile_max_width {
            return Some(LowCapability::NarrowViewport(width));
        }
    }
    if let Some(ua) = &snapshot.user_agent {
        if policy.mobile_user_agents.iter().any(|m| ua.contains(m.as_str())) {
            return Some(LowCapability::MobileUserAgent);
        }
    }
    if let Some(connection) = snapshot.effective_connection {
        if policy.slow_connections.contains(&connection) {
            return Some(LowCapability::SlowNetwork(connection));
        }
    }
    if let Some(memory) = snapshot.device_memory_gb {
        if memory < policy.min_device_memory_gb {
            return Some(LowCapability::LowMemory(memory));
        }
    }
    if let Some(elapsed) = snapshot.page_load {
        if elapsed > Duration::from_millis(policy.max_page_load_ms) {
            return Some(LowCapability::SlowPageLoad(elapsed));
        }
    }
    None
}

/// Fixed values for signals the desktop shell cannot observe itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityOverrides {
    pub reduced_motion: Option<bool>,
    pub hardware_concurrency: Option<usize>,
    pub user_agent: Option<String>,
    pub effective_connection: Option<EffectiveConnectionType>,
    pub device_memory_gb: Option<f32>,
}

/// Probe backed by the host process.
///
/// Core count comes from the OS, the viewport from the window the shell
/// opened, and page-load time from when the shell started. Everything else
/// is taken from [`CapabilityOverrides`].
#[derive(Debug, Clone)]
pub struct SystemProbe {
    overrides: CapabilityOverrides,
    viewport_width: Option<u32>,
    started: Instant,
}

impl SystemProbe {
    pub fn new(overrides: CapabilityOverrides, started: Instant) -> Self {
        Self {
            overrides,
            viewport_width: None,
            started,
        }
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = Some(width);
        self
    }
}

impl CapabilityProbe for SystemProbe {
    fn reduced_motion(&self) -> PortfolioResult<Option<bool>> {
        Ok(self.overrides.reduced_motion)
    }

    fn hardware_concurrency(&self) -> PortfolioResult<Option<usize>> {
        if let Some(cores) = self.overrides.hardware_concurrency {
            return Ok(Some(cores));
        }
        std::thread::available_parallelism()
            .map(|n| Some(n.get()))
            .map_err(|e| PortfolioError::Probe(format!("available_parallelism: {}", e)))
    }

    fn viewport_width(&self) -> PortfolioResult<Option<u32>> {
        Ok(self.viewport_width)
    }

    fn user_agent(&self) -> PortfolioResult<Option<String>> {
        Ok(self.overrides.user_agent.clone())
    }

    fn effective_connection(&self) -> PortfolioResult<Option<EffectiveConnectionType>> {
        Ok(self.overrides.effective_connection)
    }

    fn device_memory_gb(&self) -> PortfolioResult<Option<f32>> {
        Ok(self.overrides.device_memory_gb)
    }

    fn page_load_elapsed(&self) -> PortfolioResult<Option<Duration>> {
        Ok(Some(self.started.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capable() -> CapabilitySnapshot {
        CapabilitySnapshot {
            prefers_reduced_motion: Some(false),
            hardware_concurrency: Some(8),
            viewport_width: Some(1440),
            user_agent: Some("Mozilla/5.0 (X11; Linux x86_64)".to_string()),
            effective_connection: Some(EffectiveConnectionType::FourG),
            device_memory_gb: Some(8.0),
            page_load: Some(Duration::from_millis(900)),
            failures: Vec::new(),
        }
    }

    struct FailingProbe;

    impl CapabilityProbe for FailingProbe {
        fn reduced_motion(&self) -> PortfolioResult<Option<bool>> {
            Ok(Some(false))
        }
        fn hardware_concurrency(&self) -> PortfolioResult<Option<usize>> {
            Err(PortfolioError::Probe("sensor offline".to_string()))
        }
        fn viewport_width(&self) -> PortfolioResult<Option<u32>> {
            Ok(Some(1280))
        }
        fn user_agent(&self) -> PortfolioResult<Option<String>> {
            Ok(None)
        }
        fn effective_connection(&self) -> PortfolioResult<Option<EffectiveConnectionType>> {
            panic!("network information unavailable")
        }
        fn device_memory_gb(&self) -> PortfolioResult<Option<f32>> {
            Ok(None)
        }
        fn page_load_elapsed(&self) -> PortfolioResult<Option<Duration>> {
            Ok(None)
        }
    }

    #[test]
    fn capable_device_enables_after_defer() {
        let policy = EffectPolicy::default();
        assert_eq!(
            decide(&capable(), &policy),
            EffectDecision::Enabled {
                defer: Duration::from_millis(200)
            }
        );
    }

    #[test]
    fn unknown_signals_are_ignored() {
        let decision = decide(&CapabilitySnapshot::default(), &EffectPolicy::default());
        assert!(decision.is_enabled());
    }

    #[test]
    fn each_low_signal_disables() {
        let policy = EffectPolicy::default();
        let cases: Vec<(CapabilitySnapshot, LowCapability)> = vec![
            (
                CapabilitySnapshot {
                    prefers_reduced_motion: Some(true),
                    ..capable()
                },
                LowCapability::ReducedMotion,
            ),
            (
                CapabilitySnapshot {
                    hardware_concurrency: Some(1),
                    ..capable()
                },
                LowCapability::FewCores(1),
            ),
            (
                CapabilitySnapshot {
                    viewport_width: Some(390),
                    ..capable()
                },
                LowCapability::NarrowViewport(390),
            ),
            (
                CapabilitySnapshot {
                    user_agent: Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)".to_string()),
                    ..capable()
                },
                LowCapability::MobileUserAgent,
            ),
            (
                CapabilitySnapshot {
                    effective_connection: Some(EffectiveConnectionType::TwoG),
                    ..capable()
                },
                LowCapability::SlowNetwork(EffectiveConnectionType::TwoG),
            ),
            (
                CapabilitySnapshot {
                    device_memory_gb: Some(1.0),
                    ..capable()
                },
                LowCapability::LowMemory(1.0),
            ),
            (
                CapabilitySnapshot {
                    page_load: Some(Duration::from_secs(9)),
                    ..capable()
                },
                LowCapability::SlowPageLoad(Duration::from_secs(9)),
            ),
        ];

        for (snapshot, reason) in cases {
            assert_eq!(
                decide(&snapshot, &policy),
                EffectDecision::Disabled { reason }
            );
        }
    }

    #[test]
    fn failing_probe_disables_effect() {
        let snapshot = CapabilitySnapshot::capture(&FailingProbe);
        assert_eq!(snapshot.hardware_concurrency, None);
        assert_eq!(snapshot.effective_connection, None);
        assert_eq!(snapshot.failures.len(), 2);

        let decision = decide(&snapshot, &EffectPolicy::default());
        assert_eq!(
            decision,
            EffectDecision::Disabled {
                reason: LowCapability::ProbeFailed(CapabilitySignal::HardwareConcurrency)
            }
        );
    }

    #[test]
    fn system_probe_prefers_overrides() {
        let overrides = CapabilityOverrides {
            hardware_concurrency: Some(1),
            ..Default::default()
        };
        let probe = SystemProbe::new(overrides, Instant::now()).with_viewport_width(1200);
        let snapshot = CapabilitySnapshot::capture(&probe);
        assert_eq!(snapshot.hardware_concurrency, Some(1));
        assert_eq!(snapshot.viewport_width, Some(1200));
        assert!(snapshot.failures.is_empty());
    }

    #[test]
    fn connection_type_parses() {
        assert_eq!(
            "Slow-2G".parse::<EffectiveConnectionType>().unwrap(),
            EffectiveConnectionType::Slow2g
        );
        assert!("5g".parse::<EffectiveConnectionType>().is_err());
    }
}
