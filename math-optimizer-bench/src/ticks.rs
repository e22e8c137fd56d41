//! CPU cost counter used to time optimizer steps.

/// Current value of the CPU cycle counter.
///
/// On x86_64 this is the raw time-stamp counter. Elsewhere it falls back to
/// nanoseconds elapsed since the first call, which is monotonic but not a
/// cycle count. Only differences between two readings are meaningful.
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn cpu_ticks() -> u64 {
    // SAFETY: rdtsc has no preconditions and is available on every x86_64 CPU.
    unsafe { core::arch::x86_64::_rdtsc() }
}

/// Current value of the CPU cycle counter.
///
/// On x86_64 this is the raw time-stamp counter. Elsewhere it falls back to
/// nanoseconds elapsed since the first call, which is monotonic but not a
/// cycle count. Only differences between two readings are meaningful.
#[cfg(not(target_arch = "x86_64"))]
pub fn cpu_ticks() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    let start = START.get_or_init(Instant::now);
    start.elapsed().as_nanos() as u64
}

/// Ticks elapsed since `start`, tolerant of a counter that steps backwards
/// across cores.
#[inline]
pub fn ticks_since(start: u64) -> u64 {
    cpu_ticks().saturating_sub(start)
}
