// Host environment introspection.
use std::sync::OnceLock;

static CPU_COUNT: OnceLock<u32> = OnceLock::new();

/// Number of CPUs available to this process, at least 1.
///
/// The host is queried once; later calls return the cached value so the count
/// stays stable for the lifetime of the process even if affinity or cgroup
/// limits change underneath it.
pub fn cpu_count() -> u32 {
    *CPU_COUNT.get_or_init(|| match std::thread::available_parallelism() {
        Ok(count) => u32::try_from(count.get()).unwrap_or(u32::MAX),
        Err(err) => {
            tracing::debug!(error = %err, "available_parallelism failed; assuming 1 cpu");
            1
        }
    })
}
