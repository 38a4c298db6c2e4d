use serde::Serialize;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
    pub host_name: Option<String>,
    pub arch: &'static str,
    pub family: &'static str,
    pub cpu_count: usize,
    pub total_memory_mb: u64,
}

impl SystemInfo {
    /// Reads the host once; values do not update afterwards.
    pub fn collect() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_memory(MemoryRefreshKind::everything())
                .with_cpu(CpuRefreshKind::nothing()),
        );

        let info = Self {
            os_name: System::name(),
            os_version: System::os_version(),
            kernel_version: System::kernel_version(),
            host_name: System::host_name(),
            arch: std::env::consts::ARCH,
            family: std::env::consts::FAMILY,
            cpu_count: system.cpus().len(),
            total_memory_mb: system.total_memory() / 1024 / 1024,
        };
        tracing::debug!("collected system info: {:?}", info);
        info
    }
}

pub fn line_separator() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}

pub fn path_separator() -> char {
    std::path::MAIN_SEPARATOR
}

pub fn env_var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn is_windows() -> bool {
    cfg!(windows)
}

pub fn is_unix() -> bool {
    cfg!(unix)
}

pub fn is_macos() -> bool {
    cfg!(target_os = "macos")
}
