mod sys;

use crate::utils::timefmt;
use std::fs;

/// Host facts shown under the image. Every field has its own fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub kernel: String,
    pub uptime: String,
    pub shell: String,
    pub terminal: String,
    pub cpu: String,
    pub memory: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKey {
    Hostname,
    Os,
    Kernel,
    Uptime,
    Shell,
    Terminal,
    Cpu,
    Memory,
}

impl InfoKey {
    /// Config name of a field; `None` for anything this host record lacks.
    pub fn from_name(s: &str) -> Option<Self> {
        let key = match s.to_lowercase().as_str() {
            "hostname" => Self::Hostname,
            "os" => Self::Os,
            "kernel" => Self::Kernel,
            "uptime" => Self::Uptime,
            "shell" => Self::Shell,
            "terminal" => Self::Terminal,
            "cpu" => Self::Cpu,
            "memory" => Self::Memory,
            _ => return None,
        };
        Some(key)
    }
}

impl SystemInfo {
    pub fn gather() -> Self {
        let uts = sys::uname();
        let stats = sys::memory_and_uptime();

        let os = fs::read_to_string("/etc/os-release")
            .ok()
            .and_then(|raw| parse_pretty_name(&raw))
            .or_else(|| uts.as_ref().map(|u| u.sysname.clone()))
            .unwrap_or_else(|| "Unknown".to_string());

        let cpu = fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|raw| parse_cpu_model(&raw))
            .unwrap_or_else(|| "Unknown CPU".to_string());

        Self {
            hostname: sys::hostname().unwrap_or_else(|| "unknown".to_string()),
            os,
            kernel: uts
                .map(|u| u.release)
                .unwrap_or_else(|| "Unknown".to_string()),
            uptime: stats
                .map(|s| timefmt::format_uptime(s.uptime_secs))
                .unwrap_or_else(|| "Unknown".to_string()),
            shell: std::env::var("SHELL")
                .ok()
                .map(|s| shell_name(&s).to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            terminal: std::env::var("TERM").unwrap_or_else(|_| "unknown".to_string()),
            cpu,
            memory: stats
                .map(|s| format_memory(s.total_bytes, s.free_bytes))
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }

    pub fn get(&self, key: InfoKey) -> &str {
        match key {
            InfoKey::Hostname => &self.hostname,
            InfoKey::Os => &self.os,
            InfoKey::Kernel => &self.kernel,
            InfoKey::Uptime => &self.uptime,
            InfoKey::Shell => &self.shell,
            InfoKey::Terminal => &self.terminal,
            InfoKey::Cpu => &self.cpu,
            InfoKey::Memory => &self.memory,
        }
    }
}

/// `PRETTY_NAME="..."` from os-release; unquoted values are ignored.
pub fn parse_pretty_name(os_release: &str) -> Option<String> {
    os_release
        .lines()
        .filter_map(|line| line.strip_prefix("PRETTY_NAME="))
        .find_map(|value| {
            let (_, rest) = value.split_once('"')?;
            let (name, _) = rest.split_once('"')?;
            Some(name.to_string())
        })
}

pub fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .filter(|line| line.starts_with("model name"))
        .find_map(|line| line.split_once(':'))
        .map(|(_, model)| model.trim().to_string())
}

pub fn shell_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn format_memory(total_bytes: u64, free_bytes: u64) -> String {
    let total_mb = total_bytes / 1024 / 1024;
    let used_mb = total_bytes.saturating_sub(free_bytes) / 1024 / 1024;

    if total_mb / 1024 > 0 {
        format!(
            "{:.1}GB / {:.1}GB",
            used_mb as f64 / 1024.0,
            total_mb as f64 / 1024.0
        )
    } else {
        format!("{used_mb}MB / {total_mb}MB")
    }
}
