use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::error::SampleError;

use super::metrics::{HostIdentity, MetricSample, Section};

type SampleResult<T> = std::result::Result<T, SampleError>;

/// Source of OS metric samples.
///
/// Each call is a blocking, read-only query with no retries. A failure only
/// affects the section it belongs to.
pub trait MetricSource {
    fn host_identity(&mut self) -> SampleResult<MetricSample>;

    fn uptime(&mut self) -> SampleResult<MetricSample>;

    fn memory(&mut self) -> SampleResult<MetricSample>;

    fn cpu(&mut self) -> SampleResult<MetricSample>;

    /// One entry per discovered partition. The outer error means the
    /// partitions could not be enumerated at all.
    fn disks(&mut self) -> SampleResult<Vec<SampleResult<MetricSample>>>;

    fn network(&mut self) -> SampleResult<MetricSample>;

    /// Sample everything printed under `section`.
    ///
    /// Partitions whose usage query failed are dropped here and never reported.
    fn sample(&mut self, section: Section) -> SampleResult<Vec<MetricSample>> {
        log::debug!("Sampling {}", section);

        match section {
            Section::SystemInfo => self.host_identity().map(|s| vec![s]),
            Section::Uptime => self.uptime().map(|s| vec![s]),
            Section::Memory => self.memory().map(|s| vec![s]),
            Section::Cpu => self.cpu().map(|s| vec![s]),
            Section::Network => self.network().map(|s| vec![s]),
            Section::Disk => {
                let partitions = self.disks()?;
                Ok(partitions
                    .into_iter()
                    .filter_map(|partition| match partition {
                        Ok(sample) => Some(sample),
                        Err(e) => {
                            log::debug!("Skipping unusable partition: {}", e);
                            None
                        }
                    })
                    .collect())
            }
        }
    }
}

/// Metric source backed by the local host through `sysinfo`
pub struct SysinfoSource {
    system: System,
    disks: Disks,
    networks: Networks,
}

impl SysinfoSource {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Self {
            system: System::new_with_specifics(refresh_kind),
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| "Unknown".to_string())
}

fn usage_percent(used: u64, total: u64) -> f64 {
    (used as f64 / total as f64) * 100.0
}

impl MetricSource for SysinfoSource {
    fn host_identity(&mut self) -> SampleResult<MetricSample> {
        Ok(MetricSample::HostIdentity(HostIdentity {
            hostname: or_unknown(System::host_name()),
            platform: or_unknown(System::name()),
            platform_version: or_unknown(System::os_version()),
            kernel_arch: System::cpu_arch(),
            kernel_version: or_unknown(System::kernel_version()),
        }))
    }

    fn uptime(&mut self) -> SampleResult<MetricSample> {
        Ok(MetricSample::Uptime {
            seconds: System::uptime(),
        })
    }

    fn memory(&mut self) -> SampleResult<MetricSample> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Err(SampleError::new(
                Section::Memory,
                "total memory reported as zero",
            ));
        }

        Ok(MetricSample::MemoryUsage {
            used_percent: usage_percent(self.system.used_memory(), total),
            total_bytes: total,
        })
    }

    fn cpu(&mut self) -> SampleResult<MetricSample> {
        // Usage is a delta between two refreshes
        self.system.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu_usage();

        if self.system.cpus().is_empty() {
            return Err(SampleError::new(Section::Cpu, "no CPU data available"));
        }

        Ok(MetricSample::CpuUsage {
            percent: f64::from(self.system.global_cpu_usage()),
        })
    }

    fn disks(&mut self) -> SampleResult<Vec<SampleResult<MetricSample>>> {
        self.disks.refresh(true);

        if self.disks.list().is_empty() {
            return Err(SampleError::new(Section::Disk, "no partitions found"));
        }

        Ok(self
            .disks
            .list()
            .iter()
            .map(|disk| {
                let mount_path = disk.mount_point().to_string_lossy().to_string();
                let total = disk.total_space();
                if total == 0 {
                    return Err(SampleError::new(
                        Section::Disk,
                        format!("{}: no usage information", mount_path),
                    ));
                }

                let used = total.saturating_sub(disk.available_space());
                Ok(MetricSample::DiskUsage {
                    mount_path,
                    used_percent: usage_percent(used, total),
                    total_bytes: total,
                })
            })
            .collect())
    }

    fn network(&mut self) -> SampleResult<MetricSample> {
        self.networks.refresh(true);

        if self.networks.list().is_empty() {
            return Err(SampleError::new(
                Section::Network,
                "no network interfaces found",
            ));
        }

        let (bytes_sent, bytes_received) = self
            .networks
            .list()
            .values()
            .fold((0u64, 0u64), |(tx, rx), data| {
                (
                    tx.saturating_add(data.total_transmitted()),
                    rx.saturating_add(data.total_received()),
                )
            });

        Ok(MetricSample::NetworkCounters {
            bytes_sent,
            bytes_received,
        })
    }
}
