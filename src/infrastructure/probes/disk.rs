use std::sync::Mutex;

use async_trait::async_trait;
use sysinfo::Disks;

use crate::domain::entities::check::HealthCheck;
use crate::domain::ports::probe::Probe;
use crate::domain::value_objects::status::Status;

/// Filesystem types to exclude from the free-space check.
const PSEUDO_FILESYSTEMS: &[&str] = &[
    "tmpfs",
    "devtmpfs",
    "sysfs",
    "proc",
    "cgroup2",
    "overlay",
    "squashfs",
    "efivarfs",
    "bpf",
    "hugetlbfs",
    "mqueue",
    "pstore",
    "securityfs",
    "debugfs",
    "tracefs",
    "fusectl",
    "rpc_pipefs",
];

/// Checks that every real mounted filesystem keeps a minimum of free space.
///
/// Pseudo-filesystems and zero-size disks are ignored. The check reports the
/// fullest real filesystem: FAIL when its free space is below the threshold,
/// PASS otherwise, and SKIP when no real filesystem is visible at all (some
/// containers), so the run's accounting stays intact.
pub struct DiskSpaceProbe {
    name: String,
    min_free_percent: f64,
    disks: Mutex<Disks>,
}

impl DiskSpaceProbe {
    #[must_use]
    pub fn new(name: impl Into<String>, min_free_percent: f64) -> Self {
        Self {
            name: name.into(),
            min_free_percent: min_free_percent.clamp(0.1, 100.0),
            disks: Mutex::new(Disks::new_with_refreshed_list()),
        }
    }
}

#[async_trait]
impl Probe for DiskSpaceProbe {
    fn name(&self) -> &str {
        &self.name
    }

    #[allow(clippy::cast_precision_loss)]
    async fn run(&self) -> HealthCheck {
        let Ok(mut disks) = self.disks.lock() else {
            return HealthCheck::new(&self.name, Status::Fail, "disk list lock poisoned");
        };
        disks.refresh();

        // Track the fullest real filesystem seen.
        let mut worst: Option<(String, f64)> = None;
        let mut scanned = 0_usize;
        for disk in disks.iter() {
            let fs = disk.file_system().to_string_lossy();
            if PSEUDO_FILESYSTEMS.iter().any(|&pseudo| fs == pseudo) || disk.total_space() == 0 {
                continue;
            }
            scanned += 1;
            let free_percent = disk.available_space() as f64 / disk.total_space() as f64 * 100.0;
            let mount = disk.mount_point().display().to_string();
            if worst.as_ref().map_or(true, |(_, f)| free_percent < *f) {
                worst = Some((mount, free_percent));
            }
        }

        match worst {
            None => HealthCheck::new(
                &self.name,
                Status::Skip,
                "no real filesystem visible in this environment",
            ),
            Some((mount, free)) if free < self.min_free_percent => HealthCheck::new(
                &self.name,
                Status::Fail,
                format!(
                    "{mount} has {free:.1}% free (minimum {:.1}%)",
                    self.min_free_percent
                ),
            )
            .with_evidence(format!("{scanned} filesystem(s) scanned")),
            Some((mount, free)) => HealthCheck::new(
                &self.name,
                Status::Pass,
                format!("lowest free space {free:.1}% on {mount}"),
            )
            .with_evidence(format!("{scanned} filesystem(s) scanned")),
        }
    }
}
