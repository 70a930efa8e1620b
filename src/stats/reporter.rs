// src/stats/reporter.rs
use crossbeam_channel::{Receiver, Sender, select};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use sysinfo::{Components, System};

/// Statistics related to mining performance
#[derive(Debug, Clone, Default)]
pub struct MiningStats {
    /// Total number of hashes computed
    pub hashes_total: u64,
    /// Seconds since the reporter was created
    pub elapsed_secs: f64,
    /// Average hashrate since start (hashes per second)
    pub avg_hashrate: f64,
}

/// Statistics related to hardware performance
#[derive(Debug, Clone)]
pub struct HardwareStats {
    /// Current CPU usage percentage (0-100)
    pub cpu_usage: f32,
    /// Memory currently in use (in bytes)
    pub memory_used: u64,
    /// Current CPU temperature in Celsius
    pub temperature: f32,
}

/// Collects and reports mining and hardware statistics
///
/// Workers report hash counts through channels obtained from
/// [`StatsReporter::hash_sender`]. None of this feeds back into mining.
pub struct StatsReporter {
    /// Atomic counters for mining statistics
    stats: Arc<MiningStatsAtomic>,
    /// System information collector
    system: System,
    /// Hardware component information collector
    components: Components,
    /// Interval at which stats are reported
    report_interval: Duration,
    /// Dropping this wakes the periodic reporting thread and ends it
    shutdown: Option<Sender<()>>,
    /// Periodic reporting thread
    reporting: Option<JoinHandle<()>>,
    /// Hash count listener threads
    listeners: Vec<JoinHandle<()>>,
}

/// Atomic version of MiningStats for thread-safe operations
struct MiningStatsAtomic {
    hashes: AtomicU64,
    start_time: Instant,
}

impl MiningStatsAtomic {
    fn snapshot(&self) -> MiningStats {
        let elapsed_secs = self.start_time.elapsed().as_secs_f64();
        let hashes = self.hashes.load(Ordering::Relaxed);

        MiningStats {
            hashes_total: hashes,
            elapsed_secs,
            avg_hashrate: if elapsed_secs > 0.0 {
                hashes as f64 / elapsed_secs
            } else {
                0.0
            },
        }
    }
}

impl StatsReporter {
    /// Creates a new StatsReporter with the specified reporting interval
    ///
    /// # Arguments
    /// * `report_interval` - How often to log statistics; zero disables
    ///   periodic reporting
    pub fn new(report_interval: Duration) -> Self {
        StatsReporter {
            stats: Arc::new(MiningStatsAtomic {
                hashes: AtomicU64::new(0),
                start_time: Instant::now(),
            }),
            system: System::new_all(),
            components: Components::new_with_refreshed_list(),
            report_interval,
            shutdown: None,
            reporting: None,
            listeners: Vec::new(),
        }
    }

    /// Creates and returns a channel sender for hash counts
    ///
    /// The reporter listens on a background thread until every clone of the
    /// returned sender has been dropped.
    pub fn hash_sender(&mut self) -> Sender<u64> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.listeners.push(self.start_hashrate_listener(rx));
        tx
    }

    /// Gets the current mining statistics
    pub fn get_stats(&self) -> MiningStats {
        self.stats.snapshot()
    }

    /// Gets the current hardware statistics
    ///
    /// This refreshes system information before returning the stats.
    pub fn get_hardware_stats(&mut self) -> HardwareStats {
        self.system.refresh_cpu_all();
        self.system.refresh_memory();
        self.components.refresh(true);

        let cpus = self.system.cpus();
        let cpu_usage = if cpus.is_empty() {
            0.0
        } else {
            cpus.iter().map(|c| c.cpu_usage()).sum::<f32>() / cpus.len() as f32
        };

        let temperature = self
            .components
            .iter()
            .find(|c| c.label().contains("CPU"))
            .and_then(|c| c.temperature())
            .unwrap_or(0.0);

        HardwareStats {
            cpu_usage,
            memory_used: self.system.used_memory(),
            temperature,
        }
    }

    /// Starts the periodic reporting of statistics
    ///
    /// This spawns a background thread that logs stats at the configured
    /// interval until [`StatsReporter::stop`] is called. Calling it again
    /// while a reporting thread is running does nothing.
    pub fn start_reporting(&mut self) {
        if self.report_interval.is_zero() || self.reporting.is_some() {
            return;
        }

        let stats = self.stats.clone();
        let interval = self.report_interval;
        let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded::<()>(0);
        self.shutdown = Some(shutdown_tx);

        self.reporting = Some(std::thread::spawn(move || {
            let mut system = System::new_all();

            loop {
                select! {
                    recv(shutdown_rx) -> _ => break,
                    recv(crossbeam_channel::after(interval)) -> _ => {}
                }

                system.refresh_cpu_all();
                system.refresh_memory();
                let mining_stats = stats.snapshot();
                let cpus = system.cpus();
                let cpu_usage = cpus.iter().map(|c| c.cpu_usage()).sum::<f32>()
                    / cpus.len().max(1) as f32;

                log::info!(
                    "Hashrate: {:.2} H/s | Hashes: {} | CPU: {:.1}% | Memory: {} MiB",
                    mining_stats.avg_hashrate,
                    mining_stats.hashes_total,
                    cpu_usage,
                    system.used_memory() / (1024 * 1024)
                );
            }
        }));
    }

    /// Stops periodic reporting and waits for the reporting thread to exit
    pub fn stop(&mut self) {
        self.shutdown.take();
        if let Some(handle) = self.reporting.take() {
            if handle.join().is_err() {
                log::error!("Stats reporting thread panicked");
            }
        }
    }

    /// Stops reporting and returns the final statistics
    ///
    /// Waits for the hash listeners to drain, so every sender handed out by
    /// [`StatsReporter::hash_sender`] must have been dropped first.
    pub fn finish(mut self) -> MiningStats {
        self.stop();
        for listener in self.listeners.drain(..) {
            if listener.join().is_err() {
                log::error!("Hash listener thread panicked");
            }
        }
        self.get_stats()
    }

    /// Starts a listener for hash counts on a background thread
    fn start_hashrate_listener(&self, receiver: Receiver<u64>) -> JoinHandle<()> {
        let stats = self.stats.clone();

        std::thread::spawn(move || {
            for count in receiver {
                stats.hashes.fetch_add(count, Ordering::Relaxed);
            }
        })
    }
}
