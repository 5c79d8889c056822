// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Anas2 Lab sandbox
// Runs the performance monitor against the native host for a short session.

mod experiments;
mod theme;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anas2_core::config::{MonitorConfig, CONFIG_STORAGE_KEY};
use anas2_core::host::{Clock, HostCapabilities};
use anas2_infra::{
    DisplayBoard, FixedEnvironment, FixedRateFrameScheduler, JsonFileStore, NavigationPhase,
    ProcessHeapProbe, RecordedNavigation, SystemClock,
};
use anas2_telemetry::display::{FPS_SURFACE, LOAD_TIME_SURFACE, MEMORY_SURFACE};
use anas2_telemetry::{load_from_storage, save_to_storage, PerformanceMonitor};
use anyhow::{bail, Context, Result};

const STORE_FILE: &str = "anas2-lab.json";
const SESSION: Duration = Duration::from_secs(6);

#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    toggle_theme: bool,
    experiment: Option<String>,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self> {
        let mut options = Self::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--toggle-theme" => options.toggle_theme = true,
                "--experiment" => match args.next() {
                    Some(id) => options.experiment = Some(id.clone()),
                    None => bail!("--experiment needs an experiment id"),
                },
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                path => options.config_path = Some(PathBuf::from(path)),
            }
        }
        Ok(options)
    }
}

fn load_config(options: &Options, store: &JsonFileStore) -> Result<MonitorConfig> {
    match &options.config_path {
        Some(path) => MonitorConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_from_storage(store, CONFIG_STORAGE_KEY, MonitorConfig::default())),
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args: Vec<String> = env::args().skip(1).collect();
    let options = Options::parse(&args)?;
    log::info!("Loading Anas2 Lab...");

    let clock = Arc::new(SystemClock::new());
    let navigation = Arc::new(RecordedNavigation::new(clock.clone()));

    navigation.mark(NavigationPhase::DomainLookupStart);
    let store_path = env::temp_dir().join(STORE_FILE);
    let store = JsonFileStore::open(&store_path)
        .with_context(|| format!("Failed to open store at {}", store_path.display()))?;
    navigation.mark(NavigationPhase::DomainLookupEnd);

    navigation.mark(NavigationPhase::ConnectStart);
    let config = load_config(&options, &store)?;
    navigation.mark(NavigationPhase::ConnectEnd);

    navigation.mark(NavigationPhase::RequestStart);
    let theme = if options.toggle_theme {
        theme::toggle_theme(&store)
    } else {
        theme::Theme::load(&store)
    };
    log::info!("Applied theme: {} (toggle icon {})", theme, theme.toggle_icon());
    for experiment in experiments::load_experiments() {
        log::debug!(" -> {} ({}): {}", experiment.name, experiment.id, experiment.description);
    }
    if let Some(id) = &options.experiment {
        match experiments::find(id) {
            Some(experiment) => log::info!("Opening experiment {} [{}]", experiment.name, experiment.icon),
            None => log::warn!("No experiment named '{}'", id),
        }
    }
    navigation.mark(NavigationPhase::ResponseEnd);

    let board = Arc::new(DisplayBoard::with_surfaces([
        FPS_SURFACE,
        MEMORY_SURFACE,
        LOAD_TIME_SURFACE,
    ]));
    let mut host = HostCapabilities::new(
        clock.clone(),
        Arc::new(FixedRateFrameScheduler::default()),
        Arc::new(FixedEnvironment::default()),
    )
    .with_navigation(navigation)
    .with_displays(board.clone());
    match ProcessHeapProbe::detect() {
        Some(probe) => host = host.with_heap_probe(Arc::new(probe)),
        None => log::warn!("Process memory is not observable on this platform"),
    }

    let mut monitor = PerformanceMonitor::initialize(config.clone(), host)?;
    let warnings = monitor.warnings();

    if monitor.capture_load_timings().is_none() {
        log::info!("Load finished at {:.1}ms without phase timings", clock.now_ms());
    }

    thread::sleep(SESSION);
    monitor.stop();

    let raised = warnings.try_iter().count();
    if raised > 0 {
        log::warn!("{} performance warnings raised during the session", raised);
    }

    println!("{}", monitor.report().to_json_pretty()?);
    for line in board.render_lines() {
        println!("{line}");
    }

    save_to_storage(&store, CONFIG_STORAGE_KEY, &config);
    log::info!("Session finished, state saved to {}", store.path().display());
    Ok(())
}
