use uuid::Uuid;
use std::sync::Arc;
use tokio::time::sleep;
use std::time::Duration;
use lazy_static::lazy_static;
use tokio::task::spawn_blocking;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::management::capture::CaptureLoop;
use crate::management::utils::run_guard::RunGuard;
use crate::management::utils::run_parameters::RunParameters;
use crate::management::utils::run_state::{RunState, RunStatus};

lazy_static! {
    static ref RUN_MANAGER: RwLock<RunManager> = RwLock::new(RunManager::new());
}

struct ActiveRun {
    uuid: Uuid,
    parameters: RunParameters,
    cancel: Arc<AtomicBool>,
    state: Arc<RunState>,
}

pub struct RunManager {
    current_run: Option<ActiveRun>,
}

impl RunManager {
    fn new() -> Self {
        Self {
            current_run: None,
        }
    }

    pub async fn instance() -> RwLockReadGuard<'static, Self> {
        RUN_MANAGER.read().await
    }

    pub async fn instance_mut() -> RwLockWriteGuard<'static, Self> {
        RUN_MANAGER.write().await
    }

    pub async fn run() {
        logging_information!("Run Manager", "Online.");
    }

    pub async fn terminate() {
        logging_information!("Run Manager", "Terminating.");
        if Self::stop().await {
            Self::wait_for_idle(Duration::from_secs(5)).await;
        }
        logging_information!("Run Manager", "Termination complete.");
    }

    pub async fn start(parameters: RunParameters) -> Result<Uuid, String> {
        let guard = match RunGuard::acquire() {
            Some(guard) => guard,
            None => return Err("A run is already active.".to_string()),
        };
        let config = Config::now().await;
        let uuid = Uuid::new_v4();
        let cancel = Arc::new(AtomicBool::new(false));
        let state = Arc::new(RunState::new(config.initial_angle as i32));
        {
            let mut run_manager = Self::instance_mut().await;
            run_manager.current_run = Some(ActiveRun {
                uuid,
                parameters,
                cancel: cancel.clone(),
                state: state.clone(),
            });
        }
        spawn_blocking(move || {
            CaptureLoop::run(uuid, parameters, config, cancel, state, guard);
        });
        logging_information!("Run Manager", format!("Run {uuid} started."));
        Ok(uuid)
    }

    pub async fn stop() -> bool {
        let run_manager = Self::instance().await;
        match &run_manager.current_run {
            Some(run) if run.state.is_running() => {
                run.cancel.store(true, Ordering::Relaxed);
                logging_information!("Run Manager", format!("Run {uuid}: stop requested.", uuid = run.uuid));
                true
            },
            _ => false,
        }
    }

    pub async fn status() -> RunStatus {
        let run_manager = Self::instance().await;
        match &run_manager.current_run {
            Some(run) if run.state.is_running() => RunStatus::active(run.uuid, run.parameters, &run.state),
            _ => RunStatus::idle(),
        }
    }

    async fn wait_for_idle(timeout: Duration) {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let idle = {
                let run_manager = Self::instance().await;
                match &run_manager.current_run {
                    Some(run) => !run.state.is_running(),
                    None => true,
                }
            };
            if idle || tokio::time::Instant::now() >= deadline {
                break;
            }
            sleep(Duration::from_millis(100)).await;
        }
    }
}
