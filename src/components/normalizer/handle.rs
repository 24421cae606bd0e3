use super::actor::{NormalizerActor, NormalizerActorHandle};
use super::source::{FileWorkbook, WorkbookSource};
use super::state::{NormalizedData, NormalizerState};
use crate::components::appointments::Appointment;
use crate::components::payroll::Employee;
use crate::config::Config;
use crate::error::NormalizerResult;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

/// Handle for interacting with the normalizer actor
#[derive(Clone)]
pub struct NormalizerHandle {
    actor_handle: NormalizerActorHandle,
    state_rx: watch::Receiver<NormalizerState>,
    _actor_task: Arc<JoinHandle<()>>,
}

impl NormalizerHandle {
    /// Create a new NormalizerHandle and spawn the actor
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        let (mut actor, handle, state_rx) = NormalizerActor::new(config);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            state_rx,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Fetch both workbooks from the configured URLs and commit the result
    pub async fn load_remote(&self) -> NormalizerResult<NormalizedData> {
        self.actor_handle.load_remote().await
    }

    /// Load caller-supplied workbooks.
    ///
    /// With `commit` unset the published collections are left alone and the
    /// result only goes back to the caller.
    pub async fn load_files(
        &self,
        payroll: impl WorkbookSource + 'static,
        appointments: impl WorkbookSource + 'static,
        commit: bool,
    ) -> NormalizerResult<NormalizedData> {
        self.actor_handle
            .load_files(Box::new(payroll), Box::new(appointments), commit)
            .await
    }

    /// Load workbooks from local paths
    pub async fn load_file_paths(
        &self,
        payroll: impl Into<PathBuf>,
        appointments: impl Into<PathBuf>,
        commit: bool,
    ) -> NormalizerResult<NormalizedData> {
        self.load_files(
            FileWorkbook::new(payroll),
            FileWorkbook::new(appointments),
            commit,
        )
        .await
    }

    /// Current published state
    pub fn snapshot(&self) -> NormalizerState {
        self.state_rx.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<NormalizerState> {
        self.state_rx.clone()
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.state_rx.borrow().employees.clone()
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.state_rx.borrow().appointments.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state_rx.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state_rx.borrow().error.clone()
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> NormalizerResult<()> {
        self.actor_handle.shutdown().await
    }
}
