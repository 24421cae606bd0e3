use super::source::{load_workbook, RemoteWorkbook, WorkbookSource};
use super::state::{NormalizedData, NormalizerState};
use crate::components::appointments::{extract_appointments, Appointment};
use crate::components::diagnostics::LoadDiagnostics;
use crate::components::payroll::{extract_employees, Employee};
use crate::config::Config;
use crate::error::{component_error, load_error, NormalizerResult};
use crate::schema::{AppointmentColumns, PayrollSchema, SheetSchema};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, watch, RwLock};
use tracing::{error, info};

/// The normalizer actor that owns the published state
pub struct NormalizerActor {
    config: Arc<RwLock<Config>>,
    client: Client,
    state_tx: watch::Sender<NormalizerState>,
    command_rx: mpsc::Receiver<NormalizerCommand>,
}

/// Commands that can be sent to the normalizer actor
pub enum NormalizerCommand {
    LoadRemote(mpsc::Sender<NormalizerResult<NormalizedData>>),
    LoadFiles {
        payroll: Box<dyn WorkbookSource>,
        appointments: Box<dyn WorkbookSource>,
        commit: bool,
        response_tx: mpsc::Sender<NormalizerResult<NormalizedData>>,
    },
    Shutdown,
}

/// Handle for communicating with the normalizer actor
#[derive(Clone)]
pub struct NormalizerActorHandle {
    command_tx: mpsc::Sender<NormalizerCommand>,
}

impl NormalizerActorHandle {
    /// Load both workbooks from the configured URLs and commit the result
    pub async fn load_remote(&self) -> NormalizerResult<NormalizedData> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(NormalizerCommand::LoadRemote(response_tx))
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))?
    }

    /// Load both workbooks from caller-supplied sources
    pub async fn load_files(
        &self,
        payroll: Box<dyn WorkbookSource>,
        appointments: Box<dyn WorkbookSource>,
        commit: bool,
    ) -> NormalizerResult<NormalizedData> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(NormalizerCommand::LoadFiles {
                payroll,
                appointments,
                commit,
                response_tx,
            })
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> NormalizerResult<()> {
        let _ = self.command_tx.send(NormalizerCommand::Shutdown).await;
        Ok(())
    }
}

impl NormalizerActor {
    /// Create a new actor, its handle and a receiver for its state
    pub fn new(
        config: Arc<RwLock<Config>>,
    ) -> (Self, NormalizerActorHandle, watch::Receiver<NormalizerState>) {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (state_tx, state_rx) = watch::channel(NormalizerState::default());

        let actor = Self {
            config,
            client: Client::new(),
            state_tx,
            command_rx,
        };

        let handle = NormalizerActorHandle { command_tx };

        (actor, handle, state_rx)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Normalizer actor started");

        // Loads are processed one at a time, so overlapping triggers queue up
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                NormalizerCommand::LoadRemote(response_tx) => {
                    self.begin_load();
                    let result = self.load_remote().await;
                    self.finish_load(&result, true);
                    let _ = response_tx.send(result).await;
                }
                NormalizerCommand::LoadFiles {
                    payroll,
                    appointments,
                    commit,
                    response_tx,
                } => {
                    self.begin_load();
                    let schema = self.config.read().await.schema.clone();
                    let result = run_load(payroll, appointments, schema).await;
                    self.finish_load(&result, commit);
                    let _ = response_tx.send(result).await;
                }
                NormalizerCommand::Shutdown => {
                    info!("Normalizer actor shutting down");
                    break;
                }
            }
        }

        info!("Normalizer actor shut down");
    }

    fn begin_load(&self) {
        self.state_tx.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    /// Clear the loading flag and publish the outcome in a single update
    fn finish_load(&self, result: &NormalizerResult<NormalizedData>, commit: bool) {
        self.state_tx.send_modify(|state| {
            state.is_loading = false;
            match result {
                Ok(data) => {
                    if commit {
                        state.commit(data);
                    }
                }
                Err(e) => {
                    error!("Load failed: {}", e);
                    state.error = Some(e.to_string());
                }
            }
        });
    }

    async fn load_remote(&self) -> NormalizerResult<NormalizedData> {
        let (payroll, appointments, schema) = {
            let config = self.config.read().await;
            let timeout = config.fetch_timeout();
            let payroll: Box<dyn WorkbookSource> = Box::new(RemoteWorkbook::new(
                self.client.clone(),
                config.payroll_url()?,
                timeout,
            ));
            let appointments: Box<dyn WorkbookSource> = Box::new(RemoteWorkbook::new(
                self.client.clone(),
                config.appointments_url()?,
                timeout,
            ));
            (payroll, appointments, config.schema.clone())
        };

        run_load(payroll, appointments, schema).await
    }
}

/// Run a load on its own task so a panic inside it ends as an error, not a dead actor
async fn run_load(
    payroll: Box<dyn WorkbookSource>,
    appointments: Box<dyn WorkbookSource>,
    schema: SheetSchema,
) -> NormalizerResult<NormalizedData> {
    tokio::spawn(async move { load_pair(payroll.as_ref(), appointments.as_ref(), &schema).await })
        .await
        .map_err(|e| component_error(&format!("Load task failed: {}", e)))?
}

/// Load both workbooks concurrently and combine them once both are done
async fn load_pair(
    payroll: &dyn WorkbookSource,
    appointments: &dyn WorkbookSource,
    schema: &SheetSchema,
) -> NormalizerResult<NormalizedData> {
    info!(
        "Loading payroll from {} and appointments from {}",
        payroll.describe(),
        appointments.describe()
    );

    let (payroll_result, appointments_result) = tokio::join!(
        load_payroll(payroll, &schema.payroll),
        load_appointments(appointments, &schema.appointments)
    );

    let (employees, mut diagnostics) =
        payroll_result.map_err(|e| load_error("payroll data", e))?;
    let (appointments, appointment_diagnostics) =
        appointments_result.map_err(|e| load_error("appointments data", e))?;
    diagnostics.merge(appointment_diagnostics);

    info!(
        "Loaded {} employees and {} appointments",
        employees.len(),
        appointments.len()
    );

    Ok(NormalizedData {
        employees,
        appointments,
        diagnostics,
    })
}

async fn load_payroll(
    source: &dyn WorkbookSource,
    schema: &PayrollSchema,
) -> NormalizerResult<(Vec<Employee>, LoadDiagnostics)> {
    let workbook = load_workbook(source).await?;
    let mut diagnostics = LoadDiagnostics::default();
    let employees = extract_employees(&workbook, schema, &mut diagnostics);
    Ok((employees, diagnostics))
}

async fn load_appointments(
    source: &dyn WorkbookSource,
    columns: &AppointmentColumns,
) -> NormalizerResult<(Vec<Appointment>, LoadDiagnostics)> {
    let workbook = load_workbook(source).await?;
    let mut diagnostics = LoadDiagnostics::default();
    let appointments = extract_appointments(&workbook, columns, &mut diagnostics)?;
    Ok((appointments, diagnostics))
}
