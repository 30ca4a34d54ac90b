use tracing::{debug, warn};

use crate::clock::Clock;
use crate::config::StoreConfig;
use crate::io::local::LocalStore;
use crate::io::remote::RemoteStore;
use crate::model::{AppState, Phase, Project, Task, TaskStatus};
use crate::store::action::{
    Action, NewPhase, NewProject, NewTask, PhasePatch, PhaseTemplate, ProjectPatch, TaskPatch,
};
use crate::store::reducer::{ReduceCx, reduce};
use crate::store::saver::SaveScheduler;
use crate::util::id::IdGen;
use crate::util::listeners::{SubscriberId, Subscribers};

/// Bridges the pure reducer to the outside world: owns the state, re-runs
/// hydration when the authenticated identity changes, schedules the
/// debounced dual save, and exposes derived views plus action dispatchers.
///
/// Single-threaded and tick-driven: the embedding application dispatches
/// actions from its event handlers and calls [`AppStore::tick`] each loop
/// iteration to let due saves fire. Construct, call [`AppStore::init`]
/// once, and call [`AppStore::dispose`] on shutdown.
pub struct AppStore {
    state: AppState,
    loaded: bool,
    hydrating: bool,
    identity: Option<String>,
    local: Box<dyn LocalStore>,
    remote: Box<dyn RemoteStore>,
    clock: Box<dyn Clock>,
    ids: IdGen,
    saver: SaveScheduler,
    subscribers: Subscribers<AppState>,
}

impl AppStore {
    pub fn new(
        local: Box<dyn LocalStore>,
        remote: Box<dyn RemoteStore>,
        clock: Box<dyn Clock>,
        config: &StoreConfig,
    ) -> Self {
        AppStore {
            state: AppState::default(),
            loaded: false,
            hydrating: false,
            identity: None,
            local,
            remote,
            clock,
            ids: IdGen::new(),
            saver: SaveScheduler::new(config.debounce()),
            subscribers: Subscribers::new(),
        }
    }

    /// Replace the id generator (seeded ids for deterministic tests)
    pub fn with_ids(mut self, ids: IdGen) -> Self {
        self.ids = ids;
        self
    }

    /// Run the first hydration. Until this (or a [`Self::set_identity`])
    /// completes, [`Self::state`] returns `None`.
    pub fn init(&mut self) {
        self.hydrate();
    }

    /// Flush any pending save and drop all listeners
    pub fn dispose(&mut self) {
        self.flush();
        self.subscribers.clear();
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// React to a session change: a different identity re-runs hydration
    /// against that identity's remote row.
    pub fn set_identity(&mut self, user: Option<String>) {
        if self.identity == user {
            return;
        }
        self.identity = user;
        self.hydrate();
    }

    // ── Hydration ──────────────────────────────────────────────────────

    /// Choose the snapshot source and load it. Local is read
    /// unconditionally (it may need to be imported); with an identity the
    /// remote row wins when present, an empty row triggers a one-time
    /// import of local state, and a failed read degrades to local.
    fn hydrate(&mut self) {
        self.hydrating = true;
        // Whatever was pending described pre-hydration state; drop it
        self.saver.cancel();

        let local_state = self.local.load();
        let chosen = match self.identity.clone() {
            Some(user) => match self.remote.load(&user) {
                Ok(Some(remote_state)) => {
                    debug!(user = %user, "hydrating from remote");
                    Some(remote_state)
                }
                Ok(None) => {
                    if let Some(local_state) = local_state {
                        debug!(user = %user, "remote row empty, importing local snapshot");
                        if let Err(e) = self.remote.save(&user, &local_state) {
                            warn!(user = %user, error = %e, "one-time import to remote failed");
                        }
                        Some(local_state)
                    } else {
                        None
                    }
                }
                Err(e) => {
                    warn!(user = %user, error = %e, "remote read failed, falling back to local");
                    local_state
                }
            },
            None => local_state,
        };

        if let Some(snapshot) = chosen {
            self.apply(Action::LoadState(snapshot));
        }
        self.loaded = true;
        self.hydrating = false;
        self.subscribers.emit(&self.state);
    }

    // ── Dispatch ───────────────────────────────────────────────────────

    /// Run one action through the reducer and notify listeners. Does not
    /// touch the save scheduler; hydration loads go through here.
    fn apply(&mut self, action: Action) {
        let now = self.clock.now();
        let state = std::mem::take(&mut self.state);
        let mut cx = ReduceCx {
            now,
            ids: &mut self.ids,
        };
        self.state = reduce(state, action, &mut cx);

        if self.loaded && !self.hydrating {
            self.subscribers.emit(&self.state);
        }
    }

    /// Dispatch a mutation. Post-hydration dispatches arm (or re-arm) the
    /// debounced save; every state change within one window coalesces into
    /// a single write of the final state.
    pub fn dispatch(&mut self, action: Action) {
        self.apply(action);
        if self.loaded {
            let now = self.clock.now();
            self.saver.note_change(now);
        }
    }

    // ── Persistence ────────────────────────────────────────────────────

    /// Drive the debounce clock; performs the dual write when the deadline
    /// has elapsed.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if self.saver.due(now) {
            self.perform_save();
        }
    }

    /// Run any scheduled save immediately, without waiting for the window
    pub fn flush(&mut self) {
        if !self.saver.is_idle() {
            self.perform_save();
        }
    }

    /// Always writes local; adds the remote row when an identity is
    /// present at save time. The two writes are independent: failure of
    /// one never blocks or rolls back the other, and failures are logged,
    /// not surfaced.
    fn perform_save(&mut self) {
        self.saver.begin();
        self.local.save(&self.state);
        if let Some(user) = self.identity.clone() {
            if let Err(e) = self.remote.save(&user, &self.state) {
                warn!(user = %user, error = %e, "remote save failed; in-memory state remains authoritative");
            }
        }
        self.saver.settle();
    }

    /// True from the moment a save is scheduled until all writes settle
    pub fn saving(&self) -> bool {
        !self.saver.is_idle()
    }

    // ── Read access ────────────────────────────────────────────────────

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// The current state, or `None` before the first hydration completes
    pub fn state(&self) -> Option<&AppState> {
        self.loaded.then_some(&self.state)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ── Derived views (recomputed per call) ────────────────────────────

    pub fn active_project(&self) -> Option<&Project> {
        let id = self.state.active_project_id.as_deref()?;
        self.state.project(id)
    }

    /// Phases of the active project, ascending by `order`
    pub fn active_phases(&self) -> Vec<&Phase> {
        match self.state.active_project_id.as_deref() {
            Some(id) => self.state.project_phases(id),
            None => Vec::new(),
        }
    }

    /// Tasks belonging to any phase of the active project
    pub fn active_tasks(&self) -> Vec<&Task> {
        let phases = self.active_phases();
        self.state
            .tasks
            .iter()
            .filter(|t| phases.iter().any(|p| p.id == t.phase_id))
            .collect()
    }

    pub fn tasks_by_phase(&self, phase_id: &str) -> Vec<&Task> {
        self.state.phase_tasks(phase_id)
    }

    // ── Action dispatchers ─────────────────────────────────────────────

    pub fn set_active_project(&mut self, id: Option<String>) {
        self.dispatch(Action::SetActiveProject(id));
    }

    pub fn create_project(&mut self, project: NewProject, template_phases: Vec<PhaseTemplate>) {
        self.dispatch(Action::CreateProject {
            project,
            template_phases,
        });
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) {
        self.dispatch(Action::UpdateProject {
            id: id.into(),
            patch,
        });
    }

    pub fn delete_project(&mut self, id: &str) {
        self.dispatch(Action::DeleteProject(id.into()));
    }

    pub fn create_phase(&mut self, phase: NewPhase) {
        self.dispatch(Action::CreatePhase(phase));
    }

    pub fn update_phase(&mut self, id: &str, patch: PhasePatch) {
        self.dispatch(Action::UpdatePhase {
            id: id.into(),
            patch,
        });
    }

    pub fn delete_phase(&mut self, id: &str) {
        self.dispatch(Action::DeletePhase(id.into()));
    }

    pub fn reorder_phases(&mut self, project_id: &str, ordered_ids: Vec<String>) {
        self.dispatch(Action::ReorderPhases {
            project_id: project_id.into(),
            ordered_ids,
        });
    }

    pub fn create_task(&mut self, task: NewTask) {
        self.dispatch(Action::CreateTask(task));
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch) {
        self.dispatch(Action::UpdateTask {
            id: id.into(),
            patch,
        });
    }

    pub fn delete_task(&mut self, id: &str) {
        self.dispatch(Action::DeleteTask(id.into()));
    }

    pub fn update_task_status(&mut self, id: &str, status: TaskStatus) {
        self.dispatch(Action::UpdateTaskStatus {
            id: id.into(),
            status,
        });
    }

    pub fn bulk_update_status(&mut self, ids: Vec<String>, status: TaskStatus) {
        self.dispatch(Action::BulkUpdateStatus { ids, status });
    }
}
