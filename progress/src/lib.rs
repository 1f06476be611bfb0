//! Progress reconciliation for one learner session.
//!
//! # Architecture
//!
//! [`ProgressTracker`] merges server-confirmed progress rows with the
//! in-session view and derives everything the surrounding application
//! displays. One tracker per learner session, constructed explicitly with
//! its store, so tests can run isolated instances and nothing is ambient.
//!
//! | Operation | Semantics |
//! |-----------|-----------|
//! | [`load`](ProgressTracker::load) | Resolve handle → learner → rows; degrades to the zero-progress view on unknown handles and store failures |
//! | [`complete_module`](ProgressTracker::complete_module) | Idempotent terminal transition; coins granted exactly once |
//! | [`update_step`](ProgressTracker::update_step) | Lazy record creation; highest-step-wins, regressions are silent no-ops |
//!
//! # Consistency
//!
//! Mutations are write-through: the store write happens first and the
//! in-session view changes only once the write is confirmed, so the display
//! never runs ahead of persistence. The coin balance is derived as the sum
//! of record coin fields rather than kept as a separately mutated counter,
//! which removes the partial-failure window a two-write completion would
//! have. Derived views are recomputed from the record set on demand and
//! never stored.

use thiserror::Error;
use unitlab_catalog::{COINS_PER_MODULE, FINAL_STEP};
use unitlab_store::{ProgressStore, StoreError};
use unitlab_types::{Handle, ModuleSlug, NewProgress, ProgressPatch, ProgressRecord, Student};

/// Result of [`ProgressTracker::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum LoadStatus {
    /// Learner resolved and records fetched.
    Loaded,
    /// The handle has no learner row. Not an error: the caller shows the
    /// zero-progress view.
    UnknownLearner,
    /// The store could not be read. Logged; the caller shows the
    /// zero-progress view and may retry the load.
    Unavailable,
}

/// Result of [`ProgressTracker::complete_module`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// First completion of this module; coins were granted.
    Granted { coins: u32 },
    /// The record was already terminal. Nothing was written.
    AlreadyCompleted,
}

#[derive(Debug, Error)]
pub enum ProgressError {
    /// A mutation was attempted with no resolved learner.
    #[error("no learner loaded; load a known handle first")]
    NotLoaded,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Session-scoped view of one learner's progress across the catalogue.
#[derive(Debug)]
pub struct ProgressTracker<S> {
    store: S,
    student: Option<Student>,
    records: Vec<ProgressRecord>,
}

impl<S: ProgressStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            student: None,
            records: Vec::new(),
        }
    }

    /// Resolve `handle` and populate the session view.
    ///
    /// Read-only and retryable. State is replaced only after both reads
    /// finish, so a caller that drops the future mid-flight (navigated away)
    /// discards the late response instead of applying it to a stale view.
    pub async fn load(&mut self, handle: &Handle) -> LoadStatus {
        let (state, status) = match self.store.find_student(handle).await {
            Ok(Some(student)) => match self.store.fetch_progress(student.id).await {
                Ok(mut records) => {
                    records.sort_by_key(|record| record.module.id());
                    ((Some(student), records), LoadStatus::Loaded)
                }
                Err(err) => {
                    tracing::warn!(
                        handle = %handle,
                        error = %err,
                        "progress fetch failed; degrading to zero-progress view"
                    );
                    ((None, Vec::new()), LoadStatus::Unavailable)
                }
            },
            Ok(None) => {
                tracing::debug!(handle = %handle, "no learner row for handle");
                ((None, Vec::new()), LoadStatus::UnknownLearner)
            }
            Err(err) => {
                tracing::warn!(
                    handle = %handle,
                    error = %err,
                    "learner lookup failed; degrading to zero-progress view"
                );
                ((None, Vec::new()), LoadStatus::Unavailable)
            }
        };

        (self.student, self.records) = state;
        status
    }

    /// Mark `module` completed and grant its coins, exactly once.
    ///
    /// A record that is already terminal returns
    /// [`Completion::AlreadyCompleted`] with no store traffic. Otherwise a
    /// single keyed write makes the row terminal; the session view updates
    /// only after the write is confirmed.
    pub async fn complete_module(&mut self, module: ModuleSlug) -> Result<Completion, ProgressError> {
        let student_id = self.student.as_ref().ok_or(ProgressError::NotLoaded)?.id;

        if self.is_completed(module) {
            return Ok(Completion::AlreadyCompleted);
        }

        let record = ProgressRecord::completed(module, FINAL_STEP, COINS_PER_MODULE);
        if self.record_for(module).is_some() {
            let patch = ProgressPatch::completion(FINAL_STEP, COINS_PER_MODULE);
            self.store.update_progress(student_id, module, &patch).await?;
        } else {
            self.store
                .insert_progress(&NewProgress::from_record(student_id, &record))
                .await?;
        }

        self.put_record(record);
        tracing::info!(module = %module, coins = COINS_PER_MODULE, "module completed");
        Ok(Completion::Granted {
            coins: COINS_PER_MODULE,
        })
    }

    /// Advance the confirmed step for `module`.
    ///
    /// Creates the record on first contact with a module. An update that
    /// does not advance the step is a silent no-op: duplicate or
    /// out-of-order submissions from rapid interaction are expected, and
    /// highest-step-wins makes them harmless.
    pub async fn update_step(&mut self, module: ModuleSlug, step: u32) -> Result<(), ProgressError> {
        let student_id = self.student.as_ref().ok_or(ProgressError::NotLoaded)?.id;

        match self.record_for(module) {
            Some(existing) => {
                if step <= existing.step_completed {
                    return Ok(());
                }
                let mut updated = existing.clone();
                updated.step_completed = step;

                self.store
                    .update_progress(student_id, module, &ProgressPatch::step(step))
                    .await?;
                self.put_record(updated);
            }
            None => {
                let record = ProgressRecord::at_step(module, step);
                self.store
                    .insert_progress(&NewProgress::from_record(student_id, &record))
                    .await?;
                self.put_record(record);
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Derived views, recomputed from the record set on demand.
    // ------------------------------------------------------------------

    #[must_use]
    pub fn student(&self) -> Option<&Student> {
        self.student.as_ref()
    }

    #[must_use]
    pub fn records(&self) -> &[ProgressRecord] {
        &self.records
    }

    #[must_use]
    pub fn record_for(&self, module: ModuleSlug) -> Option<&ProgressRecord> {
        self.records.iter().find(|record| record.module == module)
    }

    #[must_use]
    pub fn is_completed(&self, module: ModuleSlug) -> bool {
        self.record_for(module).is_some_and(|record| record.completed)
    }

    /// Last confirmed step for `module`; zero when the module is untouched.
    #[must_use]
    pub fn step_for(&self, module: ModuleSlug) -> u32 {
        self.record_for(module)
            .map(|record| record.step_completed)
            .unwrap_or(0)
    }

    /// Completed modules, in catalogue order.
    #[must_use]
    pub fn completed_modules(&self) -> Vec<ModuleSlug> {
        self.records
            .iter()
            .filter(|record| record.completed)
            .map(|record| record.module)
            .collect()
    }

    /// Overall completion as a rounded percentage of the catalogue.
    #[must_use]
    pub fn total_progress(&self) -> u8 {
        let completed = self.records.iter().filter(|record| record.completed).count();
        let total = unitlab_catalog::len();
        (100.0 * completed as f64 / total as f64).round() as u8
    }

    /// Coin balance, derived as the sum over records. The store's balance
    /// column is display legacy and never consulted.
    #[must_use]
    pub fn total_coins(&self) -> u32 {
        self.records.iter().map(|record| record.coins_earned).sum()
    }

    /// The first catalogue module not yet completed; the first module when
    /// everything is complete, so a finished learner can replay.
    #[must_use]
    pub fn current_module(&self) -> ModuleSlug {
        ModuleSlug::all()
            .iter()
            .copied()
            .find(|module| !self.is_completed(*module))
            .unwrap_or(ModuleSlug::all()[0])
    }

    fn put_record(&mut self, record: ProgressRecord) {
        self.records.retain(|existing| existing.module != record.module);
        self.records.push(record);
        self.records.sort_by_key(|record| record.module.id());
    }
}

#[cfg(test)]
mod tests;
