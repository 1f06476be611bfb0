//! Tracker tests against an in-memory store with fault injection.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use reqwest::StatusCode;
use unitlab_store::{ProgressStore, StoreError};
use unitlab_types::{
    Handle, ModuleSlug, NewProgress, ProgressPatch, ProgressRecord, Student, StudentId,
};
use uuid::Uuid;

use crate::{Completion, LoadStatus, ProgressError, ProgressTracker};

#[derive(Clone, Default)]
struct MemoryStore {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    student: RefCell<Option<Student>>,
    rows: RefCell<Vec<(StudentId, ProgressRecord)>>,
    writes: Cell<u32>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    fn with_student(student: Student) -> Self {
        let store = Self::default();
        *store.inner.student.borrow_mut() = Some(student);
        store
    }

    fn seed_row(&self, student: StudentId, record: ProgressRecord) {
        self.inner.rows.borrow_mut().push((student, record));
    }

    fn writes(&self) -> u32 {
        self.inner.writes.get()
    }

    fn row(&self, module: ModuleSlug) -> Option<ProgressRecord> {
        self.inner
            .rows
            .borrow()
            .iter()
            .find(|(_, record)| record.module == module)
            .map(|(_, record)| record.clone())
    }

    fn injected() -> StoreError {
        StoreError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "injected failure".to_string(),
        }
    }
}

impl ProgressStore for MemoryStore {
    async fn find_student(&self, handle: &Handle) -> Result<Option<Student>, StoreError> {
        if self.inner.fail_reads.get() {
            return Err(Self::injected());
        }
        Ok(self
            .inner
            .student
            .borrow()
            .as_ref()
            .filter(|student| student.handle == *handle)
            .cloned())
    }

    async fn fetch_progress(&self, student: StudentId) -> Result<Vec<ProgressRecord>, StoreError> {
        if self.inner.fail_reads.get() {
            return Err(Self::injected());
        }
        Ok(self
            .inner
            .rows
            .borrow()
            .iter()
            .filter(|(owner, _)| *owner == student)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn insert_progress(&self, row: &NewProgress) -> Result<(), StoreError> {
        if self.inner.fail_writes.get() {
            return Err(Self::injected());
        }
        self.inner.writes.set(self.inner.writes.get() + 1);

        let record = ProgressRecord {
            module: row.module,
            step_completed: row.step_completed,
            completed: row.completed,
            coins_earned: row.coins_earned,
        };
        let mut rows = self.inner.rows.borrow_mut();
        // merge-duplicates semantics on the (student, module) key
        rows.retain(|(owner, existing)| !(*owner == row.student_id && existing.module == row.module));
        rows.push((row.student_id, record));
        Ok(())
    }

    async fn update_progress(
        &self,
        student: StudentId,
        module: ModuleSlug,
        patch: &ProgressPatch,
    ) -> Result<(), StoreError> {
        if self.inner.fail_writes.get() {
            return Err(Self::injected());
        }
        self.inner.writes.set(self.inner.writes.get() + 1);

        let mut rows = self.inner.rows.borrow_mut();
        for (owner, record) in rows.iter_mut() {
            if *owner == student && record.module == module {
                if let Some(step) = patch.step_completed {
                    record.step_completed = step;
                }
                if let Some(completed) = patch.completed {
                    record.completed = completed;
                }
                if let Some(coins) = patch.coins_earned {
                    record.coins_earned = coins;
                }
            }
        }
        Ok(())
    }
}

fn demo_student() -> Student {
    Student {
        id: StudentId::new(Uuid::from_u128(7)),
        handle: Handle::new("@demo").unwrap(),
        // the balance column is deliberately wrong: the tracker must derive
        // coins from records, never read this
        coins: 999,
        name: "Demo".to_string(),
        created_at: None,
    }
}

fn demo_handle() -> Handle {
    Handle::new("@demo").unwrap()
}

async fn loaded_tracker(store: MemoryStore) -> ProgressTracker<MemoryStore> {
    let mut tracker = ProgressTracker::new(store);
    let status = tracker.load(&demo_handle()).await;
    assert_eq!(status, LoadStatus::Loaded);
    tracker
}

#[tokio::test]
async fn load_unknown_handle_is_zero_progress_not_an_error() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = ProgressTracker::new(store);

    let status = tracker.load(&Handle::new("@stranger").unwrap()).await;

    assert_eq!(status, LoadStatus::UnknownLearner);
    assert!(tracker.student().is_none());
    assert_eq!(tracker.total_progress(), 0);
    assert_eq!(tracker.total_coins(), 0);
    assert_eq!(tracker.current_module(), ModuleSlug::UnitMargin);
}

#[tokio::test]
async fn load_failure_degrades_to_zero_progress() {
    let store = MemoryStore::with_student(demo_student());
    store.inner.fail_reads.set(true);
    let mut tracker = ProgressTracker::new(store);

    let status = tracker.load(&demo_handle()).await;

    assert_eq!(status, LoadStatus::Unavailable);
    assert!(tracker.student().is_none());
    assert_eq!(tracker.records().len(), 0);
}

#[tokio::test]
async fn load_populates_records_in_catalogue_order() {
    let student = demo_student();
    let store = MemoryStore::with_student(student.clone());
    store.seed_row(student.id, ProgressRecord::at_step(ModuleSlug::Ltv, 2));
    store.seed_row(
        student.id,
        ProgressRecord::completed(ModuleSlug::UnitMargin, 6, 50),
    );

    let tracker = loaded_tracker(store).await;

    let modules: Vec<ModuleSlug> = tracker.records().iter().map(|r| r.module).collect();
    assert_eq!(modules, vec![ModuleSlug::UnitMargin, ModuleSlug::Ltv]);
    assert_eq!(tracker.step_for(ModuleSlug::Ltv), 2);
    assert!(tracker.is_completed(ModuleSlug::UnitMargin));
}

#[tokio::test]
async fn mutating_before_load_is_not_loaded() {
    let mut tracker = ProgressTracker::new(MemoryStore::default());

    let err = tracker.complete_module(ModuleSlug::Cac).await.unwrap_err();
    assert!(matches!(err, ProgressError::NotLoaded));

    let err = tracker.update_step(ModuleSlug::Cac, 1).await.unwrap_err();
    assert!(matches!(err, ProgressError::NotLoaded));
}

#[tokio::test]
async fn complete_module_grants_coins_exactly_once() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store.clone()).await;

    let first = tracker.complete_module(ModuleSlug::Cac).await.unwrap();
    assert_eq!(first, Completion::Granted { coins: 50 });
    assert_eq!(tracker.total_coins(), 50);

    let second = tracker.complete_module(ModuleSlug::Cac).await.unwrap();
    assert_eq!(second, Completion::AlreadyCompleted);

    // same final state as completing once, and no second write
    assert_eq!(tracker.total_coins(), 50);
    assert_eq!(store.writes(), 1);

    let row = store.row(ModuleSlug::Cac).unwrap();
    assert!(row.completed);
    assert_eq!(row.step_completed, 6);
    assert_eq!(row.coins_earned, 50);
}

#[tokio::test]
async fn complete_module_updates_an_existing_record_in_place() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store.clone()).await;

    tracker.update_step(ModuleSlug::Churn, 3).await.unwrap();
    let completion = tracker.complete_module(ModuleSlug::Churn).await.unwrap();

    assert_eq!(completion, Completion::Granted { coins: 50 });
    assert_eq!(store.writes(), 2); // one insert, one keyed update

    let row = store.row(ModuleSlug::Churn).unwrap();
    assert!(row.completed);
    assert_eq!(row.step_completed, 6);
    assert_eq!(row.coins_earned, 50);
    // exactly one row for the module survives the transition
    assert_eq!(store.inner.rows.borrow().len(), 1);
}

#[tokio::test]
async fn step_updates_never_regress() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store.clone()).await;

    tracker.update_step(ModuleSlug::Arpu, 4).await.unwrap();
    tracker.update_step(ModuleSlug::Arpu, 2).await.unwrap();

    assert_eq!(tracker.step_for(ModuleSlug::Arpu), 4);
    assert_eq!(store.row(ModuleSlug::Arpu).unwrap().step_completed, 4);
    // the regression was a local no-op: no second store write
    assert_eq!(store.writes(), 1);

    // equal step is also a no-op
    tracker.update_step(ModuleSlug::Arpu, 4).await.unwrap();
    assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn update_step_creates_an_incomplete_record() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store.clone()).await;

    tracker.update_step(ModuleSlug::Freemium, 2).await.unwrap();

    let row = store.row(ModuleSlug::Freemium).unwrap();
    assert!(!row.completed);
    assert_eq!(row.step_completed, 2);
    assert_eq!(row.coins_earned, 0);
    assert!(!tracker.is_completed(ModuleSlug::Freemium));
}

#[tokio::test]
async fn total_progress_tracks_the_completed_set() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store).await;

    assert_eq!(tracker.total_progress(), 0);

    tracker.complete_module(ModuleSlug::UnitMargin).await.unwrap();
    assert_eq!(tracker.total_progress(), 7); // round(100 * 1/15)

    tracker.complete_module(ModuleSlug::Cac).await.unwrap();
    assert_eq!(tracker.total_progress(), 13); // round(100 * 2/15)

    for module in ModuleSlug::all() {
        tracker.complete_module(*module).await.unwrap();
    }
    assert_eq!(tracker.total_progress(), 100);
}

#[tokio::test]
async fn current_module_walks_the_catalogue_and_wraps() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store).await;

    assert_eq!(tracker.current_module(), ModuleSlug::UnitMargin);

    tracker.complete_module(ModuleSlug::UnitMargin).await.unwrap();
    assert_eq!(tracker.current_module(), ModuleSlug::Cac);

    // completing out of order skips past completed modules
    tracker.complete_module(ModuleSlug::Ltv).await.unwrap();
    assert_eq!(tracker.current_module(), ModuleSlug::Cac);

    for module in ModuleSlug::all() {
        tracker.complete_module(*module).await.unwrap();
    }
    assert_eq!(tracker.current_module(), ModuleSlug::UnitMargin);
}

#[tokio::test]
async fn coin_balance_is_derived_from_records_not_the_balance_column() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store).await;

    tracker.complete_module(ModuleSlug::UnitMargin).await.unwrap();
    tracker.complete_module(ModuleSlug::Cac).await.unwrap();

    // the student row claims 999 coins; the derived balance wins
    assert_eq!(tracker.student().unwrap().coins, 999);
    assert_eq!(tracker.total_coins(), 100);
}

#[tokio::test]
async fn failed_completion_leaves_the_session_view_unchanged() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store.clone()).await;

    store.inner.fail_writes.set(true);
    let err = tracker.complete_module(ModuleSlug::Cac).await.unwrap_err();

    assert!(matches!(err, ProgressError::Store(ref e) if e.is_transient()));
    assert!(!tracker.is_completed(ModuleSlug::Cac));
    assert_eq!(tracker.total_coins(), 0);

    // the store recovers and the same call succeeds
    store.inner.fail_writes.set(false);
    let completion = tracker.complete_module(ModuleSlug::Cac).await.unwrap();
    assert_eq!(completion, Completion::Granted { coins: 50 });
}

#[tokio::test]
async fn failed_step_update_leaves_the_session_view_unchanged() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store.clone()).await;

    tracker.update_step(ModuleSlug::Ltv, 2).await.unwrap();

    store.inner.fail_writes.set(true);
    let err = tracker.update_step(ModuleSlug::Ltv, 5).await.unwrap_err();

    assert!(matches!(err, ProgressError::Store(_)));
    assert_eq!(tracker.step_for(ModuleSlug::Ltv), 2);
    assert_eq!(store.row(ModuleSlug::Ltv).unwrap().step_completed, 2);
}

#[tokio::test]
async fn completed_modules_come_back_in_catalogue_order() {
    let store = MemoryStore::with_student(demo_student());
    let mut tracker = loaded_tracker(store).await;

    tracker.complete_module(ModuleSlug::Churn).await.unwrap();
    tracker.complete_module(ModuleSlug::UnitMargin).await.unwrap();

    assert_eq!(
        tracker.completed_modules(),
        vec![ModuleSlug::UnitMargin, ModuleSlug::Churn]
    );
}

#[tokio::test]
async fn reload_reflects_confirmed_store_state() {
    let student = demo_student();
    let store = MemoryStore::with_student(student.clone());
    let mut tracker = loaded_tracker(store.clone()).await;

    tracker.complete_module(ModuleSlug::UnitMargin).await.unwrap();

    // a second session over the same store sees the confirmed rows
    let mut fresh = ProgressTracker::new(store);
    let status = fresh.load(&demo_handle()).await;
    assert_eq!(status, LoadStatus::Loaded);
    assert!(fresh.is_completed(ModuleSlug::UnitMargin));
    assert_eq!(fresh.total_coins(), 50);
}
