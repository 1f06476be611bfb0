//! Learner and progress row types, as exchanged with the remote store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Handle, ModuleSlug, StudentId};

/// A learner row from the `students` collection.
///
/// `coins` mirrors the store's balance column as fetched; the authoritative
/// balance is derived from progress records (see `unitlab-progress`), so this
/// field is display data only and is never written back by this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub handle: Handle,
    pub name: String,
    #[serde(default)]
    pub coins: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One (learner, module) progress row.
///
/// Invariants enforced at the service layer: at most one record per module per
/// learner, `step_completed` never regresses, and `completed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(rename = "module_id")]
    pub module: ModuleSlug,
    pub step_completed: u32,
    pub completed: bool,
    #[serde(default)]
    pub coins_earned: u32,
}

impl ProgressRecord {
    /// A fresh, incomplete record at the given step.
    #[must_use]
    pub const fn at_step(module: ModuleSlug, step: u32) -> Self {
        Self {
            module,
            step_completed: step,
            completed: false,
            coins_earned: 0,
        }
    }

    /// A terminal record: final step reached, coins granted.
    #[must_use]
    pub const fn completed(module: ModuleSlug, final_step: u32, coins: u32) -> Self {
        Self {
            module,
            step_completed: final_step,
            completed: true,
            coins_earned: coins,
        }
    }
}

/// Insert payload for a new progress row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProgress {
    pub student_id: StudentId,
    #[serde(rename = "module_id")]
    pub module: ModuleSlug,
    pub step_completed: u32,
    pub completed: bool,
    pub coins_earned: u32,
}

impl NewProgress {
    #[must_use]
    pub const fn from_record(student_id: StudentId, record: &ProgressRecord) -> Self {
        Self {
            student_id,
            module: record.module,
            step_completed: record.step_completed,
            completed: record.completed,
            coins_earned: record.coins_earned,
        }
    }
}

/// Partial update for an existing progress row; `None` fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_completed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coins_earned: Option<u32>,
}

impl ProgressPatch {
    /// Patch advancing only the step counter.
    #[must_use]
    pub const fn step(step_completed: u32) -> Self {
        Self {
            step_completed: Some(step_completed),
            completed: None,
            coins_earned: None,
        }
    }

    /// Patch marking the row terminal.
    #[must_use]
    pub const fn completion(final_step: u32, coins: u32) -> Self {
        Self {
            step_completed: Some(final_step),
            completed: Some(true),
            coins_earned: Some(coins),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.step_completed.is_none() && self.completed.is_none() && self.coins_earned.is_none()
    }
}
