//! Background mutation tasks over a shared `Vehicle`.
//!
//! A task owns a clone of the `Arc` for as long as its thread runs. Joining
//! the task is what makes its write visible to the spawning thread; after
//! the join, `reclaim` hands the vehicle back to the caller as a plain value.

use std::any::Any;
use std::io;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use thiserror::Error;

use crate::vehicle::Vehicle;

pub type SharedVehicle = Arc<Mutex<Vehicle>>;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to spawn task `{label}`: {source}")]
    Spawn {
        label: String,
        #[source]
        source: io::Error,
    },
    #[error("task `{label}` panicked: {message}")]
    Panicked { label: String, message: String },
    #[error("vehicle lock was poisoned")]
    Poisoned,
    #[error("vehicle is still shared with another owner")]
    StillShared,
}

pub fn share(vehicle: Vehicle) -> SharedVehicle {
    Arc::new(Mutex::new(vehicle))
}

/// Handle to a running mutation. Dropping it detaches the thread.
pub struct Mutation {
    label: String,
    handle: JoinHandle<Result<(), TaskError>>,
}

/// Runs `f` once against `vehicle` on a new thread named `label`.
pub fn spawn_mutation<F>(label: &str, vehicle: &SharedVehicle, f: F) -> Result<Mutation, TaskError>
where
    F: FnOnce(&mut Vehicle) + Send + 'static,
{
    let target = Arc::clone(vehicle);
    let handle = thread::Builder::new()
        .name(label.to_string())
        .spawn(move || {
            let mut guard = target.lock().map_err(|_| TaskError::Poisoned)?;
            f(&mut guard);
            Ok(())
        })
        .map_err(|source| TaskError::Spawn {
            label: label.to_string(),
            source,
        })?;
    log::debug!("spawned task `{}`", label);
    Ok(Mutation {
        label: label.to_string(),
        handle,
    })
}

impl Mutation {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Blocks until the task's thread has finished.
    pub fn join(self) -> Result<(), TaskError> {
        let Mutation { label, handle } = self;
        match handle.join() {
            Ok(result) => {
                log::debug!("joined task `{}`", label);
                result
            }
            Err(payload) => Err(TaskError::Panicked {
                message: panic_message(payload.as_ref()),
                label,
            }),
        }
    }
}

/// Takes the vehicle back once every task holding it has been joined.
pub fn reclaim(vehicle: SharedVehicle) -> Result<Vehicle, TaskError> {
    let mutex = Arc::try_unwrap(vehicle).map_err(|_| TaskError::StillShared)?;
    mutex.into_inner().map_err(|_| TaskError::Poisoned)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_makes_write_visible() {
        let v = share(Vehicle::new());
        let task = spawn_mutation("set-id", &v, |v| v.set_id(1)).unwrap();
        assert_eq!(task.label(), "set-id");
        task.join().unwrap();

        let v = reclaim(v).unwrap();
        assert_eq!(v.id(), 1);
        assert_eq!(v.name(), "");
    }

    #[test]
    fn test_independent_tasks() {
        let first = share(Vehicle::new());
        let second = share(Vehicle::new());
        let t1 = spawn_mutation("set-id", &first, |v| v.set_id(1)).unwrap();
        let t2 = spawn_mutation("set-name", &second, |v| v.set_name("Xiaomi")).unwrap();
        t2.join().unwrap();
        t1.join().unwrap();

        let first = reclaim(first).unwrap();
        let second = reclaim(second).unwrap();
        assert_eq!(first.id(), 1);
        assert_eq!(second.name(), "Xiaomi");
    }

    #[test]
    fn test_thread_is_named_after_label() {
        let v = share(Vehicle::new());
        let task = spawn_mutation("set-name", &v, |v| {
            let name = thread::current().name().unwrap_or_default().to_string();
            v.set_name(name);
        })
        .unwrap();
        task.join().unwrap();
        assert_eq!(reclaim(v).unwrap().name(), "set-name");
    }

    #[test]
    fn test_panic_is_reported() {
        let v = share(Vehicle::new());
        let task = spawn_mutation("boom", &v, |_| panic!("mutator failed")).unwrap();
        match task.join() {
            Err(TaskError::Panicked { label, message }) => {
                assert_eq!(label, "boom");
                assert_eq!(message, "mutator failed");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(reclaim(v), Err(TaskError::Poisoned)));
    }

    #[test]
    fn test_reclaim_while_shared() {
        let v = share(Vehicle::new());
        let extra = Arc::clone(&v);
        assert!(matches!(reclaim(v), Err(TaskError::StillShared)));
        assert_eq!(reclaim(extra).unwrap(), Vehicle::new());
    }
}
