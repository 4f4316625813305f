// Host-side tests for the startup teardown guard.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod teardown {
    include!("../src/teardown.rs");
}

use std::cell::RefCell;
use std::rc::Rc;
use teardown::Teardown;

fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> impl FnOnce() {
    let log = log.clone();
    move || log.borrow_mut().push(name)
}

fn failing_startup(log: &Rc<RefCell<Vec<&'static str>>>, fail_after: usize) -> Result<(), String> {
    let mut teardown = Teardown::default();
    for name in ["labels", "canvas", "gpu"].into_iter().take(fail_after) {
        teardown.push(recording(log, name));
    }
    if fail_after < 3 {
        return Err(format!("failed after {} steps", fail_after));
    }
    teardown.disarm();
    Ok(())
}

#[test]
fn error_midway_undoes_earlier_steps_newest_first() {
    let log = Rc::new(RefCell::new(Vec::new()));
    assert!(failing_startup(&log, 2).is_err());
    assert_eq!(*log.borrow(), vec!["canvas", "labels"]);
}

#[test]
fn error_before_any_step_undoes_nothing() {
    let log = Rc::new(RefCell::new(Vec::new()));
    assert!(failing_startup(&log, 0).is_err());
    assert!(log.borrow().is_empty());
}

#[test]
fn successful_startup_keeps_everything() {
    let log = Rc::new(RefCell::new(Vec::new()));
    assert!(failing_startup(&log, 3).is_ok());
    assert!(log.borrow().is_empty());
}

#[test]
fn steps_are_counted_until_dropped() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut teardown = Teardown::default();
    teardown.push(recording(&log, "a"));
    teardown.push(recording(&log, "b"));
    assert_eq!(teardown.len(), 2);
    drop(teardown);
    assert_eq!(*log.borrow(), vec!["b", "a"]);
}
