#![cfg(target_arch = "wasm32")]
use std::cell::Cell;
use std::rc::Rc;

use cubelab_sequencer_wasm::{abi_version, CubelabSequencer};
use js_sys::Function;
use serde_json::{json, Value};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_json(v: JsValue) -> Value {
    swb::from_value(v).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let seq = CubelabSequencer::new(JsValue::UNDEFINED).unwrap();
    let state = to_json(seq.state().unwrap());
    assert_eq!(state, json!({ "current_index": 0, "is_playing": false }));
}

/// it should reject a zero autoplay interval
#[wasm_bindgen_test]
fn invalid_config_is_an_error() {
    let cfg = swb::to_value(&json!({ "autoplay_interval_ms": 0 })).unwrap();
    assert!(CubelabSequencer::new(cfg).is_err());
}

/// it should step, report controls and plan nodes for the current index
#[wasm_bindgen_test]
fn step_and_inspect() {
    let mut seq = CubelabSequencer::new(JsValue::NULL).unwrap();
    assert!(!seq.retreat());
    for _ in 0..3 {
        assert!(seq.advance());
    }
    let controls = to_json(seq.controls().unwrap());
    assert_eq!(controls["step_text"], "Step 4 of 27");
    assert_eq!(controls["coordinate"], json!({ "x": -1, "y": 0, "z": -1 }));

    let nodes = to_json(seq.visible_nodes().unwrap());
    assert_eq!(nodes["nodes"].as_array().map(Vec::len), Some(4));

    let coords = to_json(seq.coordinates().unwrap());
    assert_eq!(coords.as_array().map(Vec::len), Some(27));
}

/// it should advance three times over three autoplay intervals
#[wasm_bindgen_test]
fn autoplay_via_tick() {
    let mut seq = CubelabSequencer::new(JsValue::NULL).unwrap();
    assert!(seq.toggle_play());
    assert_eq!(seq.tick(1500.0), 3);
    assert_eq!(seq.tick(-5.0), 0);
    assert_eq!(to_json(seq.state().unwrap())["current_index"], 3);
}

/// it should run to the last step on an enormous frame delta instead of trapping
#[wasm_bindgen_test]
fn huge_tick_saturates() {
    let mut seq = CubelabSequencer::new(JsValue::NULL).unwrap();
    assert!(seq.toggle_play());
    assert_eq!(seq.tick(1e25), 26);
    assert_eq!(
        to_json(seq.state().unwrap()),
        json!({ "current_index": 26, "is_playing": false })
    );
    assert_eq!(seq.tick(f64::MAX), 0);
}

/// it should cap undrained events when the host never calls drainEvents
#[wasm_bindgen_test]
fn undrained_events_stay_bounded() {
    let mut seq = CubelabSequencer::new(JsValue::NULL).unwrap();
    for _ in 0..1_000 {
        seq.advance();
        seq.retreat();
    }
    let events = to_json(seq.drain_events().unwrap());
    assert_eq!(
        events.as_array().map(Vec::len),
        Some(cubelab_sequencer_core::MAX_QUEUED_EVENTS)
    );
}

#[wasm_bindgen_test]
fn apply_named_commands() {
    let mut seq = CubelabSequencer::new(JsValue::NULL).unwrap();
    assert!(seq.apply("next").unwrap());
    assert!(seq.apply("reset").unwrap());
    assert!(seq.apply("jump").is_err());
}

/// it should call the change callback and go quiet after dispose
#[wasm_bindgen_test]
fn on_change_and_dispose() {
    let calls = Rc::new(Cell::new(0u32));
    let counter = calls.clone();
    let closure = Closure::wrap(Box::new(move |_state: JsValue| {
        counter.set(counter.get() + 1);
    }) as Box<dyn FnMut(JsValue)>);
    let f: Function = closure.as_ref().unchecked_ref::<Function>().clone();

    let mut seq = CubelabSequencer::new(JsValue::NULL).unwrap();
    seq.set_on_change(f.into()).unwrap();
    seq.advance();
    seq.retreat();
    seq.retreat();
    assert_eq!(calls.get(), 2);

    seq.dispose();
    assert!(seq.is_disposed());
    assert!(!seq.advance());
    assert!(seq.state().unwrap().is_undefined());
    assert_eq!(calls.get(), 2);
    drop(closure);
}
