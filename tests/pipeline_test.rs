//! End-to-end tests for per-frame processing


use hand_pointer::{
    config::Config,
    control_mapper::{ControlIntent, ControlMapper, IntentSink, RecordingSink},
    filters::FilterKind,
    gesture::GestureStateTracker,
    pipeline::{HandPipeline, SharedPipeline, TrackingState},
    replay::parse_recording,
    sample::{FrameSample, HandState, Point3D},
    Error, Result,
};
use std::thread;
use test_helpers::{frame_at, non_move_intents, scrolls};

fn pipeline(kind: FilterKind) -> HandPipeline {
    HandPipeline::new(kind, GestureStateTracker::default(), ControlMapper::default()).unwrap()
}

#[test]
fn test_every_tracked_frame_moves_pointer() {
    let mut pipeline = pipeline(FilterKind::None);
    for state in [HandState::Open, HandState::Closed, HandState::Lasso] {
        let out = pipeline.process_frame(Some(&frame_at(1.0, state, HandState::Open)));
        assert!(matches!(
            out.intents.last(),
            Some(ControlIntent::PointerMoveAbsolute { .. })
        ));
    }
}

#[test]
fn test_absent_frame_emits_nothing_and_keeps_gesture_state() {
    let mut pipeline = pipeline(FilterKind::None);
    pipeline.process_frame(Some(&frame_at(1.0, HandState::Closed, HandState::Open)));
    let before = pipeline.tracker().state();

    let out = pipeline.process_frame(None);
    assert!(out.intents.is_empty());
    assert!(out.events.is_empty());
    assert!(out.filtered.is_none());
    assert_eq!(pipeline.tracker().state(), before);
    assert_eq!(pipeline.tracking_state(), TrackingState::NotTracked);

    // Hand comes back still closed: no new press
    let out = pipeline.process_frame(Some(&frame_at(1.0, HandState::Closed, HandState::Open)));
    assert!(non_move_intents(&out.intents).is_empty());
    assert_eq!(pipeline.tracking_state(), TrackingState::Tracked);
}

#[test]
fn test_lasso_uses_filtered_depth() {
    // With a 2-sample average the depth lags, so the scroll arrives a frame late
    let mut pipeline = pipeline(FilterKind::SimpleMovingAverage(2));
    let depths = [1.0, 1.0, 1.0, 0.92, 0.92];
    let mut per_frame = Vec::new();
    for z in depths {
        let out = pipeline.process_frame(Some(&frame_at(z, HandState::Lasso, HandState::Open)));
        per_frame.push(scrolls(&out.intents));
    }
    assert!(per_frame[3].is_empty(), "filtered z is 0.96 at frame 3");
    assert_eq!(per_frame[4], vec![ControlIntent::ScrollDelta(120)]);
}

#[test]
fn test_filtered_point_reported() {
    let mut pipeline = pipeline(FilterKind::ExponentialSmoothing(0.5));
    let a = FrameSample::new(Point3D::new(0.0, 0.0, 1.0), HandState::Open, HandState::Open);
    let b = FrameSample::new(Point3D::new(0.2, 0.0, 1.0), HandState::Open, HandState::Open);
    assert_eq!(pipeline.process_frame(Some(&a)).filtered, Some(a.right_hand));
    let out = pipeline.process_frame(Some(&b));
    assert_eq!(out.filtered, Some(Point3D::new(0.1, 0.0, 1.0)));
}

#[test]
fn test_intent_order_within_frame() {
    let mut pipeline = pipeline(FilterKind::None);
    pipeline.process_frame(Some(&frame_at(1.0, HandState::Lasso, HandState::Open)));
    let out = pipeline.process_frame(Some(&frame_at(0.9, HandState::Lasso, HandState::Closed)));
    assert_eq!(
        out.intents,
        vec![
            ControlIntent::ButtonDown,
            ControlIntent::ButtonUp,
            ControlIntent::ScrollDelta(120),
            ControlIntent::PointerMoveAbsolute { x: 32767, y: 32767 },
        ]
    );
}

#[test]
fn test_switch_filter_mid_stream() {
    let mut pipeline = pipeline(FilterKind::SimpleMovingAverage(3));
    for i in 0..6 {
        pipeline.process_frame(Some(&frame_at(1.0 + f64::from(i), HandState::Open, HandState::Open)));
    }
    pipeline.set_filter_kind(FilterKind::DoubleMovingAverage(3)).unwrap();
    let out = pipeline.process_frame(Some(&frame_at(0.5, HandState::Open, HandState::Open)));
    assert_eq!(out.filtered.map(|p| p.z), Some(0.5));
    assert_eq!(pipeline.filter_kind(), FilterKind::DoubleMovingAverage(3));

    assert!(pipeline.set_filter_kind(FilterKind::ExponentialSmoothing(2.0)).is_err());
    assert_eq!(pipeline.filter_kind(), FilterKind::DoubleMovingAverage(3));
}

#[test]
fn test_process_into_sink() {
    let mut pipeline = pipeline(FilterKind::None);
    let mut sink = RecordingSink::new();
    let out = pipeline
        .process_into(Some(&frame_at(1.0, HandState::Closed, HandState::Open)), &mut sink)
        .unwrap();
    assert_eq!(sink.intents(), out.intents.as_slice());
}

struct FailingSink;

impl IntentSink for FailingSink {
    fn submit(&mut self, _intent: ControlIntent) -> Result<()> {
        Err(Error::Sink("injection unavailable".to_string()))
    }
}

#[test]
fn test_sink_error_propagates() {
    let mut pipeline = pipeline(FilterKind::None);
    let result = pipeline.process_into(Some(&frame_at(1.0, HandState::Open, HandState::Open)), &mut FailingSink);
    assert!(matches!(result, Err(Error::Sink(_))));
}

#[test]
fn test_replayed_recording() {
    let yaml = "\
- right_hand: { x: 0.0, y: 0.0, z: 1.0 }
  right_state: Open
  left_state: Open
- right_hand: { x: 0.0, y: 0.0, z: 1.0 }
  right_state: Closed
  left_state: Open
- null
- right_hand: { x: 0.0, y: 0.0, z: 1.0 }
  right_state: Open
  left_state: Open
";
    let frames = parse_recording(yaml).unwrap();
    let mut pipeline = HandPipeline::from_config(&Config::default()).unwrap();
    let mut buttons = Vec::new();
    for frame in &frames {
        buttons.extend(non_move_intents(&pipeline.process_frame(frame.as_ref()).intents));
    }
    assert_eq!(
        buttons,
        vec![ControlIntent::ButtonUp, ControlIntent::ButtonDown, ControlIntent::ButtonUp]
    );
    assert_eq!(pipeline.frames_processed(), 4);
}

#[test]
fn test_shared_pipeline_across_threads() {
    let shared = SharedPipeline::new(pipeline(FilterKind::SimpleMovingAverage(4)));

    let control = shared.clone();
    let switcher = thread::spawn(move || {
        for kind in [FilterKind::ExponentialSmoothing(0.5), FilterKind::ModifiedDoubleMovingAverage(2)] {
            control.set_filter_kind(kind).unwrap();
        }
    });

    for i in 0..100 {
        let out = shared.process_frame(Some(&frame_at(1.0 + f64::from(i) * 0.001, HandState::Open, HandState::Open)));
        assert!(out.filtered.is_some());
    }
    switcher.join().unwrap();

    assert_eq!(shared.filter_kind(), FilterKind::ModifiedDoubleMovingAverage(2));
}
