use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lifestyle_charts::core::CategorySet;
use lifestyle_charts::highlight::{
    ChartHighlight, Emphasis, EmphasisTarget, EmphasisUpdate, HighlightConfig,
    HighlightController, HighlightPhase, PointerEvent, Region, ResetScope, ResetSignal,
    Subscription,
};

#[derive(Default)]
struct Swatch {
    last: Option<Emphasis>,
}

impl EmphasisTarget for Swatch {
    fn apply_emphasis(&mut self, update: EmphasisUpdate) {
        self.last = Some(update.emphasis);
    }
}

fn chart_region() -> Region {
    Region::new(100.0, 50.0, 400.0, 300.0)
}

fn bind_stress_chart(signal: &ResetSignal, config: HighlightConfig) -> ChartHighlight<Swatch> {
    let mut controller = HighlightController::new(CategorySet::stress_levels(), config);
    for key in ["Low", "Moderate", "High"] {
        controller
            .register_data_mark(key, Swatch::default())
            .expect("data mark");
    }
    ChartHighlight::bind(controller, chart_region(), signal)
}

#[test]
fn click_outside_the_chart_clears_the_pin() {
    let signal = ResetSignal::new();
    let chart = bind_stress_chart(&signal, HighlightConfig::default());
    chart.click("Moderate");

    signal.dispatch(PointerEvent::new(10.0, 10.0));

    assert_eq!(chart.controller().phase(), HighlightPhase::Neutral);
    assert_eq!(chart.controller().emphasis_for("High"), Emphasis::Full);
}

#[test]
fn click_inside_the_chart_keeps_the_pin() {
    let signal = ResetSignal::new();
    let chart = bind_stress_chart(&signal, HighlightConfig::default());
    chart.click("Moderate");

    signal.dispatch(PointerEvent::new(250.0, 200.0));
    signal.dispatch(PointerEvent::new(500.0, 350.0));

    assert_eq!(chart.controller().state().active(), Some("Moderate"));
}

#[test]
fn anywhere_scope_resets_on_any_broadcast_click() {
    let signal = ResetSignal::new();
    let config = HighlightConfig::default().with_reset_scope(ResetScope::Anywhere);
    let chart = bind_stress_chart(&signal, config);
    chart.click("Low");

    signal.dispatch(PointerEvent::new(250.0, 200.0));

    assert_eq!(chart.controller().phase(), HighlightPhase::Neutral);
}

#[test]
fn rebuilding_a_chart_keeps_exactly_one_reset_listener() {
    let signal = ResetSignal::new();
    let mut chart = bind_stress_chart(&signal, HighlightConfig::default());
    assert_eq!(signal.listener_count(), 1);

    for _ in 0..5 {
        chart = bind_stress_chart(&signal, HighlightConfig::default());
        assert_eq!(signal.listener_count(), 1);
    }
    assert!(chart.is_connected());

    drop(chart);
    assert_eq!(signal.listener_count(), 0);
}

#[test]
fn stale_chart_does_not_react_after_rebuild() {
    let signal = ResetSignal::new();
    let first = bind_stress_chart(&signal, HighlightConfig::default());
    first.click("High");
    let revision_before = first.controller().revision();
    let second = bind_stress_chart(&signal, HighlightConfig::default());
    second.click("Low");
    drop(first);

    signal.dispatch(PointerEvent::new(0.0, 0.0));

    assert_eq!(revision_before, 1);
    assert_eq!(second.controller().phase(), HighlightPhase::Neutral);
    assert_eq!(signal.listener_count(), 1);
}

#[test]
fn independent_charts_reset_independently() {
    let signal = ResetSignal::new();
    let left = bind_stress_chart(&signal, HighlightConfig::default());
    let mut right_controller =
        HighlightController::new(CategorySet::generations(), HighlightConfig::default());
    right_controller
        .register_data_mark("Gen Z", Swatch::default())
        .expect("data mark");
    let right =
        ChartHighlight::bind(right_controller, Region::new(600.0, 50.0, 400.0, 300.0), &signal);
    left.click("High");
    right.click("Gen Z");

    // Inside the right chart, outside the left one.
    signal.dispatch(PointerEvent::new(700.0, 100.0));

    assert_eq!(left.controller().phase(), HighlightPhase::Neutral);
    assert_eq!(right.controller().state().active(), Some("Gen Z"));
    assert_eq!(signal.listener_count(), 2);
}

#[test]
fn dropping_a_subscription_unregisters_its_listener() {
    let signal = ResetSignal::new();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let subscription = signal.subscribe(move |_| counter.set(counter.get() + 1));

    signal.dispatch(PointerEvent::new(0.0, 0.0));
    drop(subscription);
    signal.dispatch(PointerEvent::new(0.0, 0.0));

    assert_eq!(hits.get(), 1);
    assert_eq!(signal.listener_count(), 0);
}

#[test]
fn subscription_outliving_the_signal_is_disconnected() {
    let signal = ResetSignal::new();
    let subscription = signal.subscribe(|_| {});
    assert!(subscription.is_connected());

    drop(signal);

    assert!(!subscription.is_connected());
}

#[test]
fn listener_may_drop_another_subscription_during_dispatch() {
    let signal = ResetSignal::new();
    let hits = Rc::new(Cell::new(0));
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let slot = victim.clone();
    let _killer = signal.subscribe(move |_| {
        slot.borrow_mut().take();
    });
    let counter = hits.clone();
    *victim.borrow_mut() = Some(signal.subscribe(move |_| counter.set(counter.get() + 1)));
    assert_eq!(signal.listener_count(), 2);

    signal.dispatch(PointerEvent::new(0.0, 0.0));

    assert_eq!(hits.get(), 0);
    assert_eq!(signal.listener_count(), 1);
}

#[test]
fn nested_dispatch_keeps_unsubscribes_made_after_it() {
    let signal = ResetSignal::new();
    let hits = Rc::new(Cell::new(0));
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let inner_signal = signal.clone();
    let slot = victim.clone();
    let _nester = signal.subscribe(move |event| {
        inner_signal.dispatch(event);
        slot.borrow_mut().take();
    });
    let counter = hits.clone();
    *victim.borrow_mut() = Some(signal.subscribe(move |_| counter.set(counter.get() + 1)));

    signal.dispatch(PointerEvent::new(0.0, 0.0));
    assert_eq!(hits.get(), 0);
    assert_eq!(signal.listener_count(), 1);

    signal.dispatch(PointerEvent::new(0.0, 0.0));
    assert_eq!(hits.get(), 0);
    assert_eq!(signal.listener_count(), 1);
}

#[test]
fn listener_added_during_dispatch_runs_from_the_next_dispatch() {
    let signal = ResetSignal::new();
    let hits = Rc::new(Cell::new(0));
    let added: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

    let inner_signal = signal.clone();
    let store = added.clone();
    let counter = hits.clone();
    let _adder = signal.subscribe(move |_| {
        if store.borrow().is_empty() {
            let counter = counter.clone();
            let subscription = inner_signal.subscribe(move |_| counter.set(counter.get() + 1));
            store.borrow_mut().push(subscription);
        }
    });

    signal.dispatch(PointerEvent::new(0.0, 0.0));
    assert_eq!(hits.get(), 0);
    assert_eq!(signal.listener_count(), 2);

    signal.dispatch(PointerEvent::new(0.0, 0.0));
    assert_eq!(hits.get(), 1);

    added.borrow_mut().clear();
}

#[test]
fn legend_input_while_the_controller_is_borrowed_is_skipped() {
    let signal = ResetSignal::new();
    let chart = bind_stress_chart(&signal, HighlightConfig::default());

    let held = chart.controller();
    chart.click("Low");
    chart.hover_enter("High");
    chart.hover_leave("High");
    let phase_while_held = held.phase();
    drop(held);

    assert_eq!(phase_while_held, HighlightPhase::Neutral);
    assert_eq!(chart.controller().revision(), 0);

    chart.click("Low");
    assert_eq!(chart.controller().state().active(), Some("Low"));
}

#[test]
fn region_edges_count_as_inside() {
    let region = chart_region();

    assert!(region.contains(100.0, 50.0));
    assert!(region.contains(500.0, 350.0));
    assert!(!region.contains(99.9, 200.0));
    assert!(!region.contains(300.0, 350.1));
}
