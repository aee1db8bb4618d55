use lifestyle_charts::core::CategorySet;
use lifestyle_charts::highlight::{
    Emphasis, EmphasisTarget, EmphasisUpdate, HighlightConfig, HighlightController,
    HighlightPhase,
};
use proptest::prelude::*;

const KEYS: [&str; 3] = ["Low", "Moderate", "High"];

#[derive(Debug, Clone)]
enum Input {
    HoverEnter(usize),
    HoverLeave(usize),
    Click(usize),
    Reset,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        (0usize..KEYS.len()).prop_map(Input::HoverEnter),
        (0usize..KEYS.len()).prop_map(Input::HoverLeave),
        (0usize..KEYS.len()).prop_map(Input::Click),
        Just(Input::Reset),
    ]
}

#[derive(Default)]
struct Mark {
    emphasis: Option<Emphasis>,
}

impl EmphasisTarget for Mark {
    fn apply_emphasis(&mut self, update: EmphasisUpdate) {
        self.emphasis = Some(update.emphasis);
    }
}

fn drive(inputs: &[Input]) -> HighlightController<Mark> {
    let mut controller =
        HighlightController::new(CategorySet::stress_levels(), HighlightConfig::default());
    for key in KEYS {
        controller
            .register_data_mark(key, Mark::default())
            .expect("data mark");
    }
    for input in inputs {
        match input {
            Input::HoverEnter(index) => controller.on_hover_enter(KEYS[*index]),
            Input::HoverLeave(index) => controller.on_hover_leave(KEYS[*index]),
            Input::Click(index) => controller.on_click(KEYS[*index]),
            Input::Reset => controller.on_external_reset(),
        }
    }
    controller
}

proptest! {
    #[test]
    fn reset_from_any_state_is_neutral(inputs in prop::collection::vec(input(), 0..32)) {
        let mut controller = drive(&inputs);

        controller.on_external_reset();

        prop_assert_eq!(controller.phase(), HighlightPhase::Neutral);
        for key in KEYS {
            prop_assert_eq!(controller.emphasis_for(key), Emphasis::Full);
        }
    }

    #[test]
    fn at_most_one_key_is_full_outside_neutral(inputs in prop::collection::vec(input(), 0..32)) {
        let controller = drive(&inputs);

        let full = KEYS
            .iter()
            .filter(|key| controller.emphasis_for(key) == Emphasis::Full)
            .count();
        if controller.phase() == HighlightPhase::Neutral {
            prop_assert_eq!(full, KEYS.len());
        } else {
            prop_assert_eq!(full, 1);
        }
    }

    #[test]
    fn elements_always_mirror_controller_emphasis(inputs in prop::collection::vec(input(), 0..32)) {
        let controller = drive(&inputs);

        for key in KEYS {
            let expected = Some(controller.emphasis_for(key));
            prop_assert!(controller.elements_for(key).all(|mark| mark.emphasis == expected));
        }
    }

    #[test]
    fn double_click_unpins(
        inputs in prop::collection::vec(input(), 0..16),
        key in 0usize..KEYS.len(),
    ) {
        let mut controller = drive(&inputs);
        let pinned_before = controller.state().active().map(str::to_owned);

        controller.on_click(KEYS[key]);
        controller.on_click(KEYS[key]);

        if pinned_before.as_deref() == Some(KEYS[key]) {
            prop_assert_eq!(controller.state().active(), Some(KEYS[key]));
        } else {
            prop_assert_eq!(controller.state().active(), None);
        }
    }

    #[test]
    fn hover_never_overrides_a_pin(
        inputs in prop::collection::vec(input(), 0..16),
        pinned in 0usize..KEYS.len(),
        hovered in 0usize..KEYS.len(),
    ) {
        let mut controller = drive(&inputs);
        controller.on_external_reset();
        controller.on_click(KEYS[pinned]);

        controller.on_hover_enter(KEYS[hovered]);

        prop_assert_eq!(controller.emphasis_for(KEYS[pinned]), Emphasis::Full);
        if hovered != pinned {
            prop_assert_eq!(controller.emphasis_for(KEYS[hovered]), Emphasis::Dimmed);
        }
    }
}
