use narrative_rs::api::comparison_layout;
use narrative_rs::core::ContainerRect;
use narrative_rs::interaction::{ComparisonDrag, PointerSample};
use proptest::prelude::*;

proptest! {
    #[test]
    fn split_percent_is_always_clamped(
        client_x in -1.0e6f64..1.0e6,
        left in -5_000.0f64..5_000.0,
        width in 0.001f64..10_000.0,
        jump in any::<bool>()
    ) {
        let rect = Some(ContainerRect::new(left, width));
        let sample = PointerSample::pointer(client_x);
        let mut drag = ComparisonDrag::default();
        if jump {
            drag.jump_and_drag(&sample, rect);
        } else {
            drag.begin_drag();
            drag.update_drag(&sample, rect);
        }
        let percent = drag.split_percent();
        prop_assert!((0.0..=100.0).contains(&percent));
    }

    #[test]
    fn end_drag_keeps_last_split(
        moves in proptest::collection::vec(0.0f64..800.0, 1..32)
    ) {
        let rect = Some(ContainerRect::new(0.0, 800.0));
        let mut drag = ComparisonDrag::default();
        drag.begin_drag();
        for client_x in &moves {
            drag.update_drag(&PointerSample::pointer(*client_x), rect);
        }
        let before_release = drag.split_percent();
        drag.end_drag();

        prop_assert!(!drag.is_dragging());
        prop_assert_eq!(drag.split_percent(), before_release);
        let last = moves[moves.len() - 1];
        prop_assert!((before_release - last / 8.0).abs() <= 1e-9);
    }

    #[test]
    fn layout_clip_never_exceeds_container(
        split in -50.0f64..150.0,
        width in 0.001f64..10_000.0
    ) {
        let layout = comparison_layout(split, ContainerRect::new(0.0, width));
        prop_assert!(layout.validate().is_ok());
        prop_assert_eq!(layout.clip_width_px, layout.handle_left_px);
    }
}
