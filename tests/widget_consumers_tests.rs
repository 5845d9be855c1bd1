use approx::assert_relative_eq;
use narrative_rs::api::{
    NarrativeConfig, NarrativeEngine, background_presence, hud_readout, marker_emphasis,
    project_chart,
};
use narrative_rs::core::{ScrollMetrics, Viewport, YearRecord, YearSeries};
use narrative_rs::render::{
    ChartSeriesKind, Color, MarkerEmphasis, NEUTRAL_MARKER_RADIUS_PX, NullRenderer,
    PULSING_MARKER_RADIUS_PX, PULSING_RING_PERIOD_MS, PULSING_RING_RADIUS_RANGE_PX,
};

fn series() -> YearSeries {
    YearSeries::from_records(vec![
        YearRecord::new(2014, 7, 600),
        YearRecord::new(2015, 4, 500),
        YearRecord::new(2016, 9, 400),
    ])
}

fn build_engine() -> NarrativeEngine<NullRenderer> {
    let mut engine =
        NarrativeEngine::new(NullRenderer::default(), NarrativeConfig::default()).expect("engine init");
    engine.set_records(series().records().to_vec());
    engine
}

#[test]
fn exactly_one_background_layer_is_opaque() {
    let mut engine = build_engine();
    engine.on_scroll(ScrollMetrics::new(500.0, 500.0, 1_500.0));

    let layers = engine.background_layers();
    assert_eq!(layers.len(), 3);
    let visible: Vec<i32> = layers
        .iter()
        .filter(|layer| layer.is_visible())
        .map(|layer| layer.year)
        .collect();
    assert_eq!(visible, vec![2015]);
    assert!(layers.iter().all(|layer| layer.transition_ms == 700));
    assert_eq!(layers[1].image_path, "2014.png");
}

#[test]
fn presence_map_has_fixed_keys() {
    let presence = background_presence(&series(), None);
    assert_eq!(presence.keys().copied().collect::<Vec<_>>(), vec![2014, 2015, 2016]);
    assert!(presence.values().all(|present| !present));

    let presence = background_presence(&series(), Some(2016));
    assert_eq!(presence.get(&2016), Some(&true));
    assert_eq!(presence.get(&2014), Some(&false));
}

#[test]
fn hud_shows_active_record_fields() {
    let hud = hud_readout(&series(), Some(2016));
    assert_eq!(hud.year, Some(2016));
    assert_eq!(hud.deaths_text(), "9");
    assert_eq!(hud.injured_text(), "400");
}

#[test]
fn hud_renders_blank_fields_for_unknown_year() {
    let hud = hud_readout(&series(), Some(1999));
    assert_eq!(hud.year_text(), "1999");
    assert_eq!(hud.deaths_text(), "");
    assert_eq!(hud.injured_text(), "");

    let blank = hud_readout(&YearSeries::empty(), None);
    assert!(blank.is_blank());
    assert_eq!(blank.year_text(), "");
}

#[test]
fn only_active_year_marker_pulses() {
    assert_eq!(marker_emphasis(2015, Some(2015)), MarkerEmphasis::Pulsing);
    assert_eq!(marker_emphasis(2014, Some(2015)), MarkerEmphasis::Neutral);
    assert_eq!(marker_emphasis(2014, None), MarkerEmphasis::Neutral);

    let projection =
        project_chart(&series(), Some(2015), Viewport::new(660, 200), 30.0, 50.0).expect("projection");
    let pulsing: Vec<(i32, ChartSeriesKind)> = projection
        .emphasized()
        .map(|marker| (marker.year, marker.series))
        .collect();
    assert_eq!(
        pulsing,
        vec![(2015, ChartSeriesKind::Injured), (2015, ChartSeriesKind::Deaths)]
    );
    assert_eq!(projection.markers.len(), 6);
    assert_eq!(projection.segments.len(), 4);
}

#[test]
fn marker_styling_follows_emphasis() {
    let projection =
        project_chart(&series(), Some(2016), Viewport::new(660, 200), 30.0, 50.0).expect("projection");

    for marker in &projection.markers {
        match marker.emphasis {
            MarkerEmphasis::Pulsing => {
                assert_eq!(marker.year, 2016);
                assert_relative_eq!(marker.radius_px(), PULSING_MARKER_RADIUS_PX);
                assert_eq!(marker.fill_color(), marker.series.stroke_color());

                let ring = marker.pulse_ring().expect("pulsing marker has a ring");
                assert_relative_eq!(ring.radius_from_px, PULSING_RING_RADIUS_RANGE_PX.0);
                assert_relative_eq!(ring.radius_to_px, PULSING_RING_RADIUS_RANGE_PX.1);
                assert_eq!(ring.period_ms, PULSING_RING_PERIOD_MS);
                assert_eq!(ring.color, marker.series.stroke_color());
            }
            MarkerEmphasis::Neutral => {
                assert_relative_eq!(marker.radius_px(), NEUTRAL_MARKER_RADIUS_PX);
                assert_eq!(marker.fill_color(), Color::rgb8(0x55, 0x55, 0x55));
                assert_eq!(marker.pulse_ring(), None);
            }
        }
    }
}

#[test]
fn series_colors_match_legend() {
    assert_eq!(
        ChartSeriesKind::Injured.stroke_color(),
        Color::rgb8(0x3b, 0x82, 0xf6)
    );
    assert_eq!(
        ChartSeriesKind::Deaths.stroke_color(),
        Color::rgb8(0xd9, 0x04, 0x29)
    );
    assert_relative_eq!(PULSING_MARKER_RADIUS_PX, 4.0);
    assert_relative_eq!(NEUTRAL_MARKER_RADIUS_PX, 2.0);
}

#[test]
fn chart_projection_spreads_years_and_pads_values() {
    let projection =
        project_chart(&series(), None, Viewport::new(660, 200), 30.0, 50.0).expect("projection");
    let injured: Vec<_> = projection
        .markers
        .iter()
        .filter(|marker| marker.series == ChartSeriesKind::Injured)
        .collect();

    assert_relative_eq!(injured[0].x, 30.0);
    assert_relative_eq!(injured[1].x, 330.0);
    assert_relative_eq!(injured[2].x, 630.0);

    // Shared domain is [4 - 50, 600 + 50] = [-46, 650]; 600 sits 50 below the top.
    let expected_y = 200.0 - (600.0 + 46.0) / 696.0 * 200.0;
    assert_relative_eq!(injured[0].y, expected_y, epsilon = 1e-9);
    assert!(injured[2].y > injured[0].y);
}

#[test]
fn single_year_chart_is_centered() {
    let single = YearSeries::from_records(vec![YearRecord::new(2020, 3, 3)]);
    let projection =
        project_chart(&single, Some(2020), Viewport::new(400, 100), 30.0, 0.0).expect("projection");
    assert!(projection.segments.is_empty());
    assert_relative_eq!(projection.markers[0].x, 200.0);
    assert_relative_eq!(projection.markers[0].y, 50.0);
}

#[test]
fn chart_rejects_viewport_narrower_than_padding() {
    assert!(project_chart(&series(), None, Viewport::new(60, 100), 30.0, 50.0).is_err());
    assert!(project_chart(&series(), None, Viewport::new(0, 100), 0.0, 50.0).is_err());
}

#[test]
fn empty_series_projects_nothing() {
    let projection = project_chart(&YearSeries::empty(), None, Viewport::new(400, 100), 30.0, 50.0)
        .expect("projection");
    assert!(projection.markers.is_empty());
    assert!(projection.segments.is_empty());
}

#[test]
fn consumers_follow_the_same_active_year() {
    let mut engine = build_engine();
    engine.set_chart_viewport(Viewport::new(660, 200));
    engine.on_scroll(ScrollMetrics::new(1_000.0, 500.0, 1_500.0));

    let frame = engine.build_frame();
    assert_eq!(frame.active_year, Some(2016));
    assert_eq!(frame.hud.year, Some(2016));
    assert_eq!(frame.visible_background_count(), 1);
    assert!(
        frame
            .background
            .iter()
            .any(|layer| layer.year == 2016 && layer.is_visible())
    );
    assert!(
        frame
            .chart_markers
            .iter()
            .filter(|marker| marker.emphasis == MarkerEmphasis::Pulsing)
            .all(|marker| marker.year == 2016)
    );
    assert_eq!(engine.chart_marker_emphasis(2016), MarkerEmphasis::Pulsing);
}
