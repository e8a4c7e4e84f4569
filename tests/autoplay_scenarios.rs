use approx::assert_relative_eq;
use cardslide::{
    ClockPhase, FrameScheduler, IndexChange, IntervalScheduler, ManualTime, PauseReasons,
    RecordingSink, RenderEvent, Slider, SliderConfig,
};

fn frame_slider(cards: usize, dwell_ms: u32) -> (Slider<RecordingSink, ManualTime>, ManualTime) {
    let time = ManualTime::new();
    let config = SliderConfig {
        card_count: cards,
        dwell_ms,
        ..SliderConfig::default()
    };
    let slider = Slider::new(config, time.clone(), FrameScheduler::new(), RecordingSink::new())
        .expect("valid slider");
    (slider, time)
}

/// Advances time in frame-sized steps, pumping after each one.
fn run_for(slider: &mut Slider<RecordingSink, ManualTime>, time: &ManualTime, ms: f64) {
    let mut remaining = ms;
    while remaining > 0.0 {
        let step = remaining.min(10.0);
        time.advance(step);
        slider.pump();
        remaining -= step;
    }
}

#[test]
fn next_saturates_at_last_card() {
    for n in [0usize, 1, 5, 13, 14, 30] {
        let (mut slider, _) = frame_slider(14, 5_000);
        for _ in 0..n {
            slider.next();
        }
        assert_eq!(slider.current_index(), n.min(13));
    }
}

#[test]
fn previous_on_first_card_changes_nothing() {
    let (mut slider, time) = frame_slider(14, 5_000);
    time.advance(1_200.0);
    slider.previous();
    assert_eq!(slider.current_index(), 0);
    assert_eq!(slider.render_sink().index_changes().count(), 1);
    assert_relative_eq!(slider.elapsed_ms(), 1_200.0);
}

#[test]
fn repeated_go_to_last_card_is_noop() {
    let (mut slider, _) = frame_slider(14, 5_000);
    slider.go_to(13);
    let renders = slider.render_sink().events().len();
    slider.go_to(13);
    assert_eq!(slider.render_sink().events().len(), renders);
    assert_eq!(slider.clock_phase(), ClockPhase::Stopped);
}

#[test]
fn autoplay_runs_everywhere_but_the_last_card() {
    let (mut slider, time) = frame_slider(6, 100);
    for target in [3, 5, 0, 4, 5, 2, 1] {
        slider.go_to(target);
        slider.pause_for_interaction(PauseReasons::HOVER);
        let phase = slider.clock_phase();
        if target == 5 {
            assert_eq!(phase, ClockPhase::Stopped);
        } else {
            assert_eq!(phase, ClockPhase::Paused);
        }
        slider.resume_from_interaction(PauseReasons::HOVER);
        if target == 5 {
            assert_eq!(slider.clock_phase(), ClockPhase::Stopped);
        } else {
            assert_eq!(slider.clock_phase(), ClockPhase::Running);
        }
        time.advance(10.0);
    }
}

#[test]
fn pause_preserves_partial_dwell() {
    let (mut slider, time) = frame_slider(14, 5_000);
    run_for(&mut slider, &time, 2_000.0);
    slider.pause_for_interaction(PauseReasons::HOVER);

    run_for(&mut slider, &time, 10_000.0);
    assert_eq!(slider.current_index(), 0);
    assert_relative_eq!(slider.elapsed_ms(), 2_000.0);

    slider.resume_from_interaction(PauseReasons::HOVER);
    run_for(&mut slider, &time, 2_990.0);
    assert_eq!(slider.current_index(), 0);
    run_for(&mut slider, &time, 10.0);
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn restart_zeroes_progress() {
    let (mut slider, time) = frame_slider(5, 1_000);
    run_for(&mut slider, &time, 700.0);
    slider.go_to(3);
    assert_relative_eq!(slider.elapsed_ms(), 0.0);
    slider.previous();
    assert_eq!(slider.current_index(), 2);
    assert_relative_eq!(slider.elapsed_ms(), 0.0);
    assert_eq!(slider.clock_phase(), ClockPhase::Running);
}

#[test]
fn three_card_walkthrough() {
    let (mut slider, time) = frame_slider(3, 100);

    run_for(&mut slider, &time, 100.0);
    assert_eq!(slider.current_index(), 1);

    slider.go_to(0);
    assert_eq!(slider.current_index(), 0);
    assert_eq!(slider.clock_phase(), ClockPhase::Running);

    run_for(&mut slider, &time, 100.0);
    assert_eq!(slider.current_index(), 1);

    run_for(&mut slider, &time, 100.0);
    assert_eq!(slider.current_index(), 2);
    assert_eq!(slider.clock_phase(), ClockPhase::Stopped);

    run_for(&mut slider, &time, 500.0);
    assert_eq!(slider.current_index(), 2);

    let changes: Vec<IndexChange> = slider.render_sink().index_changes().collect();
    let path: Vec<(Option<usize>, usize)> = changes.iter().map(|c| (c.prior, c.current)).collect();
    assert_eq!(
        path,
        vec![(None, 0), (Some(0), 1), (Some(1), 0), (Some(0), 1), (Some(1), 2)]
    );
}

#[test]
fn previous_while_paused_on_first_card_keeps_pause() {
    let (mut slider, time) = frame_slider(3, 100);
    run_for(&mut slider, &time, 30.0);
    slider.pause_for_interaction(PauseReasons::POINTER_HOLD);
    slider.previous();
    assert_eq!(slider.current_index(), 0);
    assert_eq!(slider.clock_phase(), ClockPhase::Paused);
    assert_relative_eq!(slider.elapsed_ms(), 30.0);
}

#[test]
fn overlapping_pause_sources() {
    let (mut slider, time) = frame_slider(3, 100);
    slider.pause_for_interaction(PauseReasons::HOVER);
    slider.pause_for_interaction(PauseReasons::POINTER_HOLD);

    slider.resume_from_interaction(PauseReasons::POINTER_HOLD);
    assert_eq!(slider.clock_phase(), ClockPhase::Paused);
    run_for(&mut slider, &time, 300.0);
    assert_eq!(slider.current_index(), 0);

    slider.resume_from_interaction(PauseReasons::HOVER);
    assert_eq!(slider.clock_phase(), ClockPhase::Running);
    run_for(&mut slider, &time, 100.0);
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn hidden_tab_outlasts_hover() {
    let (mut slider, time) = frame_slider(3, 100);
    slider.on_visibility_change(true);
    slider.pause_for_interaction(PauseReasons::HOVER);
    slider.resume_from_interaction(PauseReasons::HOVER);
    run_for(&mut slider, &time, 250.0);
    assert_eq!(slider.current_index(), 0);

    slider.on_visibility_change(false);
    run_for(&mut slider, &time, 100.0);
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn progress_never_overshoots() {
    let (mut slider, time) = frame_slider(4, 100);
    // Uneven frame steps that skip past the dwell boundary
    for step in [33.0, 33.0, 33.0, 50.0, 70.0, 45.0] {
        time.advance(step);
        slider.pump();
    }
    let fractions: Vec<f64> = slider
        .render_sink()
        .events()
        .iter()
        .filter_map(|event| match event {
            RenderEvent::Progress(p) => Some(p.fraction),
            RenderEvent::Index(_) => None,
        })
        .collect();
    assert!(!fractions.is_empty());
    assert!(fractions.iter().all(|f| (0.0..=1.0).contains(f)));
    assert_eq!(fractions.iter().filter(|f| **f >= 1.0).count(), slider.current_index());
}

#[test]
fn interval_scheduler_matches_frame_timing() {
    let time = ManualTime::new();
    let config = SliderConfig {
        card_count: 3,
        dwell_ms: 100,
        ..SliderConfig::default()
    };
    let mut slider = Slider::new(
        config,
        time.clone(),
        IntervalScheduler::new(25),
        RecordingSink::new(),
    )
    .expect("valid slider");

    for _ in 0..3 {
        time.advance(25.0);
        slider.pump();
    }
    assert_eq!(slider.current_index(), 0);
    time.advance(25.0);
    slider.pump();
    assert_eq!(slider.current_index(), 1);

    // Pause mid-dwell: elapsed time carries over just like with frame ticks
    time.advance(50.0);
    slider.pump();
    slider.on_visibility_change(true);
    time.advance(1_000.0);
    slider.pump();
    slider.on_visibility_change(false);
    assert_relative_eq!(slider.elapsed_ms(), 50.0);
    for _ in 0..2 {
        time.advance(25.0);
        slider.pump();
    }
    assert_eq!(slider.current_index(), 2);
}
