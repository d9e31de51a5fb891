use std::{sync::Arc, time::Duration};

use gaming_timer::{
    state::{AppState, ModePolicy, TimerEvent, TimerModel, TimerState},
    tasks::{exhaustion_alert_task, title_watcher_task},
};
use tokio::{sync::broadcast::error::TryRecvError, time::sleep};

const TICK: Duration = Duration::from_secs(1);

fn mount(state: TimerState) -> Arc<AppState> {
    Arc::new(AppState::with_model(
        TimerModel::from_state(state, ModePolicy::Guarded),
        TICK,
    ))
}

#[tokio::test(start_paused = true)]
async fn five_ticks_then_pause() {
    let state = mount(TimerState::default());

    state.start().unwrap();
    sleep(Duration::from_millis(5500)).await;
    state.pause().unwrap();

    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.work_seconds, 5);
    assert_eq!(snapshot.total_work_seconds, 5);
    assert_eq!(snapshot.gaming_tenths, 10);
    assert!(!snapshot.is_running);
}

#[tokio::test(start_paused = true)]
async fn first_tick_waits_a_full_period() {
    let state = mount(TimerState::default());

    state.start().unwrap();
    sleep(Duration::from_millis(900)).await;
    assert_eq!(state.snapshot().unwrap().work_seconds, 0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(state.snapshot().unwrap().work_seconds, 1);
}

#[tokio::test(start_paused = true)]
async fn no_ticks_after_pause() {
    let state = mount(TimerState::default());

    state.start().unwrap();
    sleep(Duration::from_millis(2500)).await;
    state.pause().unwrap();
    assert!(!state.is_ticking().unwrap());

    sleep(Duration::from_secs(10)).await;
    assert_eq!(state.snapshot().unwrap().work_seconds, 2);

    // Resuming starts a fresh period
    state.start().unwrap();
    sleep(Duration::from_millis(1500)).await;
    assert_eq!(state.snapshot().unwrap().work_seconds, 3);
}

#[tokio::test(start_paused = true)]
async fn quick_pause_and_resume_does_not_double_tick() {
    let state = mount(TimerState::default());

    state.start().unwrap();
    sleep(Duration::from_millis(500)).await;
    state.pause().unwrap();
    state.start().unwrap();

    sleep(Duration::from_millis(3200)).await;
    assert_eq!(state.snapshot().unwrap().work_seconds, 3);
}

#[tokio::test(start_paused = true)]
async fn gaming_budget_exhausts_with_one_event() {
    let state = mount(TimerState {
        gaming_tenths: 30,
        ..TimerState::default()
    });
    let mut events = state.subscribe_events();

    assert!(state.toggle_gaming_mode().unwrap().applied);
    state.start().unwrap();

    sleep(Duration::from_millis(2500)).await;
    assert_eq!(state.snapshot().unwrap().gaming_tenths, 10);
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

    sleep(Duration::from_secs(1)).await;
    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.gaming_tenths, 0);
    assert!(!snapshot.is_running);
    assert!(!state.is_ticking().unwrap());
    assert_eq!(
        events.try_recv().unwrap(),
        TimerEvent::GamingTimeExhausted {
            total_work_seconds: 0
        }
    );

    sleep(Duration::from_secs(5)).await;
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test(start_paused = true)]
async fn toggle_is_ignored_while_ticking() {
    let state = mount(TimerState::default());

    state.start().unwrap();
    sleep(Duration::from_millis(1500)).await;

    let result = state.toggle_gaming_mode().unwrap();
    assert!(!result.applied);
    assert!(!result.state.is_gaming_mode);

    sleep(Duration::from_secs(1)).await;
    assert_eq!(state.snapshot().unwrap().work_seconds, 2);
}

#[tokio::test(start_paused = true)]
async fn reset_work_while_running_stops_ticks() {
    let state = mount(TimerState::default());

    state.start().unwrap();
    sleep(Duration::from_millis(3500)).await;

    let result = state.reset_work().unwrap();
    assert_eq!(result.state.work_seconds, 0);
    assert_eq!(result.state.total_work_seconds, 3);
    assert!(!result.state.is_running);
    assert!(!result.state.is_gaming_mode);

    sleep(Duration::from_secs(3)).await;
    assert_eq!(state.snapshot().unwrap().work_seconds, 0);
}

#[tokio::test(start_paused = true)]
async fn reset_gaming_while_gaming_stops_ticks() {
    let state = mount(TimerState {
        gaming_tenths: 50,
        ..TimerState::default()
    });

    state.toggle_gaming_mode().unwrap();
    state.start().unwrap();
    sleep(Duration::from_millis(1500)).await;
    assert_eq!(state.snapshot().unwrap().gaming_tenths, 40);

    let result = state.reset_gaming().unwrap();
    assert!(result.applied);
    assert!(!result.state.is_running);
    assert!(!result.state.is_gaming_mode);
    assert!(!state.is_ticking().unwrap());

    sleep(Duration::from_secs(2)).await;
    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.work_seconds, 0);
    assert_eq!(snapshot.gaming_tenths, 0);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_ticker() {
    let state = mount(TimerState::default());

    state.start().unwrap();
    sleep(Duration::from_millis(1500)).await;
    state.shutdown().unwrap();

    sleep(Duration::from_secs(5)).await;
    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.work_seconds, 1);
    assert!(!snapshot.is_running);
}

#[tokio::test(start_paused = true)]
async fn title_follows_work_time() {
    let state = mount(TimerState::default());
    tokio::spawn(title_watcher_task(Arc::clone(&state)));

    state.start().unwrap();
    sleep(Duration::from_millis(3500)).await;

    assert_eq!(state.get_title().unwrap(), "00:03 | Max Productivity");
}

#[tokio::test(start_paused = true)]
async fn alert_task_records_exhaustion() {
    let state = mount(TimerState {
        gaming_tenths: 12,
        ..TimerState::default()
    });
    tokio::spawn(exhaustion_alert_task(Arc::clone(&state)));
    // Let the alert task subscribe before anything happens
    tokio::task::yield_now().await;

    state.toggle_gaming_mode().unwrap();
    state.start().unwrap();
    assert!(state.get_last_alert().is_none());

    sleep(Duration::from_millis(2500)).await;
    let (event, _) = state.get_last_alert().unwrap();
    assert_eq!(
        event,
        TimerEvent::GamingTimeExhausted {
            total_work_seconds: 0
        }
    );
}
