//! Timer behaviour through the runtime: wall-clock seconds arrive as
//! raw events and countdown completion reaches the notifier service.

use pretty_assertions::assert_eq;

use desktui::core::cmd_executor::CmdExecutor;
use desktui::core::msg::timer::TimerMsg;
use desktui::core::msg::ui::UiMsg;
use desktui::core::msg::Msg;
use desktui::core::raw_msg::RawMsg;
use desktui::core::state::timer::TimerMode;
use desktui::core::state::ui::Tab;
use desktui::core::state::AppState;
use desktui::core::textarea_engine::NoopTextAreaEngine;
use desktui::infrastructure::config::Config;
use desktui::infrastructure::notifier::RecordingNotifier;
use desktui::infrastructure::store::InMemoryStore;
use desktui::integration::runtime::Runtime;

fn create_runtime(state: AppState) -> (Runtime, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let executor = CmdExecutor::new(
        Box::new(InMemoryStore::new()),
        Box::new(notifier.clone()),
        Box::new(NoopTextAreaEngine),
    );
    (Runtime::new_with_executor(state, executor), notifier)
}

fn elapse_seconds(runtime: &mut Runtime, seconds: u64) {
    for _ in 0..seconds {
        runtime.send_raw_msg(RawMsg::SecondElapsed);
    }
    runtime.run_update_cycle().expect("cycle should succeed");
}

#[test]
fn test_countdown_completion_notifies_exactly_once() {
    let (mut runtime, notifier) = create_runtime(AppState::new());

    runtime.send_msg(Msg::Timer(TimerMsg::SwitchMode(TimerMode::Countdown)));
    runtime.send_msg(Msg::Timer(TimerMsg::SetConfiguredMinutes(1)));
    runtime.send_msg(Msg::Timer(TimerMsg::StartStop));
    runtime.run_update_cycle().expect("cycle should succeed");

    elapse_seconds(&mut runtime, 60);

    assert_eq!(
        notifier.delivered(),
        vec![("Timer finished!".to_string(), String::new())]
    );
    assert!(!runtime.state().timer.running);
    assert_eq!(runtime.state().timer.elapsed_or_remaining, 0);

    // Seconds keep passing after completion without re-notifying
    elapse_seconds(&mut runtime, 30);
    assert_eq!(notifier.delivered().len(), 1);
}

#[test]
fn test_stopwatch_accumulates_only_while_running() {
    let (mut runtime, _) = create_runtime(AppState::new());

    elapse_seconds(&mut runtime, 5);
    assert_eq!(runtime.state().timer.elapsed_or_remaining, 0);

    runtime.send_msg(Msg::Timer(TimerMsg::StartStop));
    runtime.run_update_cycle().expect("cycle should succeed");
    elapse_seconds(&mut runtime, 5);
    assert_eq!(runtime.state().timer.elapsed_or_remaining, 5);

    runtime.send_msg(Msg::Timer(TimerMsg::StartStop));
    runtime.run_update_cycle().expect("cycle should succeed");
    elapse_seconds(&mut runtime, 3);
    assert_eq!(runtime.state().timer.elapsed_or_remaining, 5);
}

#[test]
fn test_config_seeds_the_countdown_dial() {
    let config = Config {
        default_countdown_minutes: 10,
        ..Default::default()
    };
    let (mut runtime, _) = create_runtime(AppState::new_with_config(config));

    runtime.send_msg(Msg::Timer(TimerMsg::SwitchMode(TimerMode::Countdown)));
    runtime.run_update_cycle().expect("cycle should succeed");

    assert_eq!(runtime.state().timer.elapsed_or_remaining, 600);
}

#[test]
fn test_timer_ticks_regardless_of_visible_tab() {
    let (mut runtime, _) = create_runtime(AppState::new());

    runtime.send_msg(Msg::Timer(TimerMsg::StartStop));
    runtime.send_msg(Msg::Ui(UiMsg::SelectTab(Tab::Calculator)));
    runtime.run_update_cycle().expect("cycle should succeed");

    elapse_seconds(&mut runtime, 3);

    assert_eq!(runtime.state().ui.active_tab, Tab::Calculator);
    assert_eq!(runtime.state().timer.elapsed_or_remaining, 3);
}

#[test]
fn test_reset_during_countdown_restores_dial_without_notifying() {
    let (mut runtime, notifier) = create_runtime(AppState::new());

    runtime.send_msg(Msg::Timer(TimerMsg::SwitchMode(TimerMode::Countdown)));
    runtime.send_msg(Msg::Timer(TimerMsg::SetConfiguredMinutes(1)));
    runtime.send_msg(Msg::Timer(TimerMsg::StartStop));
    runtime.run_update_cycle().expect("cycle should succeed");

    elapse_seconds(&mut runtime, 10);
    assert_eq!(runtime.state().timer.elapsed_or_remaining, 50);

    runtime.send_msg(Msg::Timer(TimerMsg::Reset));
    runtime.run_update_cycle().expect("cycle should succeed");

    assert_eq!(runtime.state().timer.elapsed_or_remaining, 60);
    assert!(!runtime.state().timer.running);
    assert!(notifier.delivered().is_empty());
}
