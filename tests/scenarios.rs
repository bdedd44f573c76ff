//! End-to-end dashboard scenarios on a paused tokio clock

use bogor_nexus::panels::LoadState;
use bogor_nexus::simulation::Resource;
use bogor_nexus::{
    DashboardData, MockDataSource, Panel, PanelSnapshot, Shell, SimulationSettings, Transition,
};
use std::time::Duration;

fn seeded() -> SimulationSettings {
    SimulationSettings {
        seed: Some(2024),
        ..Default::default()
    }
}

fn shell() -> Shell {
    Shell::new(MockDataSource::default(), seeded())
}

/// Let tasks woken at the current instant run
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_loads_after_one_second() {
    let shell = shell();

    tokio::time::sleep(Duration::from_millis(999)).await;
    let PanelSnapshot::Dashboard(state) = shell.snapshot() else {
        panic!("expected dashboard");
    };
    assert!(state.is_loading());
    assert!(state.cards().is_empty());

    tokio::time::sleep(Duration::from_millis(1)).await;
    settle().await;
    let PanelSnapshot::Dashboard(state) = shell.snapshot() else {
        panic!("expected dashboard");
    };
    assert_eq!(state.load, LoadState::Ready(DashboardData::default()));

    let data = state.data().unwrap();
    assert_eq!(data.traffic.congestion, 65);
    assert_eq!(data.environment.air_quality, 42);
    assert_eq!(data.utilities.power_status, 98);
    assert_eq!(data.population.density, 74);
    assert_eq!(state.cards()[0].value, "65%");

    // The fetch task is done once the record lands
    assert_eq!(shell.live_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_each_menu_entry_activates_exactly_one_panel() {
    let mut shell = shell();

    for panel in [Panel::Analytics, Panel::Neural, Panel::System, Panel::Dashboard] {
        shell.select(panel).await;

        let active: Vec<_> = shell
            .menu()
            .filter(|(_, active)| *active)
            .map(|(item, _)| item.id)
            .collect();
        assert_eq!(active, vec![panel]);
        assert_eq!(shell.snapshot().panel(), panel);
        assert_eq!(shell.mounted().panel(), panel);
    }
}

#[tokio::test(start_paused = true)]
async fn test_switching_tears_down_old_timers() {
    let mut shell = shell();
    assert_eq!(shell.live_timers(), 1);

    shell.select(Panel::Neural).await;
    assert_eq!(shell.live_timers(), 4);

    shell.select(Panel::System).await;
    assert_eq!(shell.live_timers(), 2);

    shell.select(Panel::Analytics).await;
    assert_eq!(shell.live_timers(), 0);

    shell.select(Panel::Neural).await;
    let transition = shell.select(Panel::Neural).await;
    assert_eq!(transition, Transition::Unchanged(Panel::Neural));
    assert_eq!(shell.live_timers(), 4);

    shell.close().await;
}

#[tokio::test(start_paused = true)]
async fn test_leaving_dashboard_before_load_cancels_fetch() {
    let mut shell = shell();
    tokio::time::sleep(Duration::from_millis(500)).await;

    shell.select(Panel::Analytics).await;
    assert_eq!(shell.live_timers(), 0);

    // A fresh dashboard starts loading from scratch
    shell.select(Panel::Dashboard).await;
    tokio::time::sleep(Duration::from_millis(600)).await;
    let PanelSnapshot::Dashboard(state) = shell.snapshot() else {
        panic!("expected dashboard");
    };
    assert!(state.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_system_resources_stay_in_bounds() {
    let mut shell = shell();
    shell.select(Panel::System).await;

    for _ in 0..30 {
        tokio::time::sleep(Duration::from_secs(2)).await;
        let PanelSnapshot::System(state) = shell.snapshot() else {
            panic!("expected system");
        };
        for resource in Resource::ALL {
            let value = state.resources.readings().get(resource);
            assert!(
                resource.jitter().contains(value),
                "{} out of bounds: {}",
                resource.label(),
                value
            );
        }
    }

    tokio::time::sleep(Duration::from_millis(100)).await;
    let PanelSnapshot::System(state) = shell.snapshot() else {
        panic!("expected system");
    };
    // Eight scripted messages, then the log timer stops itself
    assert_eq!(state.log.lines().len(), 8);
    assert_eq!(shell.live_timers(), 1);
    assert_eq!(state.uptime.display(), "0h 1m");
}

#[tokio::test(start_paused = true)]
async fn test_neural_stream_is_capped() {
    let mut shell = shell();
    shell.select(Panel::Neural).await;

    tokio::time::sleep(Duration::from_millis(10_050)).await;
    let PanelSnapshot::Neural(state) = shell.snapshot() else {
        panic!("expected neural");
    };
    assert_eq!(state.stream.samples().len(), 20);
    assert!(state.stream.samples().iter().all(|v| (0.0..=100.0).contains(v)));
    assert_eq!(state.training.value(), 25);
    assert_eq!(state.predictions.value(), 100);
}

#[tokio::test(start_paused = true)]
async fn test_same_seed_same_stream() {
    async fn stream_after(ms: u64) -> Vec<f64> {
        let mut shell = shell();
        shell.select(Panel::Neural).await;
        tokio::time::sleep(Duration::from_millis(ms)).await;
        let PanelSnapshot::Neural(state) = shell.snapshot() else {
            panic!("expected neural");
        };
        shell.close().await;
        state.stream.samples()
    }

    assert_eq!(stream_after(1050).await, stream_after(1050).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dashboard_capture_never_sees_loading() {
    let latency = Duration::from_millis(20);

    for _ in 0..50 {
        let source = MockDataSource::new(DashboardData::default(), latency);
        let mut shell = Shell::new(source, seeded());

        let snapshot = shell.capture(Panel::Dashboard, latency).await;
        shell.close().await;

        let PanelSnapshot::Dashboard(state) = snapshot else {
            panic!("expected dashboard");
        };
        assert!(!state.is_loading());
        assert_eq!(state.cards().len(), 6);
    }
}
