use std::fs;
use std::sync::mpsc;
use std::time::Duration;

use folio::core::action::{Action, Effect, update};
use folio::core::animator::TypewriterAnimator;
use folio::core::config::{FolioConfig, load_config, resolve};
use folio::core::content::{PortfolioContent, SectionKind, ids};
use folio::core::counter::{COUNTER_DURATION, CounterAnimation, FRAME_INTERVAL};
use folio::core::host::{CounterSink, ElementId, PreferenceStore};
use folio::core::scroll::{CLASS_ACTIVE, CLASS_HIDDEN, CLASS_REVEALED, CLASS_SCROLLED, ScrollThresholds};
use folio::core::state::Page;
use folio::core::theme::{FilePreferenceStore, Theme};
use folio::core::typewriter::TypewriterTimings;
use folio::tui::layout::{NAVBAR_ROWS, PageLayout, TerminalViewport};

// ============================================================================
// Helper Functions
// ============================================================================

const WIDTH: u16 = 80;
const ROWS: u16 = 24;

fn page() -> Page {
    Page::new(
        PortfolioContent::default(),
        ScrollThresholds::default(),
        COUNTER_DURATION,
        FRAME_INTERVAL,
        Theme::Dark,
    )
}

/// Lay the page out and feed one viewport event at `offset` rows.
fn sync_at(page: &mut Page, offset: u16) -> folio::core::scroll::ViewportReport {
    let layout = PageLayout::measure(page, WIDTH, ROWS);
    page.sync_viewport(&TerminalViewport::new(&layout, offset, ROWS))
}

/// Forwards counter frames the way the terminal host does.
#[derive(Clone)]
struct ChannelSink(mpsc::Sender<Action>);

impl CounterSink for ChannelSink {
    fn render(&mut self, id: &ElementId, text: &str) -> bool {
        self.0
            .send(Action::CounterFrame {
                id: id.clone(),
                text: text.to_string(),
            })
            .is_ok()
    }
}

fn drain(page: &mut Page, rx: &mpsc::Receiver<Action>) -> usize {
    let mut applied = 0;
    while let Ok(action) = rx.try_recv() {
        assert_eq!(update(page, action), Effect::None);
        applied += 1;
    }
    applied
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_scrolling_to_the_bottom_reveals_everything_and_counts_once() {
    let mut page = page();
    let layout = PageLayout::measure(&page, WIDTH, ROWS);
    let max = layout.total_height - ROWS;

    let mut starts = 0;
    for offset in 0..=max {
        let report = page.sync_viewport(&TerminalViewport::new(&layout, offset, ROWS));
        if let Some(counters) = report.counters {
            starts += 1;
            assert_eq!(counters.len(), page.content.stats.len());
        }
    }

    assert_eq!(starts, 1);
    assert!(page.synchronizer.stats_animated());
    for id in page.content.bindings().reveal {
        assert!(page.elements.has_class(&id, CLASS_REVEALED), "{id} never revealed");
    }

    // Scrolling back up neither hides anything nor restarts the counters.
    let report = page.sync_viewport(&TerminalViewport::new(&layout, 0, ROWS));
    assert!(report.counters.is_none());
    assert!(page.elements.has_class(&ids::element(ids::CONTACT_CONTENT), CLASS_REVEALED));
}

#[test]
fn test_nothing_below_the_fold_is_revealed_on_load() {
    let mut page = page();
    let report = sync_at(&mut page, 0);

    assert!(report.newly_revealed.is_empty());
    assert!(report.counters.is_none());
    assert!(!page.elements.has_class(&ids::section_title("about"), CLASS_REVEALED));
}

#[test]
fn test_navbar_follows_scroll_direction() {
    let mut page = page();
    let navbar = ids::element(ids::NAVBAR);

    sync_at(&mut page, 0);
    assert!(!page.elements.has_class(&navbar, CLASS_SCROLLED));

    // 4 rows = 64px, past the 50px line but under the 200px hide line
    sync_at(&mut page, 4);
    assert!(page.elements.has_class(&navbar, CLASS_SCROLLED));
    assert!(!page.elements.has_class(&navbar, CLASS_HIDDEN));

    sync_at(&mut page, 20);
    assert!(page.elements.has_class(&navbar, CLASS_HIDDEN));

    sync_at(&mut page, 18);
    assert!(!page.elements.has_class(&navbar, CLASS_HIDDEN));
    assert!(page.elements.has_class(&navbar, CLASS_SCROLLED));
}

#[test]
fn test_section_jump_target_activates_its_link() {
    let mut page = page();
    sync_at(&mut page, 0);
    assert!(page.elements.has_class(&ids::nav_link("home"), CLASS_ACTIVE));

    let layout = PageLayout::measure(&page, WIDTH, ROWS);
    let projects = layout.section(SectionKind::Projects).unwrap();
    sync_at(&mut page, projects.top - NAVBAR_ROWS);

    assert_eq!(page.synchronizer.active_section(), Some(&SectionKind::Projects.element()));
    assert!(page.elements.has_class(&ids::nav_link("projects"), CLASS_ACTIVE));
    assert!(!page.elements.has_class(&ids::nav_link("home"), CLASS_ACTIVE));
}

#[test]
fn test_hero_parallax_tracks_scroll_inside_first_screen() {
    let mut page = page();
    let hero = ids::element(ids::HERO_VISUAL);

    sync_at(&mut page, 10);
    assert!((page.elements.transform_y(&hero) - 48.0).abs() < 1e-9);

    // Past one viewport height the last offset is left alone.
    sync_at(&mut page, ROWS + 5);
    assert!((page.elements.transform_y(&hero) - 48.0).abs() < 1e-9);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_reflows_page_and_staggers_cards() {
    let mut page = page();
    let before = PageLayout::measure(&page, WIDTH, ROWS);

    update(&mut page, Action::SelectFilter(ids::filter("ai")));
    let after = PageLayout::measure(&page, WIDTH, ROWS);

    assert!(after.rows_of(&ids::project(0)).is_none());
    assert!(after.rows_of(&ids::project(2)).is_some());
    assert!(after.total_height < before.total_height);
    assert_eq!(page.status_message, "Showing 2 projects (ai)");

    // Stagger is by position among all cards: 200ms and 500ms.
    let applied = page.filter_applied_at.unwrap();
    assert!(!page.card_faded_in(&ids::project(2), applied + Duration::from_millis(150)));
    assert!(page.card_faded_in(&ids::project(2), applied + Duration::from_millis(200)));
    assert!(page.fades_pending(applied + Duration::from_millis(400)));
    assert!(!page.fades_pending(applied + Duration::from_millis(500)));
}

#[test]
fn test_cycling_filters_wraps_back_to_all() {
    let mut page = page();
    // all, web, mobile, ai
    for _ in 0..4 {
        update(&mut page, Action::CycleFilter(1));
    }
    assert_eq!(page.filter.active_filter(), "all");
    assert!((0..page.content.projects.len()).all(|i| page.elements.is_displayed(&ids::project(i))));

    update(&mut page, Action::CycleFilter(-1));
    assert_eq!(page.filter.active_filter(), "ai");
}

// ============================================================================
// Timed animations
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_counters_run_to_their_targets() {
    let mut page = page();
    let layout = PageLayout::measure(&page, WIDTH, ROWS);
    let (tx, rx) = mpsc::channel();
    let mut counters = CounterAnimation::new();

    let started = (0..=layout.total_height - ROWS)
        .find_map(|offset| {
            page.sync_viewport(&TerminalViewport::new(&layout, offset, ROWS))
                .counters
        })
        .expect("stats block never came into view");
    counters.start(started, FRAME_INTERVAL, ChannelSink(tx));

    tokio::time::sleep(COUNTER_DURATION + Duration::from_millis(200)).await;
    assert!(drain(&mut page, &rx) > 0);

    for (i, stat) in page.content.stats.iter().enumerate() {
        assert_eq!(page.elements.text(&ids::stat(i)), Some(stat.count.to_string().as_str()));
    }
    counters.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_slower_counter_frames_still_finish_on_time() {
    let mut config = FolioConfig::default();
    config.counters.frame_ms = Some(32);
    let resolved = resolve(&config, None).unwrap();
    let mut page = Page::new(
        resolved.content,
        resolved.thresholds,
        resolved.counter_duration,
        resolved.counter_frame,
        Theme::Dark,
    );
    let layout = PageLayout::measure(&page, WIDTH, ROWS);
    let (tx, rx) = mpsc::channel();
    let mut counters = CounterAnimation::new();

    let started = (0..=layout.total_height - ROWS)
        .find_map(|offset| {
            page.sync_viewport(&TerminalViewport::new(&layout, offset, ROWS))
                .counters
        })
        .expect("stats block never came into view");
    counters.start(started, resolved.counter_frame, ChannelSink(tx));

    // 63 frames of 32ms: the last one lands just before 2000ms.
    tokio::time::sleep(resolved.counter_duration + Duration::from_millis(100)).await;
    drain(&mut page, &rx);

    for (i, stat) in page.content.stats.iter().enumerate() {
        assert_eq!(page.elements.text(&ids::stat(i)), Some(stat.count.to_string().as_str()));
    }
    assert!(!counters.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_frames_land_on_the_page() {
    let mut page = page();
    let (tx, rx) = mpsc::channel();
    let mut animator = TypewriterAnimator::new();
    animator
        .start(
            vec!["Go".to_string()],
            Duration::from_millis(1000),
            TypewriterTimings::default(),
            move |text: &str| tx.send(Action::TypewriterFrame(text.to_string())).is_ok(),
        )
        .unwrap();

    // t=1000 "G", t=1100 "Go"
    tokio::time::sleep(Duration::from_millis(1150)).await;
    assert_eq!(drain(&mut page, &rx), 2);
    assert_eq!(page.elements.text(&ids::element(ids::TYPEWRITER)), Some("Go"));

    animator.stop();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(drain(&mut page, &rx), 0);
}

// ============================================================================
// Theme and config
// ============================================================================

#[test]
fn test_theme_toggle_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut page = page();
    let mut prefs = FilePreferenceStore::open(path.clone());
    match update(&mut page, Action::ToggleTheme) {
        Effect::PersistTheme(theme) => theme.persist(&mut prefs),
        other => panic!("expected PersistTheme, got {other:?}"),
    }
    assert_eq!(page.theme, Theme::Light);

    let reopened = FilePreferenceStore::open(path);
    assert_eq!(reopened.get("theme").as_deref(), Some("light"));
    assert_eq!(Theme::resolve(&reopened, true), Theme::Light);
}

#[test]
fn test_config_file_drives_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[profile]
name = "Sam Lee"

[[projects]]
title = "Atlas"
category = "web"

[[projects]]
title = "Beacon"
category = "iot"
"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    let resolved = resolve(&config, Some(Theme::Light)).unwrap();
    assert_eq!(resolved.theme, Some(Theme::Light));

    let page = Page::new(
        resolved.content,
        resolved.thresholds,
        resolved.counter_duration,
        resolved.counter_frame,
        Theme::Light,
    );
    let filters: Vec<&str> = page.filter.buttons().iter().map(|b| b.filter.as_str()).collect();
    assert_eq!(filters, vec!["all", "web", "iot"]);
    assert_eq!(page.content.name, "Sam Lee");

    let layout = PageLayout::measure(&page, WIDTH, ROWS);
    assert!(layout.rows_of(&ids::project(1)).is_some());
    assert!(layout.rows_of(&ids::project(2)).is_none());
}
