// Host-side tests for the agent log, app operations and upload progress.

use hgif_core::*;
use std::cell::RefCell;
use std::rc::Rc;

fn make_app() -> AppState<String> {
    AppState::new(
        DemoConfig::default(),
        DeviceKind::Desktop,
        Box::new(|| "09:30:00".to_string()),
    )
}

#[test]
fn twenty_one_logs_keep_twenty_newest_first() {
    let mut agent = Agent::with_clock(
        DeviceKind::Laptop.capability(),
        100.0,
        20,
        Box::new(|| "00:00:01".to_string()),
    );
    for i in 0..21 {
        agent.log(format!("entry {i}"), Severity::Info);
    }
    let book = agent.log_book();
    assert_eq!(book.len(), 20);
    let msgs: Vec<_> = book.iter().map(|e| e.message.clone()).collect();
    assert_eq!(msgs.first().map(String::as_str), Some("entry 20"));
    assert_eq!(msgs.last().map(String::as_str), Some("entry 1"));
    assert!(!msgs.iter().any(|m| m == "entry 0"));
    for pair in msgs.windows(2) {
        let a: usize = pair[0].trim_start_matches("entry ").parse().unwrap();
        let b: usize = pair[1].trim_start_matches("entry ").parse().unwrap();
        assert_eq!(a, b + 1, "entries must stay most-recent-first");
    }
}

#[test]
fn log_never_exceeds_configured_capacity() {
    let mut app = make_app();
    for i in 0..100 {
        app.set_bandwidth(i as f64);
        assert!(app.agent.log_book().len() <= 20);
    }
}

#[test]
fn progress_stops_exactly_at_one_hundred() {
    let mut app = make_app();
    app.image_decoded(UploadedImage::new("cat.png".to_string(), 64.0, 48.0));
    assert!(app.playback.is_processing());
    assert_eq!(app.playback.progress_percent(), 0);

    let mut prev = 0;
    let mut ticks = 0;
    loop {
        let step = app.advance_processing();
        ticks += 1;
        let now = app.playback.progress_percent();
        assert!(now > prev, "progress must increase monotonically");
        assert!(now <= 100);
        prev = now;
        match step {
            ProgressStep::Advanced(p) => {
                assert!(p < 100);
                assert!(app.playback.is_processing(), "finished too early at {p}");
            }
            ProgressStep::Finished => {
                assert_eq!(now, 100);
                assert!(!app.playback.is_processing());
                break;
            }
            ProgressStep::Idle => panic!("job went idle before finishing"),
        }
    }
    assert_eq!(ticks, 50);
    // further ticks are ignored, no second completion entry
    assert_eq!(app.advance_processing(), ProgressStep::Idle);
    let completions = app
        .agent
        .log_book()
        .iter()
        .filter(|e| e.message.starts_with("AI upscaling complete"))
        .count();
    assert_eq!(completions, 1);
    assert!(app.can_export());
}

#[test]
fn new_upload_restarts_processing() {
    let mut app = make_app();
    app.image_decoded(UploadedImage::new("a.png".to_string(), 10.0, 10.0));
    for _ in 0..10 {
        app.advance_processing();
    }
    assert_eq!(app.playback.progress_percent(), 20);
    app.image_decoded(UploadedImage::new("b.png".to_string(), 10.0, 10.0));
    assert_eq!(app.playback.progress_percent(), 0);
    assert!(app.playback.is_processing());
}

#[test]
fn presentation_layer_observes_log_events() {
    let mut app = make_app();
    let rendered = Rc::new(RefCell::new(String::new()));
    let sink = rendered.clone();
    app.agent.subscribe(move |_entry, book| {
        let html: Vec<String> = book
            .iter()
            .map(|e| format!("{}:{}", e.severity, e.message))
            .collect();
        *sink.borrow_mut() = html.join("|");
    });
    app.set_auto_mode(true);
    let _ = app.begin_upload(Some("video/mp4"));
    assert_eq!(
        *rendered.borrow(),
        "error:Error: unsupported file type|info:Auto AI Control: ON"
    );
}

#[test]
fn missing_file_is_rejected() {
    let mut app = make_app();
    assert_eq!(app.begin_upload(None), Err(UploadError::MissingFile));
    assert_eq!(app.begin_upload(Some("image/gif")), Ok(()));
}

#[test]
fn decode_failure_is_logged_as_error() {
    let mut app = make_app();
    app.image_decode_failed();
    let latest = app.agent.log_book().latest().cloned();
    assert_eq!(latest.map(|e| e.severity), Some(Severity::Error));
    assert!(app.playback.uploaded_image.is_none());
}
