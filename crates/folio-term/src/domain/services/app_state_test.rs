use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::AppState;
use super::AppStateProps;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Link;
use crate::domain::services::events::handle_crossterm;
use crate::domain::services::SessionOptions;
use crate::domain::services::SteadyCadence;

fn app_state<'a>() -> AppState<'a> {
    let mut app_state = AppState::new(AppStateProps {
        cadence: Box::new(SteadyCadence),
        session_options: SessionOptions {
            response_delay_ticks: 0,
            ..SessionOptions::default()
        },
        title: "XdpSam@Portfolio".to_string(),
    });
    app_state.set_rect(Rect::new(0, 0, 40, 10));
    app_state
}

fn type_str(app_state: &mut AppState, text: &str, tx: &mpsc::UnboundedSender<Action>) {
    for c in text.chars() {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let event = handle_crossterm(crossterm::event::Event::Key(key)).unwrap();
        app_state.handle_event(event, tx).unwrap();
    }
}

fn run_until_idle(app_state: &mut AppState, tx: &mpsc::UnboundedSender<Action>) {
    let mut ticks = 0;
    while app_state.session.is_processing() {
        app_state.handle_event(Event::UITick, tx).unwrap();
        ticks += 1;
        assert!(ticks < 100_000, "terminal never settled");
    }
}

#[test]
fn it_closes_on_esc_and_ctrl_c() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    assert!(app_state.handle_event(Event::KeyboardEsc, &tx).unwrap());
    assert!(app_state.handle_event(Event::KeyboardCTRLC, &tx).unwrap());
    assert!(!app_state.handle_event(Event::UITick, &tx).unwrap());
}

#[test]
fn it_submits_typed_input_and_clears_the_field() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    type_str(&mut app_state, "about", &tx);
    assert_eq!(app_state.textarea.lines(), ["about"]);

    app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();
    assert_eq!(app_state.textarea.lines(), [""]);
    assert!(app_state.session.is_processing());
    assert_eq!(
        app_state.session.lines().last().unwrap().text(),
        "XdpSam@Portfolio:~$ about"
    );

    run_until_idle(&mut app_state, &tx);
    assert_eq!(app_state.session.history().entries(), ["about"]);
}

#[test]
fn it_ignores_input_while_processing() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    type_str(&mut app_state, "skills", &tx);
    app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();

    type_str(&mut app_state, "help", &tx);
    app_state
        .handle_event(Event::KeyboardPaste("about".to_string()), &tx)
        .unwrap();
    assert_eq!(app_state.textarea.lines(), [""]);

    let before = app_state.session.lines().len();
    app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();
    assert_eq!(app_state.session.lines().len(), before);
    assert_eq!(app_state.session.history().entries(), ["skills"]);
}

#[test]
fn it_recalls_history_into_the_field() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    for cmd in ["about", "skills"] {
        type_str(&mut app_state, cmd, &tx);
        app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();
        run_until_idle(&mut app_state, &tx);
    }

    app_state.handle_event(Event::HistoryPrevious, &tx).unwrap();
    assert_eq!(app_state.textarea.lines(), ["skills"]);
    app_state.handle_event(Event::HistoryPrevious, &tx).unwrap();
    assert_eq!(app_state.textarea.lines(), ["about"]);
    app_state.handle_event(Event::HistoryNext, &tx).unwrap();
    assert_eq!(app_state.textarea.lines(), ["skills"]);
    app_state.handle_event(Event::HistoryNext, &tx).unwrap();
    assert_eq!(app_state.textarea.lines(), [""]);
}

#[test]
fn it_flattens_pasted_newlines() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    app_state
        .handle_event(Event::KeyboardPaste("cle\nar".to_string()), &tx)
        .unwrap();
    assert_eq!(app_state.textarea.lines(), ["cle ar"]);
}

#[test]
fn it_sends_open_link_actions() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    type_str(&mut app_state, "GitHub", &tx);
    app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();

    match rx.try_recv() {
        Ok(Action::OpenLink(link)) => assert_eq!(link, Link::GitHub),
        other => panic!("expected an open link action, got {other:?}"),
    }

    run_until_idle(&mut app_state, &tx);
    assert!(rx.try_recv().is_err());
}

#[test]
fn it_follows_new_output_unless_scrolled_up() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    app_state.set_rect(Rect::new(0, 0, 40, 5));
    type_str(&mut app_state, "help", &tx);
    app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();
    run_until_idle(&mut app_state, &tx);

    let bottom = app_state.content_height() - 5;
    assert_eq!(app_state.scroll.position(), bottom);

    app_state.handle_event(Event::UIScrollPageUp, &tx).unwrap();
    assert_eq!(app_state.scroll.position(), bottom - 5);
    assert!(!app_state.scroll.is_following());

    type_str(&mut app_state, "skills", &tx);
    app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();
    assert_eq!(app_state.scroll.position(), app_state.content_height() - 5);

    app_state.handle_event(Event::UIScrollUp, &tx).unwrap();
    let held = app_state.scroll.position();
    for _ in 0..50 {
        app_state.handle_event(Event::UITick, &tx).unwrap();
    }
    assert_eq!(app_state.scroll.position(), held);
    assert!(held < app_state.content_height() - 5);
}

#[test]
fn it_wraps_long_lines_into_extra_rows() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    let narrow = app_state.content_height();
    app_state.set_rect(Rect::new(0, 0, 200, 10));
    assert!(app_state.content_height() <= narrow);

    app_state.set_rect(Rect::new(0, 0, 10, 10));
    type_str(&mut app_state, "xyz123", &tx);
    app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();
    run_until_idle(&mut app_state, &tx);
    assert!(app_state.content_height() > app_state.session.lines().len());
    assert_eq!(app_state.cursor_line(), None);
}

#[test]
fn it_counts_rows_broken_at_word_boundaries() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app_state = app_state();
    app_state.set_rect(Rect::new(0, 0, 29, 7));
    type_str(&mut app_state, "about", &tx);
    app_state.handle_event(Event::KeyboardEnter, &tx).unwrap();
    run_until_idle(&mut app_state, &tx);

    let char_wrapped: usize = app_state
        .session
        .lines()
        .iter()
        .map(|line| line.len().div_ceil(29).max(1))
        .sum();
    assert!(app_state.content_height() > char_wrapped);
    assert_eq!(
        app_state.scroll.position() + 7,
        app_state.content_height()
    );

    app_state.handle_event(Event::UIScrollPageUp, &tx).unwrap();
    app_state.handle_event(Event::UIScrollPageDown, &tx).unwrap();
    assert_eq!(
        app_state.scroll.position() + 7,
        app_state.content_height()
    );
}

#[test]
fn it_keeps_running_when_the_link_request_cannot_be_sent() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let mut app_state = app_state();
    type_str(&mut app_state, "linkedin", &tx);

    assert!(!app_state.handle_event(Event::KeyboardEnter, &tx).unwrap());
    assert_eq!(app_state.textarea.lines(), [""]);
    run_until_idle(&mut app_state, &tx);
    assert_eq!(
        app_state.session.lines().last().unwrap().text(),
        Link::LinkedIn.confirmation()
    );
}
