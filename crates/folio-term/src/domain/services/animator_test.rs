use super::TickOutcome;
use super::TypingAnimator;
use crate::domain::models::Line;
use crate::domain::models::OutputLine;
use crate::domain::services::Cadence;
use crate::domain::services::JitterCadence;
use crate::domain::services::SteadyCadence;

/// Replays a fixed advance/hesitate pattern.
struct ScriptedCadence {
    script: Vec<bool>,
    pos: usize,
}

impl Cadence for ScriptedCadence {
    fn should_advance(&mut self) -> bool {
        let res = self.script[self.pos % self.script.len()];
        self.pos += 1;
        res
    }
}

fn queued(texts: &[&str]) -> (Vec<Line>, TypingAnimator) {
    let mut animator = TypingAnimator::default();
    let buffer: Vec<Line> = texts
        .iter()
        .map(|text| Line::pending(OutputLine::new(text)))
        .collect();
    for i in 0..buffer.len() {
        animator.enqueue(i);
    }
    (buffer, animator)
}

#[test]
fn it_is_idle_with_an_empty_queue() {
    let mut animator = TypingAnimator::default();
    let mut buffer: Vec<Line> = vec![];
    assert_eq!(
        animator.tick(&mut buffer, &mut SteadyCadence),
        TickOutcome::Idle
    );
}

#[test]
fn it_reveals_one_char_per_tick_then_settles() {
    let (mut buffer, mut animator) = queued(&["hi"]);
    let mut cadence = SteadyCadence;

    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Advanced);
    assert_eq!(buffer[0].visible(), "h");
    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Advanced);
    assert_eq!(buffer[0].visible(), "hi");
    assert!(!buffer[0].is_settled());
    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Settled);
    assert!(buffer[0].is_settled());
    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Idle);
}

#[test]
fn it_never_reveals_two_lines_at_once() {
    let (mut buffer, mut animator) = queued(&["abc", "de", "", "f"]);
    let mut cadence = SteadyCadence;

    while animator.tick(&mut buffer, &mut cadence) != TickOutcome::Idle {
        let revealing: Vec<usize> = buffer
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_settled() && line.revealed() > 0)
            .map(|(i, _)| i)
            .collect();
        assert!(revealing.len() <= 1, "revealing {revealing:?}");

        if let Some(&head) = revealing.first() {
            assert!(buffer[..head].iter().all(|line| line.is_settled()));
            assert!(buffer[head + 1..].iter().all(|line| line.revealed() == 0));
        }
    }

    assert!(buffer.iter().all(|line| line.is_settled()));
}

#[test]
fn it_starts_the_next_line_on_the_following_tick() {
    let (mut buffer, mut animator) = queued(&["a", "b"]);
    let mut cadence = SteadyCadence;

    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Advanced);
    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Settled);
    assert_eq!(buffer[1].revealed(), 0);
    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Advanced);
    assert_eq!(buffer[1].visible(), "b");
}

#[test]
fn it_holds_position_when_the_cadence_hesitates() {
    let (mut buffer, mut animator) = queued(&["xyz"]);
    let mut cadence = ScriptedCadence {
        script: vec![true, false, false, true],
        pos: 0,
    };

    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Advanced);
    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Hesitated);
    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Hesitated);
    assert_eq!(buffer[0].visible(), "x");
    assert_eq!(animator.tick(&mut buffer, &mut cadence), TickOutcome::Advanced);
    assert_eq!(buffer[0].visible(), "xy");
}

#[test]
fn it_produces_identical_text_for_any_cadence() {
    let texts = [
        "Technical Constellation:",
        "Languages: Python ⭐⭐⭐⭐⭐ | JavaScript ⭐⭐⭐⭐",
        "",
        "📧 Email: Swankhede228@gmail.com",
    ];

    for seed in [1, 17, 9001] {
        let (mut buffer, mut animator) = queued(&texts);
        let mut cadence = JitterCadence::new(seed, 30);
        let mut guard = 0;
        while animator.tick(&mut buffer, &mut cadence) != TickOutcome::Idle {
            guard += 1;
            assert!(guard < 10_000);
        }

        let revealed: Vec<&str> = buffer.iter().map(|line| line.visible()).collect();
        assert_eq!(revealed, texts);
    }
}

#[test]
fn it_drops_indices_missing_from_the_buffer() {
    let mut animator = TypingAnimator::default();
    animator.enqueue(3);
    let mut buffer: Vec<Line> = vec![];
    assert_eq!(
        animator.tick(&mut buffer, &mut SteadyCadence),
        TickOutcome::Settled
    );
    assert!(animator.is_idle());
}

#[test]
fn it_forgets_the_queue_on_reset() {
    let (_, mut animator) = queued(&["a", "b"]);
    assert_eq!(animator.pending(), 2);
    animator.reset();
    assert!(animator.is_idle());
}
