use eldlogger::render::text::{text_width, wrap_to_width, wrapped_text_commands};

#[test]
fn long_text_wraps_into_lines_within_the_limit() {
    let text = "Enter name of place you reported and where released from work and where each change of duty occurred.";
    let max = 200.0;
    let size = 12.0;

    let lines = wrap_to_width(text, max, size);

    assert!(lines.len() >= 2, "expected the sentence to wrap");
    for line in &lines {
        assert!(
            text_width(line, size) <= max,
            "line '{line}' exceeds the max width"
        );
    }
}

#[test]
fn wrapping_preserves_every_word() {
    let text = "one two three four five six seven eight nine ten";
    let lines = wrap_to_width(text, 80.0, 12.0);
    let rejoined = lines.join(" ");
    assert_eq!(rejoined.split_whitespace().count(), 10);
}

#[test]
fn explicit_newlines_always_break() {
    let lines = wrap_to_width("Total\nHours", 10_000.0, 12.0);
    assert_eq!(lines, vec!["Total".to_string(), "Hours".to_string()]);
}

#[test]
fn newline_and_width_breaks_combine() {
    let text = "first paragraph that is long enough to wrap\nsecond";
    let lines = wrap_to_width(text, 120.0, 12.0);
    assert!(lines.len() >= 3);
    assert_eq!(lines.last().unwrap(), "second");
}

#[test]
fn single_overwide_word_is_kept_on_its_own_line() {
    let lines = wrap_to_width("incomprehensibilities", 10.0, 12.0);
    assert_eq!(lines, vec!["incomprehensibilities".to_string()]);
}

#[test]
fn wrapped_commands_step_down_by_line_height() {
    let cmds = wrapped_text_commands("Total\nHours", 950.0, 300.0, 100.0, 20.0, 12.0, false);
    assert_eq!(cmds.len(), 2);

    match (&cmds[0], &cmds[1]) {
        (
            eldlogger::render::DrawCommand::Text { x: x1, y: y1, .. },
            eldlogger::render::DrawCommand::Text { x: x2, y: y2, .. },
        ) => {
            assert_eq!(x1, x2);
            assert_eq!(*y2 - *y1, 20.0);
        }
        _ => panic!("expected two text commands"),
    }
}

#[test]
fn width_metric_grows_with_content() {
    assert!(text_width("wide word", 12.0) > text_width("thin", 12.0));
    assert!(text_width("abc", 24.0) > text_width("abc", 12.0));
}
