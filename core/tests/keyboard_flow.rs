// core/tests/keyboard_flow.rs
//
// Integration tests for the Keyboard state machine.
//
// Tests cover:
// - Group select/cancel round trips leave the buffer untouched (all 9 groups)
// - select_group + select_char appends exactly the table character (all slots)
// - Suggestion commit replaces only the in-progress word
// - Stale suggestion responses never populate a superseded selection
// - Draw and camera cycles always return to Normal
// - Multi-mode composition flows

use gridboard_core::{chars_for_group, Keyboard, Mode, Point, CHAR_GROUPS};

#[test]
fn group_cancel_round_trip_for_every_group() {
    for i in 0..CHAR_GROUPS.len() {
        let mut kb = Keyboard::new();
        kb.select_group(i).expect("valid group");
        assert_eq!(kb.mode(), Mode::GroupSelected(i));
        kb.cancel_group();
        assert_eq!(kb.mode(), Mode::Normal);
        assert!(kb.buffer().is_empty());
        assert!(kb.suggestions().is_empty());
    }
}

#[test]
fn every_group_slot_appends_the_table_character() {
    for (i, group) in CHAR_GROUPS.iter().enumerate() {
        for (j, expected) in group.chars().enumerate() {
            let mut kb = Keyboard::new();
            kb.select_group(i).expect("valid group");
            assert!(kb.select_char(j));
            assert_eq!(kb.buffer(), expected.to_string(), "group {i} slot {j}");
            assert_eq!(kb.mode(), Mode::Normal);
        }
    }
}

#[test]
fn out_of_range_slot_keeps_the_selection() {
    let mut kb = Keyboard::new();
    kb.select_group(7).expect("valid group"); // "vb", two slots
    assert!(!kb.select_char(2));
    assert_eq!(kb.mode(), Mode::GroupSelected(7));
    assert!(kb.buffer().is_empty());
}

#[test]
fn late_response_for_earlier_selection_is_discarded() {
    let mut kb = Keyboard::new();
    let req0 = kb.select_group(0).expect("ticket");
    // The user re-selects before the response for group 0 resolves.
    kb.cancel_group();
    let req1 = kb.select_group(1).expect("ticket");

    assert!(!kb.apply_suggestions(&req0, vec!["went".into()]));
    assert_eq!(kb.mode(), Mode::GroupSelected(1));
    assert!(kb.suggestions().is_empty());

    assert!(kb.apply_suggestions(&req1, vec!["rust".into(), "true".into()]));
    assert_eq!(kb.suggestions().len(), 2);
}

#[test]
fn response_after_char_commit_is_discarded() {
    let mut kb = Keyboard::new();
    let req = kb.select_group(0).expect("ticket");
    kb.select_char(0);
    assert_eq!(kb.buffer(), "q");
    assert!(!kb.apply_suggestions(&req, vec!["quick".into()]));
    assert!(kb.suggestions().is_empty());
}

#[test]
fn composing_a_word_letter_by_letter() {
    // "hi" = group 4 slot 2 ('h'), group 2 slot 0 ('i').
    let mut kb = Keyboard::new();
    kb.select_group(4).unwrap();
    kb.select_char(2);
    kb.select_group(2).unwrap();
    kb.select_char(0);
    assert_eq!(kb.buffer(), "hi");
    kb.add_space();
    assert_eq!(kb.buffer(), "hi ");
}

#[test]
fn suggestion_flow_mid_phrase() {
    let mut kb = Keyboard::new();
    // Compose "w" (group 0 slot 1), then take a suggestion for it.
    kb.select_group(0).unwrap();
    kb.select_char(1);
    let req = kb.select_group(0).expect("ticket");
    assert_eq!(req.prefix, "w");
    kb.apply_suggestions(&req, vec!["we".into(), "what".into()]);
    kb.select_suggestion(1);
    assert_eq!(kb.buffer(), "what ");

    // The next selection's prefix is empty: the buffer ends with a space.
    let req = kb.select_group(3).expect("ticket");
    assert_eq!(req.prefix, "");
}

#[test]
fn draw_then_cam_then_text() {
    let mut kb = Keyboard::new();

    kb.enter_draw();
    kb.pen_down(Point::new(0.0, 30.0));
    kb.pen_move(Point::new(15.0, 0.0));
    kb.pen_move(Point::new(30.0, 30.0));
    assert_eq!(kb.finish_stroke(), Some('🙁'));
    assert_eq!(kb.mode(), Mode::Normal);

    kb.enter_cam();
    kb.commit_emoji('🤓');
    assert_eq!(kb.mode(), Mode::Normal);

    kb.select_group(8).unwrap();
    kb.select_char(1);
    assert_eq!(kb.buffer(), "🙁🤓m");
}

#[test]
fn backspace_walks_back_through_mixed_content() {
    let mut kb = Keyboard::new();
    kb.select_group(0).unwrap();
    kb.select_char(0);
    kb.enter_draw();
    kb.commit_emoji('👉');
    assert_eq!(kb.buffer(), "q👉");
    kb.delete_char();
    assert_eq!(kb.buffer(), "q");
    kb.delete_char();
    assert!(kb.buffer().is_empty());
    kb.delete_char();
    assert!(kb.buffer().is_empty());
}

#[test]
fn non_hub_modes_only_reach_normal() {
    // From GroupSelected, draw/cam entries are rejected.
    let mut kb = Keyboard::new();
    kb.select_group(5).unwrap();
    assert!(!kb.enter_draw());
    assert!(!kb.enter_cam());
    assert_eq!(kb.mode(), Mode::GroupSelected(5));
    kb.cancel_group();

    // From EmojiDraw, group selection is rejected.
    kb.enter_draw();
    assert!(kb.select_group(0).is_none());
    assert!(!kb.enter_cam());
    assert_eq!(kb.mode(), Mode::EmojiDraw);
    kb.exit_draw();

    // From EmojiCam, everything except exit/commit is rejected.
    kb.enter_cam();
    assert!(kb.select_group(0).is_none());
    assert!(!kb.enter_draw());
    assert_eq!(kb.mode(), Mode::EmojiCam);
    kb.exit_cam();
    assert_eq!(kb.mode(), Mode::Normal);
}

#[test]
fn group_table_is_reachable_through_public_lookup() {
    for i in 0..CHAR_GROUPS.len() {
        assert_eq!(chars_for_group(i), Some(CHAR_GROUPS[i]));
    }
    assert_eq!(chars_for_group(CHAR_GROUPS.len()), None);
}
