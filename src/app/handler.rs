use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::session::letter::TypingReveal;
use crate::session::{Counter, Flag, Page, Progress, Slot};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            if state.tick() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            let was_unlocked = state.session.secret_unlocked();
            let actions = handle_key(state, key);
            if !was_unlocked && state.session.secret_unlocked() {
                state.on_secret_unlocked();
            }
            actions
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }

    // Sidebar navigation, always available
    match key.code {
        KeyCode::F(n @ 1..=3) => {
            state.go_to(Page::ALL[(n - 1) as usize]);
            return vec![];
        }
        KeyCode::PageUp => {
            state.go_to(state.session.page().prev());
            return vec![];
        }
        KeyCode::PageDown => {
            state.go_to(state.session.page().next());
            return vec![];
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
            return vec![];
        }
        KeyCode::Esc => {
            if let Some(reveal) = state.reveal.as_mut() {
                reveal.skip();
            }
            state.celebration = None;
            state.toast = None;
            return vec![];
        }
        _ => {}
    }

    let focus = state.focus;
    if focus.is_text_field() {
        return handle_text_key(state, focus, key);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => activate(state, focus),
        KeyCode::Left => {
            step_picker(state, focus, -1);
            vec![]
        }
        KeyCode::Right => {
            step_picker(state, focus, 1);
            vec![]
        }
        KeyCode::Char('*') if state.session.page() == Page::EasterEggs => {
            let clicks = state.session.bump(Counter::EasterClicks);
            tracing::debug!(clicks, "easter click");
            vec![]
        }
        _ => vec![],
    }
}

fn handle_text_key(state: &mut AppState, field: Control, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Enter {
        return submit_field(state, field);
    }

    let Some(input) = state.input_mut(field) else {
        return vec![];
    };
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char(c) if !ctrl => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return vec![],
    }

    sync_field(state, field);
    vec![]
}

/// Mirror a text field into the session after every edit.
fn sync_field(state: &mut AppState, field: Control) {
    match field {
        Control::NameField => {
            let text = &state.name_input.text;
            if !text.is_empty() && state.session.set_recipient_name(text) {
                tracing::debug!("recipient name accepted");
            }
        }
        Control::SecretCode => {
            state
                .session
                .try_secret_phrase(&state.code_input.text, &state.config.card.secret_phrase);
        }
        Control::MessageField => {
            state.session.message = state.message_input.text.clone();
        }
        _ => {}
    }
}

fn submit_field(state: &mut AppState, field: Control) -> Vec<Action> {
    match field {
        Control::PhotoField => {
            let raw = state.photo_input.take_text();
            let raw = raw.trim();
            if raw.is_empty() {
                return vec![];
            }
            vec![Action::AttachPhoto {
                path: PathBuf::from(raw),
            }]
        }
        _ => {
            state.focus_next();
            vec![]
        }
    }
}

fn step_picker(state: &mut AppState, control: Control, step: isize) {
    let content = &state.config.content;
    match control {
        Control::CouponPicker => {
            state.coupon_cursor = wrap_index(state.coupon_cursor, step, content.coupons.len());
        }
        Control::OrnamentPicker => {
            state.ornament_cursor = wrap_index(state.ornament_cursor, step, content.ornaments.len());
        }
        Control::QuizQuestion(i) => {
            state.session.quiz.cycle(&content.quiz, i, step);
        }
        _ => {}
    }
}

fn wrap_index(current: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + step).rem_euclid(len as isize) as usize
}

fn activate(state: &mut AppState, control: Control) -> Vec<Action> {
    let mut rng = rand::rng();
    match control {
        Control::StartButton => {
            if state.start_enabled() {
                state.go_to(Page::EasterEggs);
            } else {
                state.status_message = Some("Enter a name first".to_string());
            }
        }
        Control::WishButton => {
            state
                .session
                .commit_draw(Slot::Wish, &state.config.content.wishes, &mut rng);
        }
        Control::ComplimentButton => {
            state
                .session
                .commit_draw(Slot::Compliment, &state.config.content.compliments, &mut rng);
        }
        Control::CouponPicker => {
            if let Some(coupon) = state.config.content.coupons.get(state.coupon_cursor) {
                state.session.choose(Slot::Coupon, coupon.clone());
            }
        }
        Control::OrnamentPicker => {
            if let Some(ornament) = state.config.content.ornaments.get(state.ornament_cursor) {
                state.session.choose(Slot::Ornament, ornament.name.clone());
            }
        }
        Control::QuizQuestion(i) => {
            state.session.quiz.cycle(&state.config.content.quiz, i, 1);
        }
        Control::QuizSubmit => {
            let was_unlocked = state.session.secret_unlocked();
            if let Some(outcome) = state.session.submit_quiz(&state.config.content.quiz) {
                // A perfect score that first unlocks secret mode is announced
                // by on_secret_unlocked instead.
                if !outcome.is_perfect() {
                    state.show_toast(format!(
                        "{}/{}, still great 😄 (you can continue anyway)",
                        outcome.score, outcome.total
                    ));
                } else if was_unlocked {
                    state.show_toast(format!("{}/{} 🎉 Bonus unlocked!", outcome.score, outcome.total));
                }
            }
        }
        Control::SparkleButton => {
            let threshold = state.config.eggs.sparkle_threshold;
            match state
                .session
                .advance_on_threshold(Counter::SparkleClicks, threshold, Flag::SecretUnlocked)
            {
                Progress::Counting(n) => tracing::debug!(clicks = n, "sparkle"),
                Progress::JustUnlocked => tracing::info!("sparkle threshold reached"),
                Progress::AlreadyUnlocked => {}
            }
        }
        Control::BackButton => {
            let prev = state.session.page().prev();
            state.go_to(prev);
        }
        Control::ForwardButton => {
            let next = state.session.page().next();
            state.go_to(next);
        }
        Control::RemovePhotoButton => {
            if let Some(photo) = state.session.detach_last_photo() {
                state.status_message = Some(format!("Removed {}", photo.name));
            }
        }
        Control::RevealButton => return reveal(state),
        Control::NameField | Control::SecretCode | Control::PhotoField | Control::MessageField => {}
    }
    vec![]
}

fn reveal(state: &mut AppState) -> Vec<Action> {
    if !state.reveal_enabled() {
        state.status_message = Some("Attach a photo and write your message first".to_string());
        return vec![];
    }

    if state.session.raise(Flag::RevealShown) {
        tracing::info!(photos = state.session.photos().len(), "card revealed");
    }

    let letter = state.snapshot_letter();
    let step = state.config.ui.typing_chars_per_tick;

    let mut balloons = false;
    state
        .session
        .record_one_shot(Flag::BalloonsShown, || balloons = true);
    if balloons {
        state.celebrate(CelebrationKind::Balloons);
    }

    let mut typing = None;
    state.session.record_one_shot(Flag::TypingPlayed, || {
        typing = Some(TypingReveal::new(letter.clone(), step));
    });
    if typing.is_some() {
        state.reveal = typing;
    }

    // KeepsakeSaved is raised by AppState::apply_keepsake once the file exists.
    if state.config.keepsake.enabled && !state.session.flag(Flag::KeepsakeSaved) {
        return vec![Action::SaveKeepsake {
            recipient: state.recipient_display().to_string(),
            letter,
        }];
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Photo;
    use crate::config::AppConfig;

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn focus(state: &mut AppState, control: Control) {
        for _ in 0..state.controls().len() {
            if state.focus == control {
                return;
            }
            state.focus_next();
        }
        panic!("{:?} not on page {:?}", control, state.session.page());
    }

    fn photo(name: &str) -> Photo {
        Photo {
            path: PathBuf::from(format!("/p/{}", name)),
            name: name.to_string(),
            bytes: 1,
        }
    }

    fn ready_for_reveal(cfg: AppConfig) -> AppState {
        let mut state = AppState::new(cfg);
        state.session.set_recipient_name("Sofia");
        state.go_to(Page::Final);
        state.apply_photo(Ok(photo("tree.png")));
        focus(&mut state, Control::MessageField);
        type_text(&mut state, "Thank you for a wonderful year!");
        focus(&mut state, Control::RevealButton);
        state
    }

    #[test]
    fn test_start_button_disabled_until_valid_name() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "42");
        assert_eq!(state.session.recipient_name(), None);

        focus(&mut state, Control::StartButton);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.session.page(), Page::Start);
        assert!(state.status_message.is_some());

        focus(&mut state, Control::NameField);
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        type_text(&mut state, "Sofia");
        assert_eq!(state.session.recipient_name(), Some("Sofia"));

        // An invalid edit keeps the last valid name.
        type_text(&mut state, "2");
        assert_eq!(state.session.recipient_name(), Some("Sofia"));

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus, Control::StartButton);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.session.page(), Page::EasterEggs);
        assert_eq!(state.focus, Control::WishButton);
    }

    #[test]
    fn test_function_keys_navigate_without_reset() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "Anna");
        press(&mut state, KeyCode::F(2));
        focus(&mut state, Control::SparkleButton);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::F(3));
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.session.page(), Page::EasterEggs);
        assert_eq!(state.session.recipient_name(), Some("Anna"));
        assert_eq!(state.session.counter(Counter::SparkleClicks), 1);

        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.session.page(), Page::Start);
        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.session.page(), Page::Start);
    }

    #[test]
    fn test_sparkle_unlocks_on_fifth_press() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to(Page::EasterEggs);
        focus(&mut state, Control::SparkleButton);
        for _ in 0..4 {
            press(&mut state, KeyCode::Enter);
        }
        assert!(!state.session.secret_unlocked());
        assert!(!state.pending_bell);

        press(&mut state, KeyCode::Enter);
        assert!(state.session.secret_unlocked());
        assert!(state.pending_bell);
        assert_eq!(
            state.celebration.map(|c| c.kind),
            Some(CelebrationKind::Confetti)
        );

        state.pending_bell = false;
        press(&mut state, KeyCode::Enter);
        assert!(state.session.secret_unlocked());
        assert!(!state.pending_bell);
    }

    #[test]
    fn test_secret_phrase_typed() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to(Page::EasterEggs);
        focus(&mut state, Control::SecretCode);
        type_text(&mut state, "Up Up Down Down Left Right Left Right B ");
        assert!(!state.session.secret_unlocked());
        type_text(&mut state, "A");
        assert!(state.session.secret_unlocked());
        assert!(state.toast.is_some());
    }

    #[test]
    fn test_quiz_flow() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to(Page::EasterEggs);

        focus(&mut state, Control::QuizSubmit);
        press(&mut state, KeyCode::Enter);
        assert!(!state.session.flag(Flag::QuizDone));

        // Winter, Mulled wine, Time together.
        focus(&mut state, Control::QuizQuestion(0));
        press(&mut state, KeyCode::Left);
        focus(&mut state, Control::QuizQuestion(1));
        press(&mut state, KeyCode::Right);
        focus(&mut state, Control::QuizQuestion(2));
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert!(state.quiz_submit_enabled());

        focus(&mut state, Control::QuizSubmit);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.session.quiz.score(), Some(3));
        assert!(state.session.secret_unlocked());
        assert!(!state.quiz_submit_enabled());
        assert!(state.toast.unwrap().text.starts_with("🎆 Secret mode unlocked!"));
    }

    fn answer_quiz_perfectly(state: &mut AppState) {
        focus(state, Control::QuizQuestion(0));
        press(state, KeyCode::Left);
        focus(state, Control::QuizQuestion(1));
        press(state, KeyCode::Right);
        focus(state, Control::QuizQuestion(2));
        press(state, KeyCode::Right);
        press(state, KeyCode::Right);
        focus(state, Control::QuizSubmit);
        press(state, KeyCode::Enter);
    }

    #[test]
    fn test_perfect_quiz_after_unlock_shows_score() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to(Page::EasterEggs);
        focus(&mut state, Control::SparkleButton);
        for _ in 0..5 {
            press(&mut state, KeyCode::Enter);
        }
        assert!(state.session.secret_unlocked());

        answer_quiz_perfectly(&mut state);
        assert_eq!(state.session.quiz.score(), Some(3));
        assert_eq!(state.toast.unwrap().text, "3/3 🎉 Bonus unlocked!");
    }

    #[test]
    fn test_pickers_are_sticky() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to(Page::EasterEggs);

        press(&mut state, KeyCode::Enter);
        let wish = state.session.drawn(Slot::Wish).map(str::to_string);
        assert!(wish.is_some());
        state.tick();
        assert_eq!(state.session.drawn(Slot::Wish).map(str::to_string), wish);

        focus(&mut state, Control::CouponPicker);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Enter);
        let last = state.config.content.coupons.last().cloned();
        assert_eq!(state.session.drawn(Slot::Coupon).map(str::to_string), last);

        focus(&mut state, Control::OrnamentPicker);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        let second = state.config.content.ornaments[1].message.clone();
        assert_eq!(state.ornament_message(), Some(second.as_str()));
    }

    #[test]
    fn test_easter_clicks_only_on_egg_page() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to(Page::EasterEggs);
        press(&mut state, KeyCode::Char('*'));
        press(&mut state, KeyCode::Char('*'));
        assert_eq!(state.session.counter(Counter::EasterClicks), 2);

        state.go_to(Page::Final);
        focus(&mut state, Control::BackButton);
        press(&mut state, KeyCode::Char('*'));
        assert_eq!(state.session.counter(Counter::EasterClicks), 2);
    }

    #[test]
    fn test_photo_field_emits_attach() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to(Page::Final);
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, " ~/pics/tree.png ");
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::AttachPhoto {
                path: PathBuf::from("~/pics/tree.png")
            }]
        );
        assert!(state.photo_input.text.is_empty());
    }

    #[test]
    fn test_reveal_disabled_without_requirements() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to(Page::Final);
        focus(&mut state, Control::RevealButton);
        press(&mut state, KeyCode::Enter);
        assert!(!state.session.flag(Flag::RevealShown));
        assert!(state.celebration.is_none());
    }

    #[test]
    fn test_reveal_plays_typing_once() {
        let mut state = ready_for_reveal(AppConfig::default());
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert!(state.session.flag(Flag::RevealShown));
        assert!(state.session.flag(Flag::TypingPlayed));
        assert_eq!(
            state.celebration.map(|c| c.kind),
            Some(CelebrationKind::Balloons)
        );
        assert_eq!(state.letter_view(), Some(""));

        state.tick();
        assert_eq!(state.letter_view(), Some("De"));

        // Leaving and coming back shows the letter statically.
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::F(1));
        press(&mut state, KeyCode::F(3));
        let letter = state.letter_view().map(str::to_string).unwrap();
        assert!(letter.starts_with("Dear Sofia,"));
        assert!(letter.contains("Thank you for a wonderful year!"));

        // A second press neither restarts typing nor balloons.
        focus(&mut state, Control::RevealButton);
        press(&mut state, KeyCode::Enter);
        assert!(state.celebration.is_none());
        assert_eq!(state.letter_view(), Some(letter.as_str()));
    }

    #[test]
    fn test_revealed_letter_survives_later_edits() {
        let mut state = ready_for_reveal(AppConfig::default());
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Esc);

        focus(&mut state, Control::MessageField);
        for _ in 0..40 {
            press(&mut state, KeyCode::Backspace);
        }
        focus(&mut state, Control::RemovePhotoButton);
        press(&mut state, KeyCode::Enter);

        assert!(!state.reveal_enabled());
        assert!(state.session.photos().is_empty());
        let letter = state.letter_view().unwrap();
        assert!(letter.contains("Thank you for a wonderful year!"));

        // Revealing again refreshes the letter from valid input only.
        focus(&mut state, Control::RevealButton);
        press(&mut state, KeyCode::Enter);
        assert!(state
            .letter_view()
            .unwrap()
            .contains("Thank you for a wonderful year!"));

        state.apply_photo(Ok(photo("star.png")));
        focus(&mut state, Control::MessageField);
        type_text(&mut state, "See you at the market!");
        focus(&mut state, Control::RevealButton);
        press(&mut state, KeyCode::Enter);
        assert!(state.letter_view().unwrap().contains("See you at the market!"));
    }

    #[test]
    fn test_keepsake_requested_until_saved() {
        let mut cfg = AppConfig::default();
        cfg.keepsake.enabled = true;
        let mut state = ready_for_reveal(cfg);
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::SaveKeepsake { recipient, letter } => {
                assert_eq!(recipient, "Sofia");
                assert!(letter.contains("Thank you for a wonderful year!"));
            }
            other => panic!("unexpected action {:?}", other),
        }

        // A failed write can be retried.
        state.apply_keepsake(Err(anyhow::anyhow!("read-only file system")));
        assert_eq!(press(&mut state, KeyCode::Enter).len(), 1);

        state.apply_keepsake(Ok(Some(PathBuf::from("/cards/Sofia.txt"))));
        assert!(press(&mut state, KeyCode::Enter).is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = AppState::new(AppConfig::default());
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, -1, 4), 3);
        assert_eq!(wrap_index(3, 1, 4), 0);
        assert_eq!(wrap_index(0, 1, 0), 0);
    }
}
