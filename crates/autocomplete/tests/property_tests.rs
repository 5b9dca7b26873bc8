use autocomplete::filter::{Filter, prefix_match};
use autocomplete::identity::Resolver;
use autocomplete::navigation::Navigation;
use autocomplete::prelude::*;
use autocomplete::selection::toggle;
use proptest::prelude::*;
use std::time::Duration;

/// One user or host event against the widget.
#[derive(Debug, Clone)]
enum Event {
    Type(char),
    Backspace,
    Down,
    Up,
    Enter,
    Esc,
    Hover(usize),
    Tick,
    ReplaceOptions(Vec<String>),
}

fn word() -> impl Strategy<Value = String> {
    "[abAB]{0,4}"
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        prop::char::range('a', 'c').prop_map(Event::Type),
        Just(Event::Backspace),
        Just(Event::Down),
        Just(Event::Up),
        Just(Event::Enter),
        Just(Event::Esc),
        (0usize..12).prop_map(Event::Hover),
        Just(Event::Tick),
        prop::collection::vec(word(), 0..8).prop_map(Event::ReplaceOptions),
    ]
}

proptest! {
    #[test]
    fn test_prefix_filter_sound_and_complete(
        options in prop::collection::vec(word(), 0..20),
        text in "[abAB]{1,3}",
    ) {
        let filtered = Filter::prefix().apply(&options, &text, &Resolver::keyed());
        let lowered = text.to_lowercase();

        // Every candidate matches.
        for &i in &filtered.indices {
            prop_assert!(options[i].to_lowercase().starts_with(&lowered));
        }
        // No match is left out.
        let expected: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, o)| prefix_match(o, &text))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(filtered.indices, expected);
    }

    #[test]
    fn test_single_toggle_twice_restores(
        current in prop::option::of(word()),
        option in word(),
    ) {
        let resolver = Resolver::keyed();
        let start = Selection::Single(current.clone());
        let once = toggle(&start, &option, &resolver);
        let twice = toggle(&once.value, &option, &resolver);

        if current.as_deref() == Some(option.as_str()) {
            prop_assert_eq!(once.value, Selection::Single(None));
            prop_assert_eq!(twice.value, start);
        } else {
            prop_assert_eq!(once.value, Selection::Single(Some(option.clone())));
            prop_assert_eq!(twice.value, Selection::Single(None));
        }
    }

    #[test]
    fn test_multiple_toggle_on_then_off_is_empty(
        options in prop::collection::hash_set("[a-z]{1,5}", 0..10),
    ) {
        let options: Vec<String> = options.into_iter().collect();
        let resolver = Resolver::keyed();

        let mut value = Selection::Multiple(Vec::new());
        for option in &options {
            value = toggle(&value, option, &resolver).value;
        }
        // Appended in toggle order.
        prop_assert_eq!(value.as_multiple().unwrap(), options.as_slice());

        for (removed, option) in options.iter().enumerate() {
            value = toggle(&value, option, &resolver).value;
            prop_assert_eq!(value.as_multiple().unwrap(), &options[removed + 1..]);
        }
        prop_assert!(value.is_empty());
    }

    #[test]
    fn test_navigation_stays_in_bounds(
        steps in prop::collection::vec((0u8..5, 0usize..10), 0..60),
        looping in any::<bool>(),
    ) {
        let mut nav = Navigation::new(looping);
        let mut len = 3;
        for (op, n) in steps {
            match op {
                0 => nav.next(len),
                1 => nav.prev(len),
                2 => {
                    len = n;
                    nav.on_list_replaced(len);
                }
                3 => nav.on_text_change(if n % 2 == 0 { "" } else { "x" }, len),
                _ => {
                    nav.set(n, len);
                }
            }
            prop_assert!(nav.active().is_none_or(|i| i < len));
        }
    }

    #[test]
    fn test_active_index_valid_after_any_events(
        options in prop::collection::vec(word(), 0..8),
        events in prop::collection::vec(event(), 0..40),
    ) {
        let mut ac = Autocomplete::new(options).debounce(Duration::ZERO);
        ac.focus();
        let mut pending = None;

        for event in events {
            let msg = match event {
                Event::Type(c) => Some(Message::new(KeyMsg::from_char(c))),
                Event::Backspace => Some(Message::new(KeyMsg::from_type(KeyType::Backspace))),
                Event::Down => Some(Message::new(KeyMsg::from_type(KeyType::Down))),
                Event::Up => Some(Message::new(KeyMsg::from_type(KeyType::Up))),
                Event::Enter => Some(Message::new(KeyMsg::from_type(KeyType::Enter))),
                Event::Esc => Some(Message::new(KeyMsg::from_type(KeyType::Esc))),
                Event::Hover(index) => Some(Message::new(HoverMsg { index })),
                Event::Tick => pending.take().and_then(Cmd::execute),
                Event::ReplaceOptions(options) => {
                    ac.set_options(options);
                    None
                }
            };
            if let Some(msg) = msg {
                if let Some(cmd) = ac.update(msg) {
                    pending = Some(cmd);
                }
            }

            let len = ac.candidates().len();
            prop_assert!(ac.active_index().is_none_or(|i| i < len));
            prop_assert_eq!(ac.active_option().is_some(), ac.active_index().is_some());
        }
    }
}
