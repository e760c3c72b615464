use std::cell::{Cell, RefCell};
use std::rc::Rc;

use carta_core::{Color, ImageResource, ImageSource, Key};
use carta_menu::{
    ButtonAction, ButtonParams, ColorInputParams, ColorMode, ColorValue, CustomWidget, ErrorKind,
    ImageParams, InputType, LabelParams, LabelWidgets, LabelWrap, MenuConfig, MenuError, MenuTree,
    MonospaceMeasurer, SelectorItem, SelectorParams, StyleOverrides, TextInputParams,
    ToggleSwitchParams, Widget, WidgetKind, WidgetRequest,
};
use carta_theme::{Align, Margin, Theme};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn tree_with_menu() -> (MenuTree, carta_menu::MenuId) {
    init_tracing();
    let mut tree = MenuTree::new();
    let main = tree.new_menu("Main", Theme::default());
    (tree, main)
}

#[test]
fn omitted_style_keys_use_theme_defaults() {
    let (mut tree, main) = tree_with_menu();
    let theme = Theme::default();

    let mut add = tree.add(main).unwrap();
    let style = add
        .button("Play", ButtonAction::None, ButtonParams::default())
        .unwrap()
        .style()
        .cloned()
        .unwrap();

    assert_eq!(style.align, theme.widget_alignment);
    assert_eq!(style.font.size, theme.widget_font_size);
    assert_eq!(style.font.color, theme.widget_font_color);
    assert_eq!(style.font.name, theme.widget_font);
    assert_eq!(style.padding, theme.widget_padding);
    assert_eq!(style.selection_effect, theme.widget_selection_effect);
}

#[test]
fn supplied_style_keys_override_theme() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let widget = add
        .button(
            "Play",
            ButtonAction::None,
            ButtonParams {
                style: StyleOverrides::new()
                    .align(Align::Left)
                    .font_size(14)
                    .font_color(Color::RED),
                ..Default::default()
            },
        )
        .unwrap();

    let style = widget.style().unwrap();
    assert_eq!(style.align, Align::Left);
    assert_eq!(style.font.size, 14);
    assert_eq!(style.font.color, Color::RED);
}

#[test]
fn unknown_keys_are_rejected_by_closed_kinds() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();

    let err = add
        .label(
            "Title",
            LabelParams {
                style: StyleOverrides::new().extra("volume", json!(3)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, MenuError::UnrecognizedParameter("volume".into()));
    assert_eq!(err.kind(), ErrorKind::UnrecognizedParameter);

    let err = add
        .button(
            "Go",
            ButtonAction::None,
            ButtonParams {
                style: StyleOverrides::new().extra("volume", json!(3)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("volume"));

    assert!(tree.menu(main).unwrap().is_empty());
}

#[test]
fn button_forwards_extras_when_accepted() {
    let (mut tree, main) = tree_with_menu();
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();

    tree.add(main)
        .unwrap()
        .button(
            "Start",
            ButtonAction::callback(move |extras| {
                *sink.borrow_mut() = extras.get("level").cloned();
            }),
            ButtonParams {
                accept_extra_parameters: true,
                style: StyleOverrides::new().extra("level", json!(4)),
                ..Default::default()
            },
        )
        .unwrap();

    tree.apply_selected().unwrap();
    assert_eq!(*seen.borrow(), Some(json!(4)));
}

#[test]
fn invalid_style_value_names_parameter() {
    let (mut tree, main) = tree_with_menu();
    let err = tree
        .add(main)
        .unwrap()
        .button(
            "Play",
            ButtonAction::None,
            ButtonParams {
                style: StyleOverrides::new().font_size(0),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.param(), Some("font_size"));
}

#[test]
fn only_first_selectable_widget_is_selected() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    add.label("Header", LabelParams::default()).unwrap();
    for title in ["One", "Two", "Three"] {
        add.button(title, ButtonAction::None, ButtonParams::default())
            .unwrap();
    }

    let menu = tree.menu(main).unwrap();
    assert_eq!(menu.selected_index(), Some(1));
    let selected: Vec<bool> = menu.widgets().iter().map(Widget::is_selected).collect();
    assert_eq!(selected, vec![false, true, false, false]);
    assert_eq!(menu.stats().added_widgets, 4);
}

#[test]
fn onselect_fires_for_initial_selection() {
    let (mut tree, main) = tree_with_menu();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();

    tree.add(main)
        .unwrap()
        .button(
            "Play",
            ButtonAction::None,
            ButtonParams {
                button_id: "play".into(),
                onselect: Some(Rc::new(move |selected, id: &str| {
                    sink.borrow_mut().push((selected, id.to_string()));
                })),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(*log.borrow(), vec![(true, "play".to_string())]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let params = || ButtonParams {
        button_id: "same".into(),
        ..Default::default()
    };

    add.button("A", ButtonAction::None, params()).unwrap();
    let err = add.button("B", ButtonAction::None, params()).unwrap_err();
    assert_eq!(err, MenuError::DuplicateId("same".into()));
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_eq!(tree.menu(main).unwrap().len(), 1);
}

#[test]
fn button_cannot_open_its_own_menu() {
    let (mut tree, main) = tree_with_menu();
    let err = tree
        .add(main)
        .unwrap()
        .button("Loop", ButtonAction::OpenSubmenu(main), ButtonParams::default())
        .unwrap_err();
    assert_eq!(err, MenuError::RecursiveSubmenu("Main".into()));
}

#[test]
fn transitive_submenu_cycles_are_rejected() {
    let (mut tree, main) = tree_with_menu();
    let a = tree.new_menu("A", Theme::default());
    let b = tree.new_menu("B", Theme::default());

    tree.add(main)
        .unwrap()
        .button("A", ButtonAction::OpenSubmenu(a), ButtonParams::default())
        .unwrap();
    tree.add(a)
        .unwrap()
        .button("B", ButtonAction::OpenSubmenu(b), ButtonParams::default())
        .unwrap();

    let err = tree
        .add(b)
        .unwrap()
        .button("Main", ButtonAction::OpenSubmenu(main), ButtonParams::default())
        .unwrap_err();
    assert_eq!(err, MenuError::RecursiveSubmenu("Main".into()));

    assert!(tree.in_submenu(main, b, true));
    assert!(!tree.in_submenu(main, b, false));
    assert_eq!(tree.menu(main).unwrap().submenus(), &[a]);
    assert!(tree.menu(b).unwrap().is_empty());
}

#[test]
fn back_count_must_be_positive() {
    let (mut tree, main) = tree_with_menu();
    let err = tree
        .add(main)
        .unwrap()
        .button(
            "Back",
            ButtonAction::Back,
            ButtonParams {
                back_count: 0,
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("back_count"));
}

#[test]
fn multiline_label_splits_into_numbered_widgets() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let lines = add
        .label(
            "a\nb",
            LabelParams {
                label_id: "X".into(),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(matches!(lines, LabelWidgets::Lines(_)));
    assert_eq!(lines.ids(), vec!["X+1", "X+2"]);
    let titles: Vec<&str> = lines.as_slice().iter().map(Widget::title).collect();
    assert_eq!(titles, vec!["a", "b"]);
}

#[test]
fn single_line_label_keeps_its_id() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let label = add
        .label(
            "Hello",
            LabelParams {
                label_id: "greeting".into(),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(matches!(label, LabelWidgets::Single(_)));
    assert_eq!(label.ids(), vec!["greeting"]);
    assert!(!label.as_slice()[0].is_selectable());
}

#[test]
fn long_label_wraps_by_char_limit() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let lines = add
        .label(
            "the quick brown fox",
            LabelParams {
                label_id: "fox".into(),
                max_char: LabelWrap::Chars(10),
                ..Default::default()
            },
        )
        .unwrap();
    let titles: Vec<&str> = lines.as_slice().iter().map(Widget::title).collect();
    assert_eq!(titles, vec!["the quick", "brown fox"]);
    assert_eq!(lines.ids(), vec!["fox+1", "fox+2"]);
}

#[test]
fn nested_label_ids_follow_line_ids() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let lines = add
        .label(
            "short\nthe quick brown fox",
            LabelParams {
                label_id: "X".into(),
                max_char: LabelWrap::Chars(10),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(lines.ids(), vec!["X+1", "X+2+1", "X+2+2"]);
}

#[test]
fn label_wraps_to_menu_width() {
    init_tracing();
    let mut tree = MenuTree::new();
    // 6px per char at font size 10, so 60px fits 10 chars
    let main = tree.new_menu_with(
        MenuConfig::new("Main", Theme::default())
            .size(60.0, 400.0)
            .measurer(MonospaceMeasurer::default()),
    );
    let mut add = tree.add(main).unwrap();
    let lines = add
        .label(
            "the quick brown fox",
            LabelParams {
                max_char: LabelWrap::MenuWidth,
                style: StyleOverrides::new().font_size(10),
                ..Default::default()
            },
        )
        .unwrap();
    for widget in lines.as_slice() {
        assert!(widget.title().chars().count() <= 10, "{:?}", widget.title());
    }
    assert_eq!(lines.len(), 2);
}

#[test]
fn wrapped_label_checks_base_id_first() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    add.label(
        "taken",
        LabelParams {
            label_id: "X".into(),
            ..Default::default()
        },
    )
    .unwrap();
    let err = add
        .label(
            "the quick brown fox",
            LabelParams {
                label_id: "X".into(),
                max_char: LabelWrap::Chars(10),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, MenuError::DuplicateId("X".into()));
    assert_eq!(tree.menu(main).unwrap().len(), 1);
}

#[test]
fn password_input_requires_empty_default() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let err = add
        .text_input(
            "Password",
            TextInputParams {
                password: true,
                default: "x".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, MenuError::InvalidState(_)));
    assert_eq!(err.kind(), ErrorKind::State);

    add.text_input(
        "Password",
        TextInputParams {
            password: true,
            ..Default::default()
        },
    )
    .unwrap();
}

#[test]
fn text_input_default_must_match_type() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let err = add
        .text_input(
            "Age",
            TextInputParams {
                input_type: InputType::Integer,
                default: "abc".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("default"));

    let widget = add
        .text_input(
            "Age",
            TextInputParams {
                textinput_id: "age".into(),
                input_type: InputType::Integer,
                default: "42".into(),
                style: StyleOverrides::new().extra("field", json!("age")),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(widget.value(), Some(json!(42)));
    match widget.kind() {
        WidgetKind::TextInput(input) => {
            assert_eq!(input.extras().get("field"), Some(&json!("age")));
            assert_eq!(input.cursor_style().switch_ms, Theme::default().cursor_switch_ms);
        }
        _ => panic!("expected a text input"),
    }
}

#[test]
fn vertical_margin_requires_positive_margin() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();

    let err = add.vertical_margin(0.0, "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.param(), Some("margin"));

    let widget = add.vertical_margin(5.0, "gap").unwrap();
    assert_eq!(widget.style().unwrap().margin, Margin::new(0.0, 5.0));
    assert!(!widget.is_selectable());
}

#[test]
fn image_discards_text_style_keys() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let source = ImageSource::resource(ImageResource::new(vec![0; 4 * 8 * 4], 8, 4));

    let widget = add
        .image(
            source,
            ImageParams {
                angle: 30.0,
                scale: (2.0, 2.0),
                style: StyleOverrides::new()
                    .font_size(99)
                    .shadow(true)
                    .extra("font_color", json!("#FF0000")),
                ..Default::default()
            },
        )
        .unwrap();
    let style = widget.style().unwrap();
    assert_eq!(style.font.size, Theme::default().widget_font_size);
    assert!(!style.shadow.enabled);
    match widget.kind() {
        WidgetKind::Image(image) => {
            assert_eq!(image.angle(), 0.0);
            assert_eq!(image.size(), Some((8.0, 4.0)));
        }
        _ => panic!("expected an image"),
    }

    let err = add
        .image(
            ImageSource::file("logo.png"),
            ImageParams {
                scale: (0.0, 1.0),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("scale"));
}

#[test]
fn selector_validates_items_and_default() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();

    let err = add
        .selector("Empty", Vec::new(), SelectorParams::default())
        .unwrap_err();
    assert_eq!(err.param(), Some("items"));

    let items = vec![SelectorItem::new("easy"), SelectorItem::new("hard")];
    let err = add
        .selector(
            "Difficulty",
            items.clone(),
            SelectorParams {
                default: 2,
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("default"));

    let widget = add
        .selector(
            "Difficulty",
            items,
            SelectorParams {
                default: 1,
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(widget.value(), Some(json!(["hard", 1])));
    assert!(widget.is_selectable());
}

#[test]
fn toggle_switch_default_is_zero_or_one() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let err = add
        .toggle_switch(
            "Sound",
            ToggleSwitchParams {
                default: 2,
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("default"));

    let widget = add
        .toggle_switch(
            "Sound",
            ToggleSwitchParams {
                default: 1,
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(widget.value(), Some(json!(true)));
}

#[test]
fn color_input_checks_separator_and_default() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();

    let err = add
        .color_input(
            "Color",
            ColorMode::Rgb,
            ColorInputParams {
                input_separator: "_".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("input_separator"));

    let err = add
        .color_input(
            "Color",
            ColorMode::Rgb,
            ColorInputParams {
                input_separator: "1".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("input_separator"));

    let err = add
        .color_input(
            "Color",
            ColorMode::Hex,
            ColorInputParams {
                default: Some(ColorValue::Rgb([1, 2, 3])),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.param(), Some("default"));

    let widget = add
        .color_input(
            "Color",
            ColorMode::Hex,
            ColorInputParams {
                default: Some(ColorValue::Hex("#00FF00".into())),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(widget.value(), Some(json!([0, 255, 0])));
}

#[test]
fn color_input_edits_through_keys() {
    let (mut tree, main) = tree_with_menu();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();

    let mut add = tree.add(main).unwrap();
    let widget = add
        .color_input(
            "Color",
            ColorMode::Rgb,
            ColorInputParams {
                onchange: Some(Box::new(move |color, _| sink.borrow_mut().push(color))),
                ..Default::default()
            },
        )
        .unwrap();
    for c in "1,2,3".chars() {
        widget.handle_key(&Key::Char(c));
    }
    assert_eq!(widget.value(), Some(json!([1, 2, 3])));
    assert_eq!(changes.borrow().last(), Some(&Some([1, 2, 3])));
}

#[test]
fn none_widget_holds_user_data() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let widget = add.none_widget("slot").unwrap();
    assert!(!widget.is_selectable());
    match widget.kind_mut() {
        WidgetKind::NoneWidget(none) => {
            none.set_data(json!({"score": 10}));
            assert_eq!(none.data(), Some(&json!({"score": 10})));
        }
        _ => panic!("expected a none widget"),
    }
}

struct Counter {
    count: i64,
}

impl CustomWidget for Counter {
    fn handle_key(&mut self, key: &Key) -> bool {
        if *key == Key::Right {
            self.count += 1;
            return true;
        }
        false
    }

    fn value(&self) -> Option<serde_json::Value> {
        Some(json!(self.count))
    }
}

#[test]
fn generic_widget_is_registered_as_is() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();

    let widget = add
        .generic_widget(Widget::custom("counter", "Count", Counter { count: 0 }), false)
        .unwrap();
    assert!(widget.style().is_none());
    assert!(widget.is_selected());
    assert!(widget.base().controls().is_some());

    let styled = add
        .generic_widget(Widget::custom("styled", "Styled", Counter { count: 0 }), true)
        .unwrap();
    assert!(styled.style().is_some());

    let err = add
        .generic_widget(Widget::custom("counter", "Again", Counter { count: 0 }), false)
        .unwrap_err();
    assert_eq!(err, MenuError::DuplicateId("counter".into()));
}

#[test]
fn generic_widget_rejects_bound_widgets() {
    let (mut tree, main) = tree_with_menu();
    let other = tree.new_menu("Other", Theme::default());

    // Bind a widget to another menu through the binder
    let mut widget = Widget::new("w", "W", WidgetKind::Label);
    carta_menu::binder::attach(&mut widget, tree.menu(other).unwrap()).unwrap();

    let err = tree
        .add(main)
        .unwrap()
        .generic_widget(widget, false)
        .unwrap_err();
    assert_eq!(err, MenuError::AlreadyBound("w".into()));
}

#[test]
fn dispatch_returns_added_ids() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();

    let requests = vec![
        WidgetRequest::Label {
            title: "one\ntwo".into(),
            params: LabelParams {
                label_id: "intro".into(),
                ..Default::default()
            },
        },
        WidgetRequest::Button {
            title: "Quit".into(),
            action: ButtonAction::Exit,
            params: ButtonParams {
                button_id: "quit".into(),
                ..Default::default()
            },
        },
        WidgetRequest::VerticalMargin {
            margin: 10.0,
            margin_id: "gap".into(),
        },
        WidgetRequest::NoneWidget {
            widget_id: "none".into(),
        },
    ];

    let mut ids = Vec::new();
    for request in requests {
        ids.extend(add.add(request).unwrap());
    }
    assert_eq!(ids, vec!["intro+1", "intro+2", "quit", "gap", "none"]);
    assert_eq!(tree.menu(main).unwrap().len(), 5);
}

#[test]
fn insert_builds_overrides_from_strings() {
    let (mut tree, main) = tree_with_menu();
    let style = StyleOverrides::from_pairs([
        ("font_size", json!(18)),
        ("padding", json!([1, 2, 3, 4])),
        ("border_color", json!([10, 20, 30])),
    ])
    .unwrap();

    let mut add = tree.add(main).unwrap();
    let widget = add
        .button(
            "Play",
            ButtonAction::None,
            ButtonParams {
                style,
                ..Default::default()
            },
        )
        .unwrap();
    let applied = widget.style().unwrap();
    assert_eq!(applied.font.size, 18);
    assert_eq!(applied.padding.left, 4.0);
    assert_eq!(applied.border.color, Color::from_rgb8(10, 20, 30));
}

#[test]
fn label_wider_than_menu_per_char_stays_whole() {
    init_tracing();
    let mut tree = MenuTree::new();
    // One 18px char does not fit a 10px menu
    let main = tree.new_menu_with(MenuConfig::new("Main", Theme::default()).size(10.0, 400.0));
    let mut add = tree.add(main).unwrap();
    let label = add
        .label(
            "hello world",
            LabelParams {
                label_id: "x".into(),
                max_char: LabelWrap::MenuWidth,
                style: StyleOverrides::new().font_size(30),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(matches!(label, LabelWidgets::Single(_)));
    assert_eq!(label.ids(), vec!["x"]);
    assert_eq!(label.as_slice()[0].title(), "hello world");
}

#[test]
fn render_runs_placeholder_draw_hooks() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    let widget = add.none_widget("n").unwrap();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    match widget.kind_mut() {
        WidgetKind::NoneWidget(none) => {
            none.set_data(json!("slot"));
            none.set_draw_hook(move |data| {
                assert_eq!(data, Some(&json!("slot")));
                counter.set(counter.get() + 1);
            });
        }
        _ => panic!("expected a none widget"),
    }

    let menu = tree.menu_mut(main).unwrap();
    menu.render();
    assert_eq!(calls.get(), 1);
    menu.render();
    assert_eq!(calls.get(), 2);
}

#[test]
fn complete_color_widens_its_row() {
    let (mut tree, main) = tree_with_menu();
    tree.add(main)
        .unwrap()
        .color_input(
            "Color",
            ColorMode::Rgb,
            ColorInputParams {
                style: StyleOverrides::new().font_size(20),
                ..Default::default()
            },
        )
        .unwrap();

    let row_width = |tree: &mut MenuTree| tree.menu_mut(main).unwrap().render().rows[0].width;
    let empty = row_width(&mut tree);

    for c in "1,2".chars() {
        tree.handle_key(&Key::Char(c)).unwrap();
    }
    let partial = row_width(&mut tree);
    assert!(partial > empty);

    for c in ",3".chars() {
        tree.handle_key(&Key::Char(c)).unwrap();
    }
    let complete = row_width(&mut tree);
    // Two more 12px chars, then a 10px gap and a 60px preview
    assert!((complete - partial - 94.0).abs() < 1e-3, "{partial} -> {complete}");
}

#[test]
fn color_row_keeps_preview_space_without_dynamic_width() {
    let (mut tree, main) = tree_with_menu();
    tree.add(main)
        .unwrap()
        .color_input(
            "Color",
            ColorMode::Hex,
            ColorInputParams {
                dynamic_width: false,
                style: StyleOverrides::new().font_size(20),
                ..Default::default()
            },
        )
        .unwrap();
    let menu = tree.menu_mut(main).unwrap();
    let title_and_hash = 6.0 * 12.0;
    let padding = menu.widgets()[0].style().unwrap().padding.horizontal();
    let width = menu.render().rows[0].width;
    assert!((width - (title_and_hash + 10.0 + 60.0 + padding)).abs() < 1e-3, "{width}");
}

#[test]
fn float_input_rejects_non_finite_default() {
    let (mut tree, main) = tree_with_menu();
    let mut add = tree.add(main).unwrap();
    for default in ["inf", "NaN"] {
        let err = add
            .text_input(
                "Ratio",
                TextInputParams {
                    input_type: InputType::Float,
                    default: default.into(),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.param(), Some("default"));
    }

    let widget = add
        .text_input(
            "Ratio",
            TextInputParams {
                input_type: InputType::Float,
                default: "0.5".into(),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(widget.value(), Some(json!(0.5)));
}

#[test]
fn null_font_background_clears_theme_value() {
    init_tracing();
    let mut tree = MenuTree::new();
    let theme = Theme {
        widget_font_background_color: Some(Color::RED),
        ..Theme::default()
    };
    let main = tree.new_menu("Main", theme);
    let mut add = tree.add(main).unwrap();

    let plain = add
        .button("Plain", ButtonAction::None, ButtonParams::default())
        .unwrap();
    assert_eq!(plain.style().unwrap().font.background, Some(Color::RED));

    let cleared = add
        .button(
            "Cleared",
            ButtonAction::None,
            ButtonParams {
                style: StyleOverrides::from_pairs([("font_background_color", json!(null))]).unwrap(),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(cleared.style().unwrap().font.background, None);
}
