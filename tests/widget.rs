//! End-to-end tests driving the widget through drawn frames and input events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};
use todo_cards::form::FormField;
use todo_cards::ui::{App, Flow, Focus, Target};
use todo_cards::{
    initialize, ControlKind, ControlRef, PageConfig, SeedCard, SeedStatus, Status, Theme, Tone,
};

fn app(config: &PageConfig) -> (App, Terminal<TestBackend>) {
    let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    (App::new(initialize(config), Theme::dark()), terminal)
}

fn screen(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal.draw(|f| app.draw(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_event(key(KeyCode::Char(ch)));
    }
}

fn click_at(app: &mut App, target: Target) {
    let area = app.target_area(target).expect("target drawn");
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: area.x,
        row: area.y,
        modifiers: KeyModifiers::NONE,
    }));
}

fn badge_label(app: &App, index: usize) -> String {
    let holder = app.controller.holder();
    let id = holder.id_at(index).unwrap();
    holder.get(id).unwrap().badge().label().to_string()
}

#[test]
fn buy_milk_scenario() {
    let (mut app, mut terminal) = app(&PageConfig::default());

    type_text(&mut app, "Buy milk");
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Right)); // normal -> urgent
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "2% milk");
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Form(FormField::Submit));
    app.handle_event(key(KeyCode::Enter));

    let holder = app.controller.holder();
    assert_eq!(holder.len(), 1);
    let id = holder.id_at(0).unwrap();
    let card = holder.get(id).unwrap();
    assert_eq!(card.title, "Buy milk");
    assert_eq!(card.urgency.text, "urgent");
    assert_eq!(card.urgency.tone, Tone::Negative);
    assert_eq!(card.description, "2% milk");
    assert_eq!(card.badge().label(), "Not Started");
    assert_eq!(card.badge().tone(), Tone::Negative);
    assert_eq!(card.controls().len(), 3);

    let text = screen(&mut terminal, &mut app);
    assert!(text.contains("Buy milk"));
    assert!(text.contains("Urgent"));
    assert!(text.contains("2% milk"));
    assert!(text.contains("Not Started"));
    assert!(text.contains("[X]"));

    let next = Target::Control(ControlRef::new(id, ControlKind::Next));
    click_at(&mut app, next);
    assert_eq!(badge_label(&app, 0), "In Progress");
    let card = app.controller.holder().get(id).unwrap();
    assert_eq!(card.badge().tone(), Tone::Warning);

    screen(&mut terminal, &mut app);
    click_at(&mut app, next);
    screen(&mut terminal, &mut app);
    click_at(&mut app, next);
    assert_eq!(badge_label(&app, 0), "Not Started");

    screen(&mut terminal, &mut app);
    click_at(&mut app, Target::Control(ControlRef::new(id, ControlKind::Close)));
    assert!(app.controller.holder().is_empty());
    assert!(!screen(&mut terminal, &mut app).contains("Buy milk"));
}

#[test]
fn keyboard_controls_act_on_selected_card() {
    let (mut app, _terminal) = app(&PageConfig::default());
    for name in ["one", "two", "three"] {
        app.controller.form_mut().name.set_text(name);
        app.submit();
    }
    app.handle_event(key(KeyCode::Esc));
    assert_eq!(app.focus, Focus::Holder);

    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Left));
    assert_eq!(badge_label(&app, 1), "Finished");
    assert_eq!(badge_label(&app, 0), "Not Started");

    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Char('x')));
    assert_eq!(app.controller.holder().len(), 2);
    assert_eq!(app.selected, 1);
    assert_eq!(badge_label(&app, 1), "Finished");

    assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Flow::Quit);
}

#[test]
fn enter_in_name_submits_and_keeps_values() {
    let (mut app, _terminal) = app(&PageConfig::default());
    type_text(&mut app, "Walk dog");
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Enter));
    let holder = app.controller.holder();
    assert_eq!(holder.len(), 2);
    assert!(holder.iter().all(|(_, card)| card.title == "Walk dog"));
    assert!(holder.iter().all(|(_, card)| card.badge().status() == Status::NotStarted));
}

#[test]
fn enter_in_description_adds_a_line() {
    let (mut app, _terminal) = app(&PageConfig::default());
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "a");
    app.handle_event(key(KeyCode::Enter));
    type_text(&mut app, "b");
    assert!(app.controller.holder().is_empty());
    assert_eq!(app.controller.form().values().description, "a\nb");
}

#[test]
fn preexisting_cards_are_wired_by_marker() {
    let config = PageConfig {
        title: "Chores".into(),
        cards: vec![
            SeedCard {
                name: "Laundry".into(),
                urgency: "normal".into(),
                description: "whites".into(),
                status: SeedStatus::Ordinal(1),
                controls: vec!["closeButton".into(), "leftButton".into(), "rightButton".into()],
            },
            SeedCard {
                name: "Dishes".into(),
                urgency: "urgent".into(),
                description: String::new(),
                status: SeedStatus::Ordinal(9),
                controls: vec!["closeButton".into()],
            },
        ],
        ..PageConfig::default()
    };
    let (mut app, mut terminal) = app(&config);

    let text = screen(&mut terminal, &mut app);
    assert!(text.contains("Chores (2)"));
    assert!(text.contains("In Progress"));
    assert!(text.contains("Finished"));

    let holder = app.controller.holder();
    let laundry = holder.id_at(0).unwrap();
    let dishes = holder.id_at(1).unwrap();
    assert_eq!(holder.get(dishes).unwrap().badge().tone(), Tone::Neutral);
    assert!(app
        .target_area(Target::Control(ControlRef::new(dishes, ControlKind::Next)))
        .is_none());

    click_at(&mut app, Target::Control(ControlRef::new(laundry, ControlKind::Next)));
    assert_eq!(badge_label(&app, 0), "Finished");

    screen(&mut terminal, &mut app);
    click_at(&mut app, Target::Control(ControlRef::new(dishes, ControlKind::Close)));
    assert_eq!(app.controller.holder().len(), 1);
    assert_eq!(badge_label(&app, 0), "Finished");
}

#[test]
fn oversized_seed_label_is_clipped_to_the_card() {
    let config = PageConfig {
        cards: vec![SeedCard {
            name: "Long".into(),
            urgency: "normal".into(),
            description: String::new(),
            status: SeedStatus::Label("x".repeat(70_000)),
            controls: vec!["closeButton".into(), "leftButton".into(), "rightButton".into()],
        }],
        ..PageConfig::default()
    };
    let (mut app, mut terminal) = app(&config);

    let text = screen(&mut terminal, &mut app);
    assert!(text.contains("Long"));
    assert!(text.contains("xxxxxxxx"));

    let id = app.controller.holder().id_at(0).unwrap();
    let previous = app
        .target_area(Target::Control(ControlRef::new(id, ControlKind::Previous)))
        .expect("previous control drawn");
    assert!(previous.x < terminal.backend().buffer().area.width);

    // The foreign label reads as finished, so previous lands on in progress.
    click_at(&mut app, Target::Control(ControlRef::new(id, ControlKind::Previous)));
    assert_eq!(badge_label(&app, 0), "In Progress");
    assert!(screen(&mut terminal, &mut app).contains("In Progress"));
}

#[test]
fn ctrl_c_quits_from_the_form() {
    let (mut app, _terminal) = app(&PageConfig::default());
    let quit = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(app.handle_event(quit), Flow::Quit);
    assert!(app.controller.holder().is_empty());
}
