use crate::card::{Card, ControlKind};
use crate::controller::{CardController, ClickOutcome, ControlRef};
use crate::form::{FormField, InputLine};
use crate::theme::{Theme, Tone};
use crate::todo_holder::CardId;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

const CARD_HEIGHT: u16 = 6;
const FORM_WIDTH: u16 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form(FormField),
    Holder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Control(ControlRef),
    Field(FormField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Screen state around the controller: focus, selection and the regions
/// that respond to mouse clicks in the last drawn frame.
pub struct App {
    pub controller: CardController,
    pub theme: Theme,
    pub focus: Focus,
    pub selected: usize,
    scroll: usize,
    hits: Vec<(Rect, Target)>,
}

impl App {
    pub fn new(controller: CardController, theme: Theme) -> Self {
        Self {
            controller,
            theme,
            focus: Focus::Form(FormField::Name),
            selected: 0,
            scroll: 0,
            hits: Vec::new(),
        }
    }

    pub fn selected_card(&self) -> Option<CardId> {
        self.controller.holder().id_at(self.selected)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        self.hits
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, target)| *target)
    }

    /// Region a target occupied in the last frame.
    pub fn target_area(&self, target: Target) -> Option<Rect> {
        self.hits
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(rect, _)| *rect)
    }

    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Flow::Quit,
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return Flow::Continue;
            }
            KeyCode::Tab => {
                self.focus_next();
                return Flow::Continue;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return Flow::Continue;
            }
            _ => {}
        }
        match self.focus {
            Focus::Form(field) => {
                self.form_key(field, key);
                Flow::Continue
            }
            Focus::Holder => self.holder_key(key),
        }
    }

    fn form_key(&mut self, field: FormField, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.focus = Focus::Holder;
            return;
        }
        match field {
            FormField::Name | FormField::Description => {
                let multiline = field == FormField::Description;
                let ctrl_j = key.code == KeyCode::Char('j')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                let alt = key.modifiers.contains(KeyModifiers::ALT);
                let newline = ctrl_j || (key.code == KeyCode::Enter && (multiline || alt));
                if key.code == KeyCode::Enter && !newline {
                    self.submit();
                    return;
                }
                let form = self.controller.form_mut();
                let Some(input) = form.focused_input() else {
                    return;
                };
                if newline {
                    if multiline {
                        input.insert('\n');
                    }
                    return;
                }
                edit(input, key);
            }
            FormField::Urgency => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    let form = self.controller.form_mut();
                    form.urgency = form.urgency.toggle();
                }
                KeyCode::Enter => {
                    self.submit();
                }
                _ => {}
            },
            FormField::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
        }
    }

    fn holder_key(&mut self, key: KeyEvent) -> Flow {
        let kind = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('a') | KeyCode::Char('i') => {
                self.set_focus(Focus::Form(FormField::Name));
                return Flow::Continue;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                return Flow::Continue;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.controller.holder().len() {
                    self.selected += 1;
                }
                return Flow::Continue;
            }
            KeyCode::Left | KeyCode::Char('h') => ControlKind::Previous,
            KeyCode::Right | KeyCode::Char('l') => ControlKind::Next,
            KeyCode::Char('x') | KeyCode::Delete => ControlKind::Close,
            _ => return Flow::Continue,
        };
        if let Some(card) = self.selected_card() {
            self.click(ControlRef::new(card, kind));
        }
        Flow::Continue
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.hit_test(mouse.column, mouse.row) {
            Some(Target::Control(control)) => {
                if let Some(index) = self.controller.holder().position(control.card) {
                    self.selected = index;
                }
                self.focus = Focus::Holder;
                self.click(control);
            }
            Some(Target::Field(FormField::Submit)) => {
                self.set_focus(Focus::Form(FormField::Submit));
                self.submit();
            }
            Some(Target::Field(field)) => self.set_focus(Focus::Form(field)),
            None => {}
        }
    }

    pub fn click(&mut self, control: ControlRef) -> ClickOutcome {
        let outcome = self.controller.click(control);
        if let ClickOutcome::Deleted(_) = outcome {
            let len = self.controller.holder().len();
            self.selected = self.selected.min(len.saturating_sub(1));
        }
        outcome
    }

    pub fn submit(&mut self) -> CardId {
        self.controller.submit_form()
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if let Focus::Form(field) = focus {
            self.controller.form_mut().focus = field;
        }
    }

    fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Form(field) => field.next().map_or(Focus::Holder, Focus::Form),
            Focus::Holder => Focus::Form(FormField::first()),
        };
        self.set_focus(next);
    }

    fn focus_previous(&mut self) {
        let previous = match self.focus {
            Focus::Form(field) => field.previous().map_or(Focus::Holder, Focus::Form),
            Focus::Holder => Focus::Form(FormField::last()),
        };
        self.set_focus(previous);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        self.hits.clear();
        let [form_area, holder_area] =
            Layout::horizontal([Constraint::Length(FORM_WIDTH), Constraint::Min(20)])
                .areas(frame.area());
        self.draw_form(frame, form_area);
        self.draw_holder(frame, holder_area);
    }

    fn draw_form(&mut self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let outer = Block::bordered().title(" Add task ").border_style(theme.border(false));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [name_area, urgency_area, description_area, submit_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .areas(inner);

        let focused = |field| self.focus == Focus::Form(field);
        let form = self.controller.form();

        let name = Paragraph::new(form.name.text()).block(
            Block::bordered()
                .title(" Name ")
                .border_style(theme.border(focused(FormField::Name))),
        );
        frame.render_widget(name, name_area);

        let urgency = Paragraph::new(Line::from(vec![
            Span::raw("< "),
            Span::styled(form.urgency.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" >"),
        ]))
        .block(
            Block::bordered()
                .title(" Urgency ")
                .border_style(theme.border(focused(FormField::Urgency))),
        );
        frame.render_widget(urgency, urgency_area);

        let description = Paragraph::new(Text::raw(form.description.text()))
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title(" Description ")
                    .border_style(theme.border(focused(FormField::Description))),
            );
        frame.render_widget(description, description_area);

        let submit_style = if focused(FormField::Submit) {
            Style::default().fg(theme.focus).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let submit = Paragraph::new(Line::from(Span::styled(" Add ", submit_style)).centered())
            .block(Block::bordered().border_style(theme.border(focused(FormField::Submit))));
        frame.render_widget(submit, submit_area);

        if let Focus::Form(field) = self.focus {
            let cursor = match field {
                FormField::Name => Some((name_area, &form.name)),
                FormField::Description => Some((description_area, &form.description)),
                FormField::Urgency | FormField::Submit => None,
            };
            if let Some((area, input)) = cursor {
                let (row, col) = cursor_cell(input);
                frame.set_cursor_position((
                    area.x + 1 + col.min(area.width.saturating_sub(3)),
                    area.y + 1 + row.min(area.height.saturating_sub(3)),
                ));
            }
        }

        self.hits.extend([
            (name_area, Target::Field(FormField::Name)),
            (urgency_area, Target::Field(FormField::Urgency)),
            (description_area, Target::Field(FormField::Description)),
            (submit_area, Target::Field(FormField::Submit)),
        ]);
    }

    fn draw_holder(&mut self, frame: &mut Frame, area: Rect) {
        let holder = self.controller.holder();
        let block = Block::bordered()
            .title(format!(" {} ({}) ", holder.title, holder.len()))
            .border_style(self.theme.border(self.focus == Focus::Holder));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible = usize::from((inner.height / CARD_HEIGHT).max(1));
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }
        self.scroll = self.scroll.min(holder.len().saturating_sub(1));

        let mut y = inner.y;
        let mut hits = Vec::new();
        for (index, (id, card)) in holder.iter().enumerate().skip(self.scroll).take(visible) {
            let height = CARD_HEIGHT.min(inner.y + inner.height - y);
            if height < 3 {
                break;
            }
            let rect = Rect::new(inner.x, y, inner.width, height);
            let selected = self.focus == Focus::Holder && index == self.selected;
            hits.extend(draw_card(frame, &self.theme, rect, id, card, selected));
            y += height;
        }
        self.hits.extend(hits);
    }
}

fn edit(input: &mut InputLine, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(ch),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Row and column of the cursor when the text is laid out line by line.
fn cursor_cell(input: &InputLine) -> (u16, u16) {
    let before: String = input.text().chars().take(input.cursor_pos()).collect();
    let row = before.matches('\n').count();
    let col = before.rsplit('\n').next().map_or(0, |line| line.chars().count());
    (
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(col).unwrap_or(u16::MAX),
    )
}

fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn draw_card(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    id: CardId,
    card: &Card,
    selected: bool,
) -> Vec<(Rect, Target)> {
    let mut hits = Vec::new();
    let block = Block::bordered().border_style(theme.border(selected));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if card.has_control(ControlKind::Close) && area.width >= 6 {
        let rect = Rect::new(area.x + area.width - 5, area.y, 3, 1);
        let close = Paragraph::new(Span::styled(
            "[X]",
            Style::default().fg(theme.close).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(close, rect);
        hits.push((rect, Target::Control(ControlRef::new(id, ControlKind::Close))));
    }

    let rows = Layout::vertical([Constraint::Length(1); 4]).split(inner);

    let title = Paragraph::new(Span::styled(
        card.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, rows[0]);

    let urgency = Paragraph::new(Line::from(vec![
        Span::styled(" Urgency ", theme.tone(Tone::Neutral)),
        Span::raw(" : "),
        Span::styled(
            format!(" {} ", capitalize(&card.urgency.text)),
            theme.tone(card.urgency.tone),
        ),
    ]));
    frame.render_widget(urgency, rows[1]);

    let description = Paragraph::new(Span::styled(
        card.description.replace('\n', " "),
        Style::default().fg(theme.muted),
    ));
    frame.render_widget(description, rows[2]);

    let status_row = rows[3];
    let badge_text = format!(" {} ", card.badge().label());
    let badge_width = u16::try_from(badge_text.chars().count())
        .unwrap_or(u16::MAX)
        .min(status_row.width);
    let mut x = status_row.x;
    let right_edge = status_row.x + status_row.width;
    for part in [Some(ControlKind::Previous), None, Some(ControlKind::Next)] {
        let width = if part.is_some() { 3 } else { badge_width };
        if x >= right_edge {
            break;
        }
        let rect = Rect::new(x, status_row.y, width.min(right_edge - x), 1);
        x = x.saturating_add(width).saturating_add(1);
        match part {
            Some(kind) => {
                if !card.has_control(kind) {
                    continue;
                }
                let control = Paragraph::new(Span::styled(
                    format!(" {} ", kind.glyph()),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                ));
                frame.render_widget(control, rect);
                hits.push((rect, Target::Control(ControlRef::new(id, kind))));
            }
            None => {
                let badge = Paragraph::new(Span::styled(badge_text.clone(), theme.tone(card.badge().tone())));
                frame.render_widget(badge, rect);
            }
        }
    }
    hits
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;
        if app.handle_event(event::read()?) == Flow::Quit {
            tracing::info!(cards = app.controller.holder().len(), "quitting");
            return Ok(());
        }
    }
}
