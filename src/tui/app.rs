//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the navigation shell,
//! task store and editor, handles user input, and renders the sidebar,
//! section content, dialogs and status bar.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::board::Board;
use crate::dates::{format_due_relative, is_overdue};
use crate::editor::Editor;
use crate::fields::{Status, Urgency};
use crate::shell::{self, Shell};
use crate::store::TaskStore;
use crate::task::Task;
use crate::tui::{
    colors::{
        COLUMN_DONE, COLUMN_IN_PROGRESS, COLUMN_TODO, URGENCY_HIGH, URGENCY_LOW, URGENCY_MEDIUM,
    },
    enums::{AppState, Focus},
    input::InputField,
    task_form::{
        TaskForm, ASSIGNEE_FIELD, DESCRIPTION_FIELD, DUE_FIELD, TITLE_FIELD, URGENCY_FIELD,
    },
    utils::centered_rect,
};

/// Accent color for a board column.
fn status_color(status: Status) -> Color {
    match status {
        Status::Todo => COLUMN_TODO,
        Status::InProgress => COLUMN_IN_PROGRESS,
        Status::Done => COLUMN_DONE,
    }
}

/// Accent color for an urgency level.
fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Low => URGENCY_LOW,
        Urgency::Medium => URGENCY_MEDIUM,
        Urgency::High => URGENCY_HIGH,
    }
}

/// Main application state for the terminal user interface.
///
/// Owns the shell, store and editor; the render functions are pure views
/// over them, recomputed every frame.
pub struct App {
    shell: Shell,
    store: TaskStore,
    editor: Editor,
    form: TaskForm,
    state: AppState,
    focus: Focus,
    sidebar_state: ListState,
    task_state: ListState,
    board_column: usize,
    board_card: usize,
    confirm_delete: Option<u64>,
    status_message: String,
    should_exit: bool,
}

impl App {
    /// Create a new App over the given shell and store state.
    pub fn new(shell: Shell, store: TaskStore) -> Self {
        let mut sidebar_state = ListState::default();
        sidebar_state.select(shell::item_index(shell.selected()).or(Some(0)));

        let mut task_state = ListState::default();
        if !store.is_empty() {
            task_state.select(Some(0));
        }

        App {
            shell,
            store,
            editor: Editor::new(),
            form: TaskForm::new(),
            state: AppState::Browse,
            focus: Focus::Sidebar,
            sidebar_state,
            task_state,
            board_column: 0,
            board_card: 0,
            confirm_delete: None,
            status_message: String::new(),
            should_exit: false,
        }
    }

    /// Main event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;
            self.handle_input()?;
            if self.should_exit {
                break;
            }
        }
        Ok(())
    }

    /// Poll for and dispatch one input event.
    fn handle_input(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match self.state {
                    AppState::Browse => self.handle_browse_input(key),
                    AppState::NewTask => self.handle_dialog_input(key),
                    AppState::ConfirmDelete => self.handle_confirm_input(key.code),
                    AppState::Help => self.handle_help_input(),
                }
            }
        }
        Ok(())
    }

    // --- Browse state ---

    fn handle_browse_input(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }

        self.status_message.clear();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc if self.focus == Focus::Sidebar => {
                self.should_exit = true;
            }
            KeyCode::Char('q') => self.should_exit = true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Content,
                    Focus::Content => Focus::Sidebar,
                };
            }
            KeyCode::Char('b') => self.shell.toggle_collapsed(),
            KeyCode::Char('h') | KeyCode::Char('?') => self.state = AppState::Help,
            _ => match self.focus {
                Focus::Sidebar => self.handle_sidebar_key(key.code),
                Focus::Content => self.handle_content_key(key.code),
            },
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                if let Some(selected) = self.sidebar_state.selected() {
                    if selected > 0 {
                        self.sidebar_state.select(Some(selected - 1));
                    }
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.sidebar_state.selected() {
                    if selected < shell::SIDEBAR_ITEMS.len() - 1 {
                        self.sidebar_state.select(Some(selected + 1));
                    }
                }
            }
            KeyCode::Enter | KeyCode::Right => {
                if let Some(selected) = self.sidebar_state.selected() {
                    if let Some(item) = shell::SIDEBAR_ITEMS.get(selected) {
                        self.shell.select(item.key);
                    }
                }
                self.focus = Focus::Content;
                self.board_column = 0;
                self.board_card = 0;
            }
            _ => {}
        }
    }

    fn handle_content_key(&mut self, key: KeyCode) {
        match self.shell.selected() {
            "tasks" => self.handle_task_list_key(key),
            "dashboard" => self.handle_board_key(key),
            _ => {
                if matches!(key, KeyCode::Left) {
                    self.focus = Focus::Sidebar;
                }
            }
        }
    }

    fn handle_task_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left => self.focus = Focus::Sidebar,
            KeyCode::Up => {
                if let Some(selected) = self.task_state.selected() {
                    if selected > 0 {
                        self.task_state.select(Some(selected - 1));
                    }
                }
            }
            KeyCode::Down => {
                let len = self.store.len();
                match self.task_state.selected() {
                    Some(selected) if selected + 1 < len => {
                        self.task_state.select(Some(selected + 1));
                    }
                    None if len > 0 => self.task_state.select(Some(0)),
                    _ => {}
                }
            }
            KeyCode::Char('n') => self.open_dialog(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task_id() {
                    self.confirm_delete = Some(id);
                    self.state = AppState::ConfirmDelete;
                }
            }
            KeyCode::Char(']') => self.advance_selected_task(true),
            KeyCode::Char('[') => self.advance_selected_task(false),
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left => {
                if self.board_column > 0 {
                    self.board_column -= 1;
                    self.board_card = 0;
                } else {
                    self.focus = Focus::Sidebar;
                }
            }
            KeyCode::Right => {
                if self.board_column + 1 < Status::ALL.len() {
                    self.board_column += 1;
                    self.board_card = 0;
                }
            }
            KeyCode::Up => {
                if self.board_card > 0 {
                    self.board_card -= 1;
                }
            }
            KeyCode::Down => {
                let len = self.board_column_len(self.board_column);
                if len > 0 && self.board_card + 1 < len {
                    self.board_card += 1;
                }
            }
            KeyCode::Char('n') => self.open_dialog(),
            KeyCode::Char(']') => self.move_board_card(true),
            KeyCode::Char('[') => self.move_board_card(false),
            _ => {}
        }
    }

    // --- Dialog state ---

    fn open_dialog(&mut self) {
        self.form.reset();
        self.editor.open();
        self.state = AppState::NewTask;
    }

    fn handle_dialog_input(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                // Discard all edits.
                self.editor.close();
                self.form.reset();
                self.state = AppState::Browse;
            }
            KeyCode::Enter => {
                self.form.apply(&mut self.editor);
                match self.editor.commit(&mut self.store) {
                    Ok(id) => {
                        self.status_message = format!("Task {} created", id);
                        self.editor.close();
                        self.form.reset();
                        self.state = AppState::Browse;
                        if self.task_state.selected().is_none() {
                            self.task_state.select(Some(0));
                        }
                    }
                    Err(e) => {
                        self.status_message = e.to_string();
                    }
                }
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => self.form.handle_left_right(false),
            KeyCode::Right => self.form.handle_left_right(true),
            KeyCode::Backspace => self.form.handle_backspace(),
            KeyCode::Delete => self.form.handle_delete(),
            KeyCode::Char(c) => self.form.handle_char(c),
            _ => {}
        }

        // Keep the draft in step with the form after every keystroke.
        if self.state == AppState::NewTask {
            self.form.apply(&mut self.editor);
        }
    }

    // --- Confirm state ---

    fn handle_confirm_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(id) = self.confirm_delete.take() {
                    self.store.remove(id);
                    self.status_message = "Task deleted".to_string();
                    self.clamp_task_selection();
                }
                self.state = AppState::Browse;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_delete = None;
                self.state = AppState::Browse;
            }
            _ => {}
        }
    }

    fn handle_help_input(&mut self) {
        self.state = AppState::Browse;
    }

    // --- Selection helpers ---

    fn selected_task_id(&self) -> Option<u64> {
        self.task_state
            .selected()
            .and_then(|idx| self.store.view().get(idx))
            .map(|t| t.id)
    }

    fn clamp_task_selection(&mut self) {
        let len = self.store.len();
        match self.task_state.selected() {
            Some(_) if len == 0 => self.task_state.select(None),
            Some(selected) if selected >= len => self.task_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn board_column_len(&self, column: usize) -> usize {
        let board = Board::from_tasks(self.store.view());
        Status::ALL
            .get(column)
            .map_or(0, |&s| board.column(s).len())
    }

    fn board_selected_task_id(&self) -> Option<u64> {
        let board = Board::from_tasks(self.store.view());
        let status = *Status::ALL.get(self.board_column)?;
        board.column(status).get(self.board_card).map(|t| t.id)
    }

    /// Move the selected board card to the neighbouring column.
    fn move_board_card(&mut self, forward: bool) {
        let Some(id) = self.board_selected_task_id() else {
            return;
        };
        let Some(current) = self.store.get(id).map(|t| t.status) else {
            return;
        };
        let target = if forward { current.next() } else { current.prev() };
        let Some(target) = target else {
            return;
        };

        if self.store.set_status(id, target) {
            self.status_message = format!("Moved to {}", target.label());
            self.board_column = if forward {
                self.board_column + 1
            } else {
                self.board_column - 1
            };
            let board = Board::from_tasks(self.store.view());
            self.board_card = board
                .column(target)
                .iter()
                .position(|t| t.id == id)
                .unwrap_or(0);
        }
    }

    /// Advance (or rewind) the status of the task selected in the list view.
    fn advance_selected_task(&mut self, forward: bool) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let Some(current) = self.store.get(id).map(|t| t.status) else {
            return;
        };
        let target = if forward { current.next() } else { current.prev() };
        if let Some(target) = target {
            self.store.set_status(id, target);
            self.status_message = format!("Moved to {}", target.label());
        }
    }

    // --- Rendering ---

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        let sidebar_width = if self.shell.is_collapsed() { 6 } else { 28 };
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(chunks[0]);

        self.render_sidebar(f, main[0]);
        self.render_content(f, main[1]);
        self.render_status_bar(f, chunks[1]);

        match self.state {
            AppState::NewTask => self.render_task_dialog(f),
            AppState::ConfirmDelete => self.render_confirm_dialog(f),
            AppState::Help => self.render_help(f),
            AppState::Browse => {}
        }
    }

    fn render_sidebar(&mut self, f: &mut Frame, area: Rect) {
        let collapsed = self.shell.is_collapsed();
        let items: Vec<ListItem> = shell::SIDEBAR_ITEMS
            .iter()
            .map(|item| {
                if collapsed {
                    // Initial only, matching the narrow rail of the web UI.
                    let initial = item.label.chars().next().unwrap_or('·');
                    return ListItem::new(Line::from(format!(" {}", initial)));
                }
                let mut lines = vec![Line::from(format!(" {}", item.label))];
                for sub in item.sub_items {
                    // Display-only entries; they never route anywhere.
                    lines.push(Line::from(Span::styled(
                        format!("   · {}", sub.label),
                        Style::default().add_modifier(Modifier::DIM),
                    )));
                }
                ListItem::new(Text::from(lines))
            })
            .collect();

        let border_style = if self.focus == Focus::Sidebar {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let title = if collapsed { "≡" } else { "Startupd" };
        let sidebar = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(sidebar, area, &mut self.sidebar_state);
    }

    fn render_content(&mut self, f: &mut Frame, area: Rect) {
        match self.shell.selected() {
            "dashboard" => self.render_dashboard(f, area),
            "tasks" => self.render_task_list(f, area),
            _ => self.render_placeholder(f, area),
        }
    }

    /// Dashboard section: three summary cards above the kanban board.
    fn render_dashboard(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(rows[0]);

        let summaries = [
            ("Today's Schedule", "No scheduled items today."),
            ("Upcoming Meetings", "No upcoming meetings."),
            ("Project Timeline", "No timeline items."),
        ];
        for (i, (title, empty_text)) in summaries.iter().enumerate() {
            let card = Paragraph::new(*empty_text)
                .block(Block::default().borders(Borders::ALL).title(*title))
                .style(Style::default().add_modifier(Modifier::DIM));
            f.render_widget(card, cards[i]);
        }

        self.render_board(f, rows[1]);
    }

    /// The three-column kanban board.
    fn render_board(&mut self, f: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Content {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .title("Company Kanban Board")
            .border_style(border_style);
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(inner);

        let board = Board::from_tasks(self.store.view());
        let today = Local::now().date_naive();

        for (i, status) in Status::ALL.into_iter().enumerate() {
            let tasks = board.column(status);
            let selected_here = self.focus == Focus::Content
                && self.shell.selected() == "dashboard"
                && self.board_column == i;

            let mut lines: Vec<Line> = Vec::new();
            for (j, task) in tasks.iter().enumerate() {
                let is_selected = selected_here && self.board_card == j;
                let title_style = if is_selected {
                    Style::default().bg(Color::Gray).fg(Color::Black)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::styled("▪ ", Style::default().fg(urgency_color(task.urgency))),
                    Span::styled(task.title.clone(), title_style),
                ]));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {} · {}",
                        task.assigned_to,
                        format_due_relative(&task.due_date, today)
                    ),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
            if tasks.is_empty() {
                lines.push(Line::from(Span::styled(
                    " (empty)",
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }

            let heading = format!("{} ({})", status.label(), tasks.len());
            let column = Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(heading)
                        .border_style(Style::default().fg(status_color(status))),
                )
                .wrap(Wrap { trim: false });
            f.render_widget(column, columns[i]);
        }
    }

    /// Tasks section: create-task trigger plus the flat task list.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let trigger = Paragraph::new(" [n] Create New Task ")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(trigger, rows[0]);

        let today = Local::now().date_naive();
        let items: Vec<ListItem> = self
            .store
            .view()
            .iter()
            .map(|task| ListItem::new(Text::from(task_card_lines(task, today))))
            .collect();

        let border_style = if self.focus == Focus::Content {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let title = format!("Tasks ({})", self.store.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(list, rows[1], &mut self.task_state);
    }

    /// Sections without content of their own get a placeholder card; the
    /// Features section additionally lists its display-only sub-items.
    fn render_placeholder(&mut self, f: &mut Frame, area: Rect) {
        let label = self.shell.selected_label();
        let mut lines = vec![Line::from(""), Line::from("Nothing here yet.")];
        if let Some(item) = shell::find_item(self.shell.selected()) {
            if !item.sub_items.is_empty() {
                lines.push(Line::from(""));
                for sub in item.sub_items {
                    lines.push(Line::from(Span::styled(
                        format!("  · {}", sub.label),
                        Style::default().add_modifier(Modifier::DIM),
                    )));
                }
            }
        }

        let card = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(label))
            .alignment(Alignment::Left);
        f.render_widget(card, area);
    }

    /// Render the create-task dialog as a modal overlay.
    fn render_task_dialog(&mut self, f: &mut Frame) {
        let area = centered_rect(60, 70, f.area());
        f.render_widget(Clear, area);

        let dialog = Block::default()
            .borders(Borders::ALL)
            .title("Create New Task");
        let inner = dialog.inner(area);
        f.render_widget(dialog, area);

        let fields = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Description
                Constraint::Length(3), // Assign to
                Constraint::Length(3), // Due date
                Constraint::Length(3), // Urgency
                Constraint::Min(0),    // Hint
            ])
            .split(inner);

        self.render_text_field(f, fields[0], "Task Title", TITLE_FIELD, |form| &form.title);
        self.render_text_field(f, fields[1], "Description", DESCRIPTION_FIELD, |form| {
            &form.description
        });

        let assignee = self
            .form
            .selected_assignee()
            .map_or("Assign to".to_string(), |a| a.name().to_string());
        self.render_selector(f, fields[2], "Assign to", ASSIGNEE_FIELD, &assignee);

        self.render_text_field(f, fields[3], "Due Date (YYYY-MM-DD)", DUE_FIELD, |form| {
            &form.due
        });

        let urgency = self.form.selected_urgency().label().to_string();
        self.render_selector(f, fields[4], "Urgency", URGENCY_FIELD, &urgency);

        let hint = Paragraph::new("Enter: create  Tab/↑↓: fields  ←→: cycle  Esc: cancel")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        f.render_widget(hint, fields[5]);
    }

    fn render_text_field(
        &self,
        f: &mut Frame,
        area: Rect,
        label: &str,
        order: usize,
        get: impl Fn(&TaskForm) -> &InputField,
    ) {
        let active = self.form.current_field == order;
        let field = get(&self.form);
        let border_style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let widget = Paragraph::new(field.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border_style),
        );
        f.render_widget(widget, area);

        if active {
            f.set_cursor_position((area.x + field.cursor as u16 + 1, area.y + 1));
        }
    }

    fn render_selector(&self, f: &mut Frame, area: Rect, label: &str, order: usize, value: &str) {
        let active = self.form.current_field == order;
        let border_style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let text = if active {
            format!("◄ {} ►", value)
        } else {
            value.to_string()
        };
        let widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border_style),
        );
        f.render_widget(widget, area);
    }

    /// Render the delete confirmation dialog.
    fn render_confirm_dialog(&mut self, f: &mut Frame) {
        let area = centered_rect(50, 30, f.area());
        f.render_widget(Clear, area);

        let title = self
            .confirm_delete
            .and_then(|id| self.store.get(id))
            .map_or("this task".to_string(), |t| format!("'{}'", t.title));

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Delete task?",
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Red),
            )),
            Line::from(""),
            Line::from(format!("This will remove {}.", title)),
            Line::from(""),
            Line::from("Press Y to confirm, N or Esc to cancel"),
        ];

        let dialog = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Delete Task")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(dialog, area);
    }

    /// Render the help overlay.
    fn render_help(&mut self, f: &mut Frame) {
        let area = centered_rect(60, 60, f.area());
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Keyboard Reference",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Tab        switch between sidebar and content"),
            Line::from("↑ ↓        navigate lists and board cards"),
            Line::from("← →        navigate board columns"),
            Line::from("Enter      open the highlighted section"),
            Line::from("n          create a new task"),
            Line::from("d          delete the selected task"),
            Line::from("[ ]        move the selected task between columns"),
            Line::from("b          collapse or expand the sidebar"),
            Line::from("q          quit"),
            Line::from(""),
            Line::from("Press any key to return"),
        ];

        let help = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(help, area);
    }

    /// Render the status bar with context-appropriate help text.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::NewTask => {
                    "Enter: create, Tab: next field, ←→: edit/cycle, Esc: cancel".to_string()
                }
                AppState::ConfirmDelete => "Press Y to confirm, N or Esc to cancel".to_string(),
                AppState::Help => "Press any key to return".to_string(),
                AppState::Browse => match (self.focus, self.shell.selected()) {
                    (Focus::Sidebar, _) => {
                        "↑↓: navigate, Enter: open section, Tab: content, h: help, q: quit"
                            .to_string()
                    }
                    (Focus::Content, "tasks") => {
                        "↑↓: select, n: new task, d: delete, [ ]: move status, Tab: sidebar"
                            .to_string()
                    }
                    (Focus::Content, "dashboard") => {
                        "←→↑↓: navigate board, [ ]: move card, n: new task, Tab: sidebar"
                            .to_string()
                    }
                    (Focus::Content, _) => "Tab: back to sidebar, h: help, q: quit".to_string(),
                },
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }
}

/// Lines for one task card in the list view.
fn task_card_lines(task: &Task, today: chrono::NaiveDate) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        task.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !task.description.is_empty() {
        lines.push(Line::from(task.description.clone()));
    }
    let due_style = if is_overdue(&task.due_date, today) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("Assigned to: {} | ", task.assigned_to),
            Style::default().add_modifier(Modifier::DIM),
        ),
        Span::styled(
            format!("Due: {} | ", format_due_relative(&task.due_date, today)),
            due_style,
        ),
        Span::styled(
            format!("Urgency: {}", task.urgency),
            Style::default().fg(urgency_color(task.urgency)),
        ),
        Span::styled(
            format!(" | {}", task.status),
            Style::default().fg(status_color(task.status)),
        ),
    ]));
    lines
}
