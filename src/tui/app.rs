use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::gesture::DragController;
use crate::model::{AppConfig, ContainerLayout, ContainerRect, Point, Status, TaskId};
use crate::ops::board::Board;

use super::form::{FormField, TaskForm};
use super::input;
use super::render;
use super::theme::Theme;

/// Longest the loop sleeps waiting for input when no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Board is interactive
    Board,
    /// Details popup open for `App::details`
    Details,
    /// Create/edit form open
    Form,
    /// Waiting for a yes/no answer
    Confirm,
}

/// Action awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { task_id: TaskId },
}

/// Something clickable inside a popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupButton {
    CloseDetails,
    EditTask(TaskId),
    ToggleTask(TaskId),
    DeleteTask(TaskId),
    ConfirmYes,
    ConfirmNo,
    PickEmoji(usize),
    FocusField(FormField),
    SaveForm,
    CancelForm,
}

/// Hit regions recorded by the last render pass.
///
/// Rebuilt on every draw, so a release always sees the geometry of the most
/// recent frame rather than the frame the drag started in.
#[derive(Debug, Clone, Default)]
pub struct BoardLayout {
    pub todo: Option<ContainerRect>,
    pub done: Option<ContainerRect>,
    pub bubbles: Vec<(Rect, TaskId)>,
    pub create_button: Option<Rect>,
    pub popup: Option<Rect>,
    pub buttons: Vec<(Rect, PopupButton)>,
}

impl BoardLayout {
    pub fn clear(&mut self) {
        *self = BoardLayout::default();
    }

    pub fn set_container(&mut self, status: Status, area: Rect) {
        let rect = ContainerRect::from_area(area);
        match status {
            Status::Todo => self.todo = rect,
            Status::Done => self.done = rect,
        }
    }

    /// Container under `point`, if any
    pub fn container_at(&self, point: Point) -> Option<Status> {
        [Status::Todo, Status::Done]
            .into_iter()
            .find(|&status| self.container_rect(status).is_some_and(|r| r.contains(point)))
    }

    pub fn bubble_at(&self, point: Point) -> Option<TaskId> {
        self.bubbles
            .iter()
            .find(|(area, _)| area_contains(*area, point))
            .map(|(_, id)| *id)
    }

    pub fn bubble_area(&self, id: TaskId) -> Option<Rect> {
        self.bubbles
            .iter()
            .find(|(_, bid)| *bid == id)
            .map(|(area, _)| *area)
    }

    pub fn button_at(&self, point: Point) -> Option<PopupButton> {
        self.buttons
            .iter()
            .find(|(area, _)| area_contains(*area, point))
            .map(|(_, b)| *b)
    }

    pub fn on_create_button(&self, point: Point) -> bool {
        self.create_button
            .is_some_and(|area| area_contains(area, point))
    }

    pub fn inside_popup(&self, point: Point) -> bool {
        self.popup.is_some_and(|area| area_contains(area, point))
    }
}

impl ContainerLayout for BoardLayout {
    fn container_rect(&self, container: Status) -> Option<ContainerRect> {
        match container {
            Status::Todo => self.todo,
            Status::Done => self.done,
        }
    }
}

pub fn area_contains(area: Rect, point: Point) -> bool {
    ContainerRect::from_area(area).is_some_and(|r| r.contains(point))
}

/// Main application state
pub struct App {
    pub board: Board,
    pub gestures: DragController,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub layout: BoardLayout,
    /// Task shown in the details popup
    pub details: Option<TaskId>,
    pub form: Option<TaskForm>,
    pub confirm: Option<ConfirmAction>,
    /// First visible bubble row per container; clamped by the renderer
    pub todo_scroll: usize,
    pub done_scroll: usize,
    pub show_help: bool,
    /// One-shot message shown in the status row
    pub status_message: Option<String>,
    /// Emoji preselected in the create form
    pub default_emoji: Option<String>,
}

impl App {
    pub fn new(board: Board, config: &AppConfig) -> Self {
        App {
            board,
            gestures: DragController::new(config.gesture.clone()),
            mode: Mode::Board,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            layout: BoardLayout::default(),
            details: None,
            form: None,
            confirm: None,
            todo_scroll: 0,
            done_scroll: 0,
            show_help: false,
            status_message: None,
            default_emoji: config.board.default_emoji.clone(),
        }
    }

    pub fn scroll_mut(&mut self, status: Status) -> &mut usize {
        match status {
            Status::Todo => &mut self.todo_scroll,
            Status::Done => &mut self.done_scroll,
        }
    }

    pub fn open_details(&mut self, id: TaskId) {
        if self.board.task(id).is_none() {
            return;
        }
        self.details = Some(id);
        self.mode = Mode::Details;
    }

    pub fn close_popups(&mut self) {
        self.details = None;
        self.form = None;
        self.confirm = None;
        self.mode = Mode::Board;
    }

    pub fn open_create_form(&mut self) {
        self.gestures.cancel();
        self.close_popups();
        self.form = Some(TaskForm::create(self.default_emoji.as_deref()));
        self.mode = Mode::Form;
    }

    pub fn open_edit_form(&mut self, id: TaskId) {
        let Some(task) = self.board.task(id) else {
            return;
        };
        let form = TaskForm::edit(task);
        self.close_popups();
        self.form = Some(form);
        self.mode = Mode::Form;
    }

    pub fn ask_delete(&mut self, id: TaskId) {
        if self.board.task(id).is_none() {
            return;
        }
        self.details = None;
        self.form = None;
        self.confirm = Some(ConfirmAction::DeleteTask { task_id: id });
        self.mode = Mode::Confirm;
    }

    /// Drop every piece of UI state that still points at a removed task
    pub fn forget_task(&mut self, id: TaskId) {
        self.gestures.forget(id);
        if self.details == Some(id) {
            self.details = None;
        }
        if self.form.as_ref().and_then(TaskForm::editing) == Some(id) {
            self.form = None;
        }
        if self.confirm == Some(ConfirmAction::DeleteTask { task_id: id }) {
            self.confirm = None;
        }
        self.mode = if self.confirm.is_some() {
            Mode::Confirm
        } else if self.form.is_some() {
            Mode::Form
        } else if self.details.is_some() {
            Mode::Details
        } else {
            Mode::Board
        };
    }
}

/// Run the TUI application
pub fn run(board: Board, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(board, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    info!("event=tui_start tasks={}", app.board.store().len());
    let result = run_event_loop(&mut terminal, &mut app);
    info!("event=tui_stop tasks={}", app.board.store().len());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let now = Instant::now();
        let timeout = app
            .gestures
            .timers()
            .next_wakeup(now)
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, Instant::now()),
                Event::FocusLost => input::handle_focus_lost(app),
                _ => {}
            }
        }

        input::handle_tick(app, Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_hit_testing() {
        let mut board = Board::new();
        let task = board.on_create("a", "", "");
        let mut layout = BoardLayout::default();
        layout.bubbles.push((Rect::new(4, 3, 4, 1), task.id));
        layout.create_button = Some(Rect::new(10, 0, 5, 1));

        assert_eq!(layout.bubble_at(Point::new(4, 3)), Some(task.id));
        assert_eq!(layout.bubble_at(Point::new(7, 3)), Some(task.id));
        assert_eq!(layout.bubble_at(Point::new(8, 3)), None);
        assert!(layout.on_create_button(Point::new(14, 0)));
        assert!(!layout.on_create_button(Point::new(15, 0)));
    }

    #[test]
    fn test_layout_container_rects() {
        let mut layout = BoardLayout::default();
        assert_eq!(layout.container_rect(Status::Todo), None);
        layout.set_container(Status::Done, Rect::new(0, 10, 20, 5));
        assert_eq!(
            layout.container_rect(Status::Done),
            Some(ContainerRect::new(10, 0, 19, 14))
        );
    }

    #[test]
    fn test_forget_task_closes_views() {
        let mut board = Board::new();
        let task = board.on_create("a", "", "");
        let mut app = App::new(board, &AppConfig::default());
        app.open_details(task.id);
        assert_eq!(app.mode, Mode::Details);
        app.forget_task(task.id);
        assert_eq!(app.details, None);
        assert_eq!(app.mode, Mode::Board);

        app.open_edit_form(task.id);
        assert_eq!(app.mode, Mode::Form);
        app.forget_task(task.id);
        assert!(app.form.is_none());
        assert_eq!(app.mode, Mode::Board);
    }

    #[test]
    fn test_open_details_of_missing_task_is_noop() {
        let mut board = Board::new();
        let task = board.on_create("a", "", "");
        board.on_delete(task.id, &mut |_: &str| true);
        let mut app = App::new(board, &AppConfig::default());
        app.open_details(task.id);
        assert_eq!(app.mode, Mode::Board);
        app.ask_delete(task.id);
        assert_eq!(app.mode, Mode::Board);
    }
}
