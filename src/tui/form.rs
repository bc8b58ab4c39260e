use crate::model::task::{DEFAULT_EMOJI, EMOJI_PALETTE, Task, TaskId};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Single- or multi-line text buffer with a byte cursor on a grapheme boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn new(text: &str) -> Self {
        TextField {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i);
    }

    /// (line, byte offset within line) of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, self.cursor - line_start)
    }
}

/// Markup the description toolbar can insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    Bold,
    Strike,
    List,
}

impl MarkupKind {
    fn snippet(self) -> &'static str {
        match self {
            MarkupKind::Bold => "**text**",
            MarkupKind::Strike => "~~text~~",
            MarkupKind::List => "\n- item",
        }
    }
}

/// Which form field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Emoji,
    Title,
    Description,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Emoji => FormField::Title,
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Emoji,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Emoji => FormField::Description,
            FormField::Title => FormField::Emoji,
            FormField::Description => FormField::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TaskId),
}

/// Create/edit form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub mode: FormMode,
    pub title: TextField,
    pub description: TextField,
    pub emoji: String,
    pub focus: FormField,
}

impl TaskForm {
    pub fn create(default_emoji: Option<&str>) -> Self {
        TaskForm {
            mode: FormMode::Create,
            title: TextField::default(),
            description: TextField::default(),
            emoji: default_emoji.unwrap_or(DEFAULT_EMOJI).to_string(),
            focus: FormField::Title,
        }
    }

    pub fn edit(task: &Task) -> Self {
        TaskForm {
            mode: FormMode::Edit(task.id),
            title: TextField::new(&task.title),
            description: TextField::new(&task.description),
            emoji: task.emoji.clone(),
            focus: FormField::Title,
        }
    }

    pub fn editing(&self) -> Option<TaskId> {
        match self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    /// Field that receives typed text, if any
    pub fn focused_text(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Emoji => None,
        }
    }

    /// Insert a markup snippet at the description cursor
    pub fn insert_markup(&mut self, kind: MarkupKind) {
        self.focus = FormField::Description;
        self.description.insert_str(kind.snippet());
    }

    /// Palette index of the selected emoji, if it is in the palette
    pub fn palette_index(&self) -> Option<usize> {
        EMOJI_PALETTE.iter().position(|e| *e == self.emoji)
    }

    /// Step through the palette; an off-palette emoji steps to either end
    pub fn cycle_emoji(&mut self, forward: bool) {
        let len = EMOJI_PALETTE.len();
        let idx = match (self.palette_index(), forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.emoji = EMOJI_PALETTE[idx].to_string();
    }

    pub fn pick_emoji(&mut self, idx: usize) {
        if let Some(emoji) = EMOJI_PALETTE.get(idx) {
            self.emoji = (*emoji).to_string();
        }
        self.focus = FormField::Emoji;
    }
}
