use std::mem;

use crossterm::event::KeyCode;
use log::{info, warn};
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::persistence::{JsonFile, SongStorage};

use super::forms::{
    performer_rows, ConfirmDelete, FilterField, SongField, SongForm, PERFORMERS_PER_ROW,
};
use super::helpers::{
    cell_width, centered_rect, key_hints, status_kind, StatusKind, StatusMessage,
};
use super::screens::{CatalogView, SortColumn};
use super::theme::Theme;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Bordered single line holding the three filter inputs.
const FILTER_BAR_HEIGHT: u16 = 3;
/// Rows skipped by PageUp / PageDown.
const PAGE: isize = 10;

/// Which input currently owns the keyboard.
enum Mode {
    Normal,
    Filtering(FilterField),
    AddingSong(SongForm),
    ConfirmDelete(ConfirmDelete),
}

/// Central application state for the terminal UI.
pub struct App<S: SongStorage = JsonFile> {
    catalog: Catalog<S>,
    view: CatalogView,
    mode: Mode,
    status: Option<StatusMessage>,
    theme: Theme,
}

impl<S: SongStorage> App<S> {
    pub fn new(catalog: Catalog<S>) -> Self {
        let view = CatalogView::new(catalog.entries());
        Self {
            catalog,
            view,
            mode: Mode::Normal,
            status: None,
            theme: Theme::default(),
        }
    }

    /// Route a key press to the active mode. Returns `true` when the user
    /// asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Filtering(field) => self.handle_filter_key(code, field),
            Mode::AddingSong(form) => self.handle_add_song(code, form),
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm),
        };

        exit
    }

    /// Ctrl+R clears all filters from any mode except the modal dialogs.
    pub(crate) fn handle_ctrl_r(&mut self) {
        if matches!(self.mode, Mode::Normal | Mode::Filtering(_)) {
            self.reset_filters();
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.view.move_selection(-1),
            KeyCode::Down => self.view.move_selection(1),
            KeyCode::PageUp => self.view.move_selection(-PAGE),
            KeyCode::PageDown => self.view.move_selection(PAGE),
            KeyCode::Home => self.view.select_first(),
            KeyCode::End => self.view.select_last(),
            KeyCode::Char(' ') => match self.view.toggle_mark() {
                Some(_) => {
                    let count = self.view.marked.len();
                    self.set_status(format!("{count} song(s) selected."), StatusKind::Info);
                }
                None => self.set_status("No song to select.", StatusKind::Warning),
            },
            KeyCode::Char('c') => {
                self.view.clear_marks();
                self.set_status("Selection cleared.", StatusKind::Info);
            }
            KeyCode::Char('+') | KeyCode::Char('a') => {
                self.clear_status();
                return Mode::AddingSong(SongForm::default());
            }
            KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Delete => {
                return self.request_delete();
            }
            KeyCode::Enter => self.open_current_link(),
            KeyCode::Char('f') | KeyCode::Char('/') => {
                self.clear_status();
                return Mode::Filtering(FilterField::Song);
            }
            KeyCode::Char('r') => self.reset_filters(),
            KeyCode::Char(ch @ '1'..='4') => {
                let column = SortColumn::ALL[ch as usize - '1' as usize];
                self.sort_by(column);
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                self.set_status(format!("Theme: {}.", self.theme.name()), StatusKind::Info);
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_filter_key(&mut self, code: KeyCode, field: FilterField) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Enter => return Mode::Normal,
            KeyCode::Tab => return Mode::Filtering(field.next()),
            KeyCode::BackTab => return Mode::Filtering(field.previous()),
            KeyCode::Up => self.view.move_selection(-1),
            KeyCode::Down => self.view.move_selection(1),
            KeyCode::Backspace => {
                let mut query = self.view.query.clone();
                field.value_mut(&mut query).pop();
                self.view.set_query(query, self.catalog.entries());
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                let mut query = self.view.query.clone();
                field.value_mut(&mut query).push(ch);
                self.view.set_query(query, self.catalog.entries());
            }
            _ => {}
        }
        Mode::Filtering(field)
    }

    fn handle_add_song(&mut self, code: KeyCode, mut form: SongForm) -> Mode {
        let on_performers = form.active == SongField::Performers;
        match code {
            KeyCode::Esc => {
                self.set_status("Add cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::Down if !on_performers || code == KeyCode::Tab => {
                form.next_field()
            }
            KeyCode::BackTab | KeyCode::Up if !on_performers || code == KeyCode::BackTab => {
                form.previous_field()
            }
            KeyCode::Up => form.move_cursor(-(PERFORMERS_PER_ROW as isize)),
            KeyCode::Down => form.move_cursor(PERFORMERS_PER_ROW as isize),
            KeyCode::Left if on_performers => form.move_cursor(-1),
            KeyCode::Right if on_performers => form.move_cursor(1),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.catalog.add(form.to_draft()) {
                Ok(id) => {
                    self.refresh_view();
                    self.view.select(id);
                    let title = self
                        .catalog
                        .get(id)
                        .map(|entry| entry.song.display_title())
                        .unwrap_or_default();
                    self.set_status(format!("Added '{title}'."), StatusKind::Info);
                    return Mode::Normal;
                }
                Err(err) => {
                    form.error = Some(err.detail());
                    self.report(&err);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::AddingSong(form)
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.catalog.delete_ids(&confirm.ids) {
                    Ok(removed) => {
                        self.view.clear_marks();
                        self.refresh_view();
                        self.set_status(
                            format!("Deleted {} song(s).", removed.len()),
                            StatusKind::Info,
                        );
                        Mode::Normal
                    }
                    Err(err) => {
                        self.report(&err);
                        if matches!(err, CatalogError::Io { .. }) {
                            Mode::ConfirmDelete(confirm)
                        } else {
                            self.refresh_view();
                            Mode::Normal
                        }
                    }
                }
            }
            _ => Mode::ConfirmDelete(confirm),
        }
    }

    /// Open the confirmation dialog for the current selection, or warn when
    /// there is nothing to delete.
    fn request_delete(&mut self) -> Mode {
        let selection = self.view.selection();
        let confirm = ConfirmDelete {
            ids: selection.iter().map(|entry| entry.id).collect(),
            titles: selection
                .iter()
                .map(|entry| entry.song.title.clone())
                .collect(),
        };

        if confirm.ids.is_empty() {
            self.report(&CatalogError::EmptySelection);
            return Mode::Normal;
        }
        self.clear_status();
        Mode::ConfirmDelete(confirm)
    }

    fn open_current_link(&mut self) {
        let Some(entry) = self.view.current() else {
            return;
        };
        let song = entry.song.clone();
        if !song.has_link() {
            self.set_status("This song does not have a link.", StatusKind::Warning);
            return;
        }

        let link = song.link.trim();
        match open_link(link) {
            Ok(()) => {
                info!("opened {link}");
                self.set_status(format!("Opened {}.", song.display_title()), StatusKind::Info);
            }
            Err(err) => {
                warn!("failed to open {link}: {err}");
                self.set_status(format!("Failed to open link: {err}"), StatusKind::Error);
            }
        }
    }

    fn reset_filters(&mut self) {
        self.view.reset_query(self.catalog.entries());
        self.set_status("Filters cleared.", StatusKind::Info);
    }

    fn sort_by(&mut self, column: SortColumn) {
        self.view.toggle_sort(column, self.catalog.entries());
        let message = match self.view.sort {
            Some(sort) if sort.descending => format!("Sorted by {} (descending).", column.header()),
            Some(_) => format!("Sorted by {} (ascending).", column.header()),
            None => "Showing catalog order.".to_string(),
        };
        self.set_status(message, StatusKind::Info);
    }

    fn refresh_view(&mut self) {
        self.view.refresh(self.catalog.entries());
    }

    fn report(&mut self, err: &CatalogError) {
        let kind = status_kind(err);
        if kind == StatusKind::Error {
            warn!("{}", err.detail());
        }
        self.set_status(err.detail(), kind);
    }

    fn set_status<T: Into<String>>(&mut self, text: T, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_filter_bar(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::AddingSong(form) => self.draw_song_form(frame, area, form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Normal | Mode::Filtering(_) => {}
        }
    }

    fn draw_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let accent = self.theme.accent();
        let active = match self.mode {
            Mode::Filtering(field) => Some(field),
            _ => None,
        };

        let mut block = Block::default().borders(Borders::ALL).title("Filters");
        if active.is_some() {
            block = block.border_style(Style::default().fg(accent));
        }
        let inner = block.inner(area);

        let mut spans = Vec::new();
        let mut offset = 0u16;
        let mut cursor_x = None;
        for (index, field) in FilterField::ALL.into_iter().enumerate() {
            if index > 0 {
                let separator = "  |  ";
                offset = offset.saturating_add(cell_width(separator));
                spans.push(Span::styled(separator, Style::default().fg(Color::DarkGray)));
            }
            let label = format!("{}: ", field.label());
            let value = field.value(&self.view.query).to_string();
            let value_style = if active == Some(field) {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            offset = offset.saturating_add(cell_width(&label));
            spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
            offset = offset.saturating_add(cell_width(&value));
            if active == Some(field) {
                cursor_x = Some(inner.x.saturating_add(offset));
            }
            spans.push(Span::styled(value, value_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
        if let Some(x) = cursor_x {
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let accent = self.theme.accent();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" Songs {}/{} ", self.view.rows.len(), self.view.total));

        if self.catalog.is_empty() || self.view.rows.is_empty() {
            let text = if self.catalog.is_empty() {
                "No songs yet. Press '+' to add one."
            } else {
                "No songs match the current filters. Press 'r' to reset."
            };
            let message = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let header_cells = std::iter::once(Cell::from("")).chain(SortColumn::ALL.map(|column| {
            let arrow = match self.view.sort {
                Some(sort) if sort.column == column && sort.descending => " v",
                Some(sort) if sort.column == column => " ^",
                _ => "",
            };
            Cell::from(format!("{}{arrow}", column.header()))
        }));
        let header = Row::new(header_cells).style(
            Style::default()
                .bg(accent)
                .fg(self.theme.on_accent())
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.view.rows.iter().map(|entry| {
            let mark = if self.view.is_marked(entry.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let song = &entry.song;
            Row::new(vec![
                Cell::from(mark),
                Cell::from(song.title.clone()),
                Cell::from(song.producer.clone()),
                Cell::from(song.performers.clone()),
                Cell::from(song.link.clone()).style(Style::default().fg(Color::Cyan)),
            ])
        });

        let widths = [
            Constraint::Length(3),
            Constraint::Percentage(28),
            Constraint::Percentage(20),
            Constraint::Percentage(26),
            Constraint::Percentage(26),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(self.view.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match &self.mode {
            Mode::Normal => key_hints(&[
                ("[+]", "Add"),
                ("[Space]", "Select"),
                ("[-]", "Delete"),
                ("[Enter]", "Open link"),
                ("[f]", "Filter"),
                ("[r]", "Reset filters"),
                ("[1-4]", "Sort"),
                ("[t]", "Theme"),
                ("[q]", "Quit"),
            ]),
            Mode::Filtering(_) => key_hints(&[
                ("[Tab]", "Next filter"),
                ("[Ctrl+R]", "Reset"),
                ("[Enter/Esc]", "Done"),
            ]),
            Mode::AddingSong(_) => key_hints(&[
                ("[Tab]", "Next field"),
                ("[Space]", "Toggle performer"),
                ("[Enter]", "Save"),
                ("[Esc]", "Cancel"),
            ]),
            Mode::ConfirmDelete(_) => key_hints(&[("[y]", "Delete"), ("[n/Esc]", "Cancel")]),
        }
    }

    fn draw_song_form(&self, frame: &mut Frame, area: Rect, form: &SongForm) {
        let popup_area = centered_rect(80, 60, area);
        frame.render_widget(Clear, popup_area);

        let accent = self.theme.accent();
        let block = Block::default()
            .title("Add Song")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let performer_lines = form.build_performer_lines(accent);
        let custom_row = 2 + performer_rows();

        let mut lines = vec![
            form.build_line(SongField::Title, accent),
            form.build_line(SongField::Producer, accent),
        ];
        lines.extend(performer_lines);
        lines.push(form.build_line(SongField::Custom, accent));
        lines.push(form.build_line(SongField::Link, accent));
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save | Tab to switch | Space picks a performer | Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);

        let row = match form.active {
            SongField::Title => Some(0),
            SongField::Producer => Some(1),
            SongField::Custom => Some(custom_row),
            SongField::Link => Some(custom_row + 1),
            SongField::Performers => None,
        };
        if let Some(row) = row {
            let prefix = cell_width(&format!("{}: ", form.active.label()));
            let x = inner
                .x
                .saturating_add(prefix)
                .saturating_add(cell_width(form.value(form.active)));
            let y = inner.y.saturating_add(row as u16);
            if y < inner.bottom() {
                frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), y));
            }
        }
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Songs").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(confirm.summary()),
            Line::from("The song file is updated immediately."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Song;
    use crate::persistence::MemoryStorage;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app_with(songs: Vec<Song>) -> App<MemoryStorage> {
        App::new(Catalog::startup(MemoryStorage::with_songs(songs)).unwrap())
    }

    fn seeded() -> App<MemoryStorage> {
        app_with(vec![
            Song::new("A", "X", "Miku", ""),
            Song::new("B", "X", "Rin", "https://example.com"),
            Song::new("C", "Y", "Len", ""),
        ])
    }

    fn press(app: &mut App<MemoryStorage>, keys: &str) {
        for ch in keys.chars() {
            app.handle_key(KeyCode::Char(ch));
        }
    }

    fn stored_titles(app: &App<MemoryStorage>) -> Vec<String> {
        app.catalog
            .storage()
            .songs()
            .iter()
            .map(|song| song.title.clone())
            .collect()
    }

    #[test]
    fn quit_keys_exit() {
        let mut app = seeded();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
    }

    #[test]
    fn add_song_through_form() {
        let mut app = app_with(Vec::new());
        app.handle_key(KeyCode::Char('+'));
        press(&mut app, "Song");
        app.handle_key(KeyCode::Tab);
        press(&mut app, "Producer");
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Tab);
        press(&mut app, "Extra");
        app.handle_key(KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        let stored = app.catalog.storage().songs();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].performers, "初音ミク / Extra");
        assert_eq!(app.view.rows.len(), 1);
    }

    #[test]
    fn invalid_form_stays_open_with_error() {
        let mut app = app_with(Vec::new());
        app.handle_key(KeyCode::Char('+'));
        press(&mut app, "Only a title");
        app.handle_key(KeyCode::Enter);

        match &app.mode {
            Mode::AddingSong(form) => assert_eq!(form.error.as_deref(), Some("Producer is required.")),
            _ => panic!("form should stay open"),
        }
        assert_eq!(app.catalog.storage().save_count(), 0);
    }

    #[test]
    fn delete_marked_rows_after_confirmation() {
        let mut app = seeded();
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::End);
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Char('-'));
        assert!(matches!(app.mode, Mode::ConfirmDelete(_)));
        app.handle_key(KeyCode::Char('y'));

        assert_eq!(stored_titles(&app), ["B"]);
        assert!(app.view.marked.is_empty());
    }

    #[test]
    fn declining_confirmation_keeps_songs() {
        let mut app = seeded();
        app.handle_key(KeyCode::Char('-'));
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.catalog.len(), 3);
        assert_eq!(app.catalog.storage().save_count(), 0);
    }

    #[test]
    fn delete_with_nothing_selected_warns() {
        let mut app = app_with(Vec::new());
        app.handle_key(KeyCode::Char('-'));
        assert!(matches!(app.mode, Mode::Normal));
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
        assert_eq!(status.text, "No songs selected for deletion.");
    }

    #[test]
    fn delete_follows_sorted_view_not_store_order() {
        let mut app = seeded();
        press(&mut app, "11");
        // Descending by title: C, B, A. The highlight followed A to the bottom.
        assert_eq!(app.view.current().unwrap().song.title, "A");
        app.handle_key(KeyCode::Home);
        app.handle_key(KeyCode::Char('-'));
        app.handle_key(KeyCode::Char('y'));
        assert_eq!(stored_titles(&app), ["A", "B"]);
    }

    #[test]
    fn filter_typing_narrows_rows_and_reset_restores() {
        let mut app = seeded();
        app.handle_key(KeyCode::Char('f'));
        app.handle_key(KeyCode::Tab);
        press(&mut app, "x");
        app.handle_key(KeyCode::Tab);
        press(&mut app, "RIN");
        assert_eq!(app.view.rows.len(), 1);
        assert_eq!(app.view.rows[0].song.title, "B");

        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.view.rows.len(), 3);
        assert!(app.view.query.is_empty());
    }

    #[test]
    fn added_song_respects_active_filter() {
        let mut app = seeded();
        app.handle_key(KeyCode::Char('f'));
        press(&mut app, "A");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.view.rows.len(), 1);

        app.handle_key(KeyCode::Char('+'));
        press(&mut app, "Z");
        app.handle_key(KeyCode::Tab);
        press(&mut app, "P");
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.catalog.len(), 4);
        assert_eq!(app.view.rows.len(), 1);
    }

    #[test]
    fn song_without_link_reports_warning() {
        let mut app = seeded();
        app.handle_key(KeyCode::Enter);
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.text, "This song does not have a link.");
    }

    #[test]
    fn theme_key_cycles_theme() {
        let mut app = seeded();
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Rin);
    }

    #[test]
    fn oversized_inputs_draw_without_overflow() {
        let mut app = seeded();
        let long = "x".repeat(70_000);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        app.handle_key(KeyCode::Char('f'));
        let mut query = app.view.query.clone();
        query.song = long.clone();
        app.view.set_query(query, app.catalog.entries());
        terminal.draw(|frame| app.draw(frame)).unwrap();
        app.handle_key(KeyCode::Esc);

        app.handle_key(KeyCode::Char('+'));
        press(&mut app, &long);
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }

    #[test]
    fn draws_every_mode_without_panicking() {
        let mut app = seeded();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        app.handle_key(KeyCode::Char('f'));
        terminal.draw(|frame| app.draw(frame)).unwrap();
        app.handle_key(KeyCode::Esc);

        app.handle_key(KeyCode::Char('+'));
        terminal.draw(|frame| app.draw(frame)).unwrap();
        app.handle_key(KeyCode::Esc);

        app.handle_key(KeyCode::Char('-'));
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let mut tiny = Terminal::new(TestBackend::new(10, 4)).unwrap();
        tiny.draw(|frame| app.draw(frame)).unwrap();
    }
}
