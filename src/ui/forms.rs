use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::config::PERFORMER_VOCABULARY;
use crate::filter::FilterQuery;
use crate::models::{SongDraft, SongId};

/// Vocabulary entries shown per line in the add form.
pub(crate) const PERFORMERS_PER_ROW: usize = 4;

/// Fields in the add-song form, in focus order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum SongField {
    #[default]
    Title,
    Producer,
    Performers,
    Custom,
    Link,
}

impl SongField {
    pub(crate) fn label(self) -> &'static str {
        match self {
            SongField::Title => "Title",
            SongField::Producer => "Producer",
            SongField::Performers => "Performers",
            SongField::Custom => "Other performers",
            SongField::Link => "Link",
        }
    }

    fn next(self) -> Self {
        match self {
            SongField::Title => SongField::Producer,
            SongField::Producer => SongField::Performers,
            SongField::Performers => SongField::Custom,
            SongField::Custom => SongField::Link,
            SongField::Link => SongField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            SongField::Title => SongField::Link,
            SongField::Producer => SongField::Title,
            SongField::Performers => SongField::Producer,
            SongField::Custom => SongField::Performers,
            SongField::Link => SongField::Custom,
        }
    }
}

/// Form state for adding a song. Performers are picked from the fixed
/// vocabulary; extra names go into the comma separated custom field.
#[derive(Default, Clone, Debug)]
pub(crate) struct SongForm {
    pub(crate) title: String,
    pub(crate) producer: String,
    pub(crate) custom: String,
    pub(crate) link: String,
    /// Vocabulary indices in the order they were picked.
    pub(crate) picked: Vec<usize>,
    /// Highlighted vocabulary entry while the performer field has focus.
    pub(crate) cursor: usize,
    pub(crate) active: SongField,
    pub(crate) error: Option<String>,
}

impl SongForm {
    pub(crate) fn next_field(&mut self) {
        self.active = self.active.next();
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = self.active.previous();
    }

    /// Move the vocabulary cursor, clamped to the list.
    pub(crate) fn move_cursor(&mut self, offset: isize) {
        let last = PERFORMER_VOCABULARY.len().saturating_sub(1) as isize;
        self.cursor = (self.cursor as isize + offset).clamp(0, last) as usize;
    }

    /// Pick or unpick the performer under the cursor.
    pub(crate) fn toggle_performer(&mut self) {
        if let Some(pos) = self.picked.iter().position(|&i| i == self.cursor) {
            self.picked.remove(pos);
        } else {
            self.picked.push(self.cursor);
        }
    }

    pub(crate) fn is_picked(&self, index: usize) -> bool {
        self.picked.contains(&index)
    }

    /// Type a character into the focused field. In the performer list a space
    /// toggles the highlighted name instead.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            SongField::Title => self.title.push(ch),
            SongField::Producer => self.producer.push(ch),
            SongField::Custom => self.custom.push(ch),
            SongField::Link => self.link.push(ch),
            SongField::Performers => {
                if ch != ' ' {
                    return false;
                }
                self.toggle_performer();
            }
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            SongField::Title => {
                self.title.pop();
            }
            SongField::Producer => {
                self.producer.pop();
            }
            SongField::Custom => {
                self.custom.pop();
            }
            SongField::Link => {
                self.link.pop();
            }
            SongField::Performers => {
                self.picked.pop();
            }
        }
    }

    /// Collect the raw inputs. Validation happens in the catalog.
    pub(crate) fn to_draft(&self) -> SongDraft {
        SongDraft {
            title: self.title.clone(),
            producer: self.producer.clone(),
            performers: self
                .picked
                .iter()
                .filter_map(|&i| PERFORMER_VOCABULARY.get(i))
                .map(|name| name.to_string())
                .collect(),
            custom_performers: self.custom.clone(),
            link: self.link.clone(),
        }
    }

    pub(crate) fn value(&self, field: SongField) -> &str {
        match field {
            SongField::Title => &self.title,
            SongField::Producer => &self.producer,
            SongField::Custom => &self.custom,
            SongField::Link => &self.link,
            SongField::Performers => "",
        }
    }

    /// Render one text field line.
    pub(crate) fn build_line(&self, field: SongField, accent: Color) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;
        let placeholder = match field {
            SongField::Title | SongField::Producer => "<required>",
            SongField::Custom => "<comma separated>",
            SongField::Link | SongField::Performers => "<optional>",
        };

        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(accent)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Render the vocabulary as rows of toggles. The highlighted entry is
    /// reversed while the performer field has focus.
    pub(crate) fn build_performer_lines(&self, accent: Color) -> Vec<Line<'static>> {
        let is_active = self.active == SongField::Performers;
        let label = format!("{}: ", SongField::Performers.label());
        let indent = " ".repeat(label.len());

        PERFORMER_VOCABULARY
            .chunks(PERFORMERS_PER_ROW)
            .enumerate()
            .map(|(row, names)| {
                let prefix = if row == 0 { label.clone() } else { indent.clone() };
                let mut spans = vec![Span::raw(prefix)];
                for (offset, name) in names.iter().enumerate() {
                    let index = row * PERFORMERS_PER_ROW + offset;
                    let marker = if self.is_picked(index) { "[x]" } else { "[ ]" };
                    let mut style = if self.is_picked(index) {
                        Style::default().fg(accent)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    if is_active && index == self.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(Span::styled(format!("{marker} {name}"), style));
                    spans.push(Span::raw("  "));
                }
                Line::from(spans)
            })
            .collect()
    }
}

/// Number of lines the performer toggles take up in the form.
pub(crate) fn performer_rows() -> usize {
    PERFORMER_VOCABULARY.len().div_ceil(PERFORMERS_PER_ROW)
}

/// Filter inputs, in focus order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum FilterField {
    #[default]
    Song,
    Producer,
    Performer,
}

impl FilterField {
    pub(crate) const ALL: [FilterField; 3] =
        [FilterField::Song, FilterField::Producer, FilterField::Performer];

    pub(crate) fn label(self) -> &'static str {
        match self {
            FilterField::Song => "Song",
            FilterField::Producer => "Producer",
            FilterField::Performer => "Performer",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            FilterField::Song => FilterField::Producer,
            FilterField::Producer => FilterField::Performer,
            FilterField::Performer => FilterField::Song,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            FilterField::Song => FilterField::Performer,
            FilterField::Producer => FilterField::Song,
            FilterField::Performer => FilterField::Producer,
        }
    }

    pub(crate) fn value(self, query: &FilterQuery) -> &str {
        match self {
            FilterField::Song => &query.song,
            FilterField::Producer => &query.producer,
            FilterField::Performer => &query.performer,
        }
    }

    pub(crate) fn value_mut(self, query: &mut FilterQuery) -> &mut String {
        match self {
            FilterField::Song => &mut query.song,
            FilterField::Producer => &mut query.producer,
            FilterField::Performer => &mut query.performer,
        }
    }
}

/// Songs waiting on a Y/N answer before deletion.
#[derive(Clone, Debug)]
pub(crate) struct ConfirmDelete {
    pub(crate) ids: Vec<SongId>,
    pub(crate) titles: Vec<String>,
}

impl ConfirmDelete {
    /// Dialog headline. Lists up to three titles and summarizes the rest.
    pub(crate) fn summary(&self) -> String {
        const SHOWN: usize = 3;
        let mut names: Vec<String> = self
            .titles
            .iter()
            .take(SHOWN)
            .map(|title| format!("'{title}'"))
            .collect();
        if self.titles.len() > SHOWN {
            names.push(format!("and {} more", self.titles.len() - SHOWN));
        }
        format!("Delete {}?", names.join(", "))
    }
}
