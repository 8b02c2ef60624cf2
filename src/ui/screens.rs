use std::cmp::Ordering;
use std::collections::HashSet;

use crate::filter::{filter_entries, FilterQuery};
use crate::models::{Entry, Song, SongId};

/// Table columns that can be sorted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SortColumn {
    Title,
    Producer,
    Performers,
    Link,
}

impl SortColumn {
    pub(crate) const ALL: [SortColumn; 4] = [
        SortColumn::Title,
        SortColumn::Producer,
        SortColumn::Performers,
        SortColumn::Link,
    ];

    pub(crate) fn header(self) -> &'static str {
        match self {
            SortColumn::Title => "Title",
            SortColumn::Producer => "Producer",
            SortColumn::Performers => "Performers",
            SortColumn::Link => "Link",
        }
    }

    fn key(self, song: &Song) -> &str {
        match self {
            SortColumn::Title => &song.title,
            SortColumn::Producer => &song.producer,
            SortColumn::Performers => &song.performers,
            SortColumn::Link => &song.link,
        }
    }

    fn compare(self, a: &Song, b: &Song) -> Ordering {
        let (a, b) = (self.key(a), self.key(b));
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SortState {
    pub(crate) column: SortColumn,
    pub(crate) descending: bool,
}

/// What the table currently shows: the store filtered by `query`, then
/// sorted. The store itself is never reordered.
#[derive(Debug, Default)]
pub(crate) struct CatalogView {
    pub(crate) rows: Vec<Entry>,
    pub(crate) query: FilterQuery,
    pub(crate) sort: Option<SortState>,
    pub(crate) selected: usize,
    pub(crate) marked: HashSet<SongId>,
    pub(crate) total: usize,
}

impl CatalogView {
    pub(crate) fn new(entries: &[Entry]) -> Self {
        let mut view = Self::default();
        view.refresh(entries);
        view
    }

    /// Rebuild the rows from the store. The highlighted song stays
    /// highlighted if it is still visible; marks on hidden rows are dropped.
    pub(crate) fn refresh(&mut self, entries: &[Entry]) {
        let focused = self.current().map(|entry| entry.id);

        self.rows = filter_entries(entries, &self.query)
            .into_iter()
            .cloned()
            .collect();
        if let Some(sort) = self.sort {
            self.rows.sort_by(|a, b| {
                let ordering = sort.column.compare(&a.song, &b.song);
                if sort.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        self.total = entries.len();

        let visible: HashSet<SongId> = self.rows.iter().map(|entry| entry.id).collect();
        self.marked.retain(|id| visible.contains(id));

        if let Some(pos) = focused.and_then(|id| self.position(id)) {
            self.selected = pos;
        }
        self.ensure_in_bounds();
    }

    pub(crate) fn set_query(&mut self, query: FilterQuery, entries: &[Entry]) {
        self.query = query;
        self.refresh(entries);
    }

    pub(crate) fn reset_query(&mut self, entries: &[Entry]) {
        self.query.reset();
        self.refresh(entries);
    }

    /// Cycle a column through ascending, descending and unsorted. Switching
    /// to another column starts at ascending.
    pub(crate) fn toggle_sort(&mut self, column: SortColumn, entries: &[Entry]) {
        self.sort = match self.sort {
            Some(state) if state.column == column && !state.descending => Some(SortState {
                column,
                descending: true,
            }),
            Some(state) if state.column == column => None,
            _ => Some(SortState {
                column,
                descending: false,
            }),
        };
        self.refresh(entries);
    }

    pub(crate) fn current(&self) -> Option<&Entry> {
        self.rows.get(self.selected)
    }

    pub(crate) fn position(&self, id: SongId) -> Option<usize> {
        self.rows.iter().position(|entry| entry.id == id)
    }

    pub(crate) fn select(&mut self, id: SongId) {
        if let Some(pos) = self.position(id) {
            self.selected = pos;
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Mark or unmark the highlighted row for deletion.
    pub(crate) fn toggle_mark(&mut self) -> Option<bool> {
        let id = self.current()?.id;
        if self.marked.remove(&id) {
            Some(false)
        } else {
            self.marked.insert(id);
            Some(true)
        }
    }

    pub(crate) fn is_marked(&self, id: SongId) -> bool {
        self.marked.contains(&id)
    }

    pub(crate) fn clear_marks(&mut self) {
        self.marked.clear();
    }

    /// Rows a delete request applies to, in display order: the marked rows,
    /// or the highlighted row when nothing is marked.
    pub(crate) fn selection(&self) -> Vec<&Entry> {
        if self.marked.is_empty() {
            return self.current().into_iter().collect();
        }
        self.rows
            .iter()
            .filter(|entry| self.marked.contains(&entry.id))
            .collect()
    }

    fn ensure_in_bounds(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}
