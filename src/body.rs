//! Generic row/column grid shared by the month and year views.

use crate::types::YearGrid;

/// A single cell of the calendar body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    /// Day of month (month view) or month number (year view).
    pub value: u32,
    pub label: String,
    pub enabled: bool,
}

impl CalendarCell {
    pub fn new(value: u32, label: impl Into<String>, enabled: bool) -> Self {
        CalendarCell {
            value,
            label: label.into(),
            enabled,
        }
    }
}

/// Grid of cells with an optional leading gap in the first row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarBody {
    /// Label of the period shown by the grid (month or year).
    pub label: String,
    pub rows: Vec<Vec<CalendarCell>>,
    pub num_cols: usize,
    /// Free leading cells needed to draw the label in the first row.
    pub label_min_required_cells: usize,
    /// Index of the focused cell counted over cells only (no gaps).
    pub active_cell: usize,
    pub selected_value: Option<u32>,
    pub today_value: Option<u32>,
}

impl CalendarBody {
    /// Lay out `cells` in rows of `num_cols`, leaving `first_row_offset`
    /// blank positions at the start of the first row.
    pub fn layout(
        cells: Vec<CalendarCell>,
        num_cols: usize,
        first_row_offset: usize,
    ) -> Vec<Vec<CalendarCell>> {
        let num_cols = num_cols.max(1);
        let mut rows = Vec::new();
        let mut row = Vec::with_capacity(num_cols);
        let mut row_capacity = num_cols - first_row_offset.min(num_cols - 1);

        for cell in cells {
            row.push(cell);
            if row.len() == row_capacity {
                rows.push(std::mem::replace(&mut row, Vec::with_capacity(num_cols)));
                row_capacity = num_cols;
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
        rows
    }

    /// Blank positions before the first cell.
    pub fn first_row_offset(&self) -> usize {
        match self.rows.first() {
            Some(first) if !first.is_empty() => self.num_cols.saturating_sub(first.len()),
            _ => 0,
        }
    }

    /// Whether the label is drawn inside the first row instead of on its own.
    pub fn label_in_first_row(&self) -> bool {
        self.first_row_offset() >= self.label_min_required_cells
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&CalendarCell> {
        let col = if row == 0 {
            col.checked_sub(self.first_row_offset())?
        } else {
            col
        };
        self.rows.get(row)?.get(col)
    }

    /// Value reported by clicking a position, or `None` if the cell is
    /// missing or disabled.
    pub fn cell_clicked(&self, row: usize, col: usize) -> Option<u32> {
        self.cell_at(row, col)
            .filter(|cell| cell.enabled)
            .map(|cell| cell.value)
    }

    pub fn is_active_cell(&self, row: usize, col: usize) -> bool {
        let position = row * self.num_cols + col;
        let offset = self.first_row_offset();
        if row == 0 && col < offset {
            return false;
        }
        position - offset == self.active_cell
    }

    /// Grid position of the cell holding `value`.
    pub fn position_of(&self, value: u32) -> Option<(usize, usize)> {
        let offset = self.first_row_offset();
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|cell| cell.value == value).map(|c| {
                if r == 0 { (r, c + offset) } else { (r, c) }
            })
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.rows.iter().flatten()
    }
}

/// Month delta for moving `rows` rows up (negative) or down (positive) from
/// zero-based `month0` in the year grid.
///
/// Every year owns `leading_slots + 12` consecutive grid slots; label slots
/// are skipped by continuing in the same column.
pub fn vertical_month_delta(grid: YearGrid, month0: u32, rows: i32) -> i32 {
    let cols = grid.num_cols() as i32;
    let leading = grid.leading_slots() as i32;
    let slots_per_year = leading + 12;
    let step = if rows < 0 { -cols } else { cols };

    let mut slot = leading + month0 as i32;
    for _ in 0..rows.unsigned_abs() {
        loop {
            slot += step;
            if slot.rem_euclid(slots_per_year) >= leading {
                break;
            }
        }
    }

    let year = slot.div_euclid(slots_per_year);
    let month = slot.rem_euclid(slots_per_year) - leading;
    year * 12 + month - month0 as i32
}
