// Selection frame that moves over the upgrade tree
//
// The tree has three rows of 2, 4 and 1 buttons. Left/right wrap inside a
// row, up/down jump between rows along the tree edges, next/previous walk
// all buttons row by row (used by the on-screen controls).

use super::buttons::{OkButton, UpgradeButton};
use crate::common::math::{wrap_next, wrap_prev};
use crate::engine::renderer::{Color, DrawList, Layer};
use crate::game::upgrades::UpgradeState;
use glam::Vec2;

/// Button indices per row
pub const TREE_ROWS: [&[usize]; 3] = [&[0, 1], &[2, 3, 4, 5], &[6]];

/// Stroke of the selection frame in logical pixels
pub const FRAME_LINE_WIDTH: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Cell below `cell`
fn below(cell: Cell) -> Cell {
    match cell.row {
        0 => Cell::new(1, if cell.column == 0 { 1 } else { 2 }),
        1 => Cell::new(2, 0),
        _ => Cell::new(0, 0),
    }
}

/// Cell above `cell`
fn above(cell: Cell) -> Cell {
    match cell.row {
        0 => Cell::new(2, 0),
        1 => Cell::new(0, if cell.column < 2 { 0 } else { 1 }),
        _ => Cell::new(1, 0),
    }
}

/// Owns the upgrade buttons, the OK button and the texts that follow the selection
#[derive(Debug)]
pub struct Selector {
    buttons: Vec<UpgradeButton>,
    ok_button: OkButton,
    selected: Cell,
    description: &'static str,
    error_text: &'static str,
}

impl Selector {
    /// `buttons` must be the seven upgrade buttons in tree order
    pub fn new(buttons: Vec<UpgradeButton>, ok_button: OkButton) -> Self {
        let mut selector = Self {
            buttons,
            ok_button,
            selected: Cell::default(),
            description: "",
            error_text: "",
        };
        selector.select();
        selector
    }

    fn row_len(&self, row: usize) -> usize {
        TREE_ROWS[row].len()
    }

    /// Move to `cell` and update everything that depends on the selection
    fn move_to(&mut self, cell: Cell) {
        self.deselect();
        self.selected = cell;
        self.select();
    }

    fn deselect(&mut self) {
        let index = self.selected_index();
        if let Some(button) = self.buttons.get_mut(index) {
            button.deselect();
        }
    }

    fn select(&mut self) {
        let index = self.selected_index();
        let Some(button) = self.buttons.get_mut(index) else {
            return;
        };
        button.select();

        let state = button.state();
        self.description = button.upgrade.description();
        self.error_text = state.error_text();
        self.ok_button
            .set_selectable(state == UpgradeState::Available);
    }

    pub fn left(&mut self) {
        let Cell { row, column } = self.selected;
        self.move_to(Cell::new(row, wrap_prev(column, self.row_len(row))));
    }

    pub fn right(&mut self) {
        let Cell { row, column } = self.selected;
        self.move_to(Cell::new(row, wrap_next(column, self.row_len(row))));
    }

    pub fn up(&mut self) {
        self.move_to(above(self.selected));
    }

    pub fn down(&mut self) {
        self.move_to(below(self.selected));
    }

    /// Next button, row by row
    pub fn next(&mut self) {
        let Cell { row, column } = self.selected;
        let cell = if column + 1 >= self.row_len(row) {
            Cell::new(wrap_next(row, TREE_ROWS.len()), 0)
        } else {
            Cell::new(row, column + 1)
        };
        self.move_to(cell);
    }

    /// Previous button, row by row
    pub fn previous(&mut self) {
        let Cell { row, column } = self.selected;
        let cell = if column == 0 {
            let row = wrap_prev(row, TREE_ROWS.len());
            Cell::new(row, self.row_len(row) - 1)
        } else {
            Cell::new(row, column - 1)
        };
        self.move_to(cell);
    }

    /// Select a button by its index in tree order
    pub fn select_by_index(&mut self, index: usize) {
        self.deselect();
        self.selected = Cell::default();
        for _ in 0..index {
            self.next();
        }
        self.select();
    }

    pub fn selected_cell(&self) -> Cell {
        self.selected
    }

    /// Index of the selected button in tree order
    pub fn selected_index(&self) -> usize {
        TREE_ROWS[self.selected.row][self.selected.column]
    }

    pub fn selected_button(&self) -> Option<&UpgradeButton> {
        self.buttons.get(self.selected_index())
    }

    pub fn buttons(&self) -> &[UpgradeButton] {
        &self.buttons
    }

    pub fn ok_button(&self) -> &OkButton {
        &self.ok_button
    }

    /// Description of the selected upgrade
    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn error_text(&self) -> &'static str {
        self.error_text
    }

    /// Outline around the selected button
    pub fn draw(&self, list: &mut DrawList) {
        if let Some(button) = self.selected_button() {
            list.outline(
                Layer::Screen,
                button.center,
                button.size + Vec2::splat(FRAME_LINE_WIDTH * 2.0),
                FRAME_LINE_WIDTH,
                Color::hex(0xff8c00),
            );
        }
    }
}
