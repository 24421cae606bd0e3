use crate::error::{workbook_error, Error, NormalizerResult};
use crate::utils::cell::EMPTY_CELL;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;
use tracing::debug;

/// A single worksheet with its label
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub range: Range<Data>,
}

impl Sheet {
    /// Cell at an absolute position, `Data::Empty` outside the used range
    pub fn cell(&self, row: u32, column: u32) -> &Data {
        self.range
            .get_value((row, column))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Last used row, if the sheet has any cells
    pub fn last_row(&self) -> Option<u32> {
        self.range.end().map(|(row, _)| row)
    }
}

/// A decoded workbook with every sheet read up front, in workbook order
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Decode workbook bytes (xlsx, xlsm, xlsb, xls or ods)
    pub fn from_bytes(bytes: Vec<u8>) -> NormalizerResult<Self> {
        if bytes.is_empty() {
            return Err(workbook_error("Workbook is empty"));
        }

        let mut reader = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let names = reader.sheet_names();

        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = reader.worksheet_range(&name).map_err(|e| {
                Error::Workbook(format!("Failed to read sheet '{}': {}", name, e))
            })?;
            debug!("Read sheet '{}' ({:?} cells)", name, range.get_size());
            sheets.push(Sheet { name, range });
        }

        Ok(Self { sheets })
    }

    /// Build a workbook from already decoded sheets
    pub fn from_sheets(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.sheets.first()
    }
}
