#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}
#[derive(Clone, Copy)]
pub enum ColumnFooter {
    Show,
    Hide,
}

pub struct Column<'a, TRow, TCol> {
    align: Align,
    width: usize,
    footer: ColumnFooter,
    title: Option<String>,
    data: TCol,
    get_content: &'a dyn Fn(&TRow, &TCol) -> String,
}
impl<'a, TRow, TCol> Column<'a, TRow, TCol> {
    pub fn new(
        data: TCol,
        get_content: &'a dyn Fn(&TRow, &TCol) -> String,
    ) -> Self {
        Self {
            align: Align::Left,
            width: 0,
            footer: ColumnFooter::Show,
            title: None,
            data,
            get_content,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_footer(mut self, footer: ColumnFooter) -> Self {
        self.footer = footer;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Minimal number of characters for this column.  Longer cells are
    /// never truncated, they push the rest of the row to the right.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn content(&self, row: &TRow) -> String {
        (self.get_content)(row, &self.data)
    }
}

#[derive(Debug)]
enum RowData {
    Separator,
    Cells(Vec<String>),
    Headers,
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,

    // Column separator in the header row, same width as colsep
    pub header_colsep: String,
    pub sepchar: char,
}
impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: " ".to_string(),
            header_colsep: "|".to_string(),
            sepchar: '-',
        }
    }
}

pub struct Table<'a, TRow, TCol> {
    columns: Vec<Column<'a, TRow, TCol>>,
    rows: Vec<RowData>,
    settings: Settings,
}
impl<'a, TRow, TCol> Table<'a, TRow, TCol> {
    pub fn new(
        columns: Vec<Column<'a, TRow, TCol>>,
        settings: &Settings,
    ) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            settings: settings.clone(),
        }
    }

    pub fn with_col_headers(mut self) -> Self {
        self.rows.push(RowData::Headers);
        self.rows.push(RowData::Separator);
        self
    }

    pub fn add_rows(&mut self, rows: &[TRow]) {
        self.rows.extend(rows.iter().map(|row| {
            RowData::Cells(
                self.columns.iter().map(|col| col.content(row)).collect(),
            )
        }));
    }

    pub fn add_footer(&mut self, total: &TRow) {
        self.rows.push(RowData::Separator);
        self.rows.push(RowData::Cells(
            self.columns
                .iter()
                .map(|col| match col.footer {
                    ColumnFooter::Hide => String::new(),
                    ColumnFooter::Show => col.content(total),
                })
                .collect(),
        ));
    }

    /// Width of a full line, including column separators
    fn total_width(&self) -> usize {
        self.columns.iter().map(|c| c.width).sum::<usize>()
            + self.columns.len().saturating_sub(1)
                * self.settings.colsep.chars().count()
    }

    /// Headers are always left-aligned
    fn push_headers(&self, into: &mut String) {
        for (colidx, col) in self.columns.iter().enumerate() {
            if colidx > 0 {
                into.push_str(&self.settings.header_colsep);
            }
            push_align(
                into,
                col.title.as_deref().unwrap_or(""),
                col.width,
                Align::Left,
            );
        }
        into.push('\n');
    }

    fn push_cells(&self, into: &mut String, cells: &[String]) {
        for (colidx, (col, value)) in self.columns.iter().zip(cells).enumerate()
        {
            if colidx > 0 {
                into.push_str(&self.settings.colsep);
            }
            push_align(into, value, col.width, col.align);
        }
        into.push('\n');
    }

    pub fn to_string(&self) -> String {
        let mut result = String::new();

        for row in &self.rows {
            match row {
                RowData::Separator => {
                    result.extend(
                        std::iter::repeat(self.settings.sepchar)
                            .take(self.total_width()),
                    );
                    result.push('\n');
                }
                RowData::Headers => self.push_headers(&mut result),
                RowData::Cells(cells) => self.push_cells(&mut result, cells),
            }
        }

        result
    }
}

fn push_align(into: &mut String, value: &str, width: usize, align: Align) {
    match align {
        Align::Left => into.push_str(&format!("{:<width$}", value)),
        Align::Right => into.push_str(&format!("{:>width$}", value)),
    }
}
