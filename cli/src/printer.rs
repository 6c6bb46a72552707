use colored::Colorize;
use dataflow_options::{DatasetReference, PipelineOptions, SubscriptionPath};
use prettytable::{format, row, Row, Table};
use serde::Serialize;

use anyhow::{anyhow, Context, Error, Result};
use std::{
    io::{self, Write},
    str::FromStr,
};

pub fn print_resources_as_json<Resource>(
    resources: impl IntoIterator<Item = Resource>,
    mut writer: impl Write,
) -> Result<()>
where
    Resource: Serialize,
{
    for resource in resources {
        serde_json::to_writer(&mut writer, &resource)
            .context("Could not serialise option value.")
            .and_then(|_| writeln!(writer).context("Failed to write JSON option value to writer."))?;
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        if string == "table" {
            Ok(OutputFormat::Table)
        } else if string == "json" {
            Ok(OutputFormat::Json)
        } else {
            Err(anyhow!("unknown output format: '{}'", string))
        }
    }
}

/// Represents a value that is able to be displayed as a table.
///
/// The implementation must implement `to_table_headers` to return headers for the value type,
/// and `to_table_row`, which should return a data row for the given value.
pub trait DisplayTable {
    fn to_table_headers() -> Row;

    fn to_table_row(&self) -> Row;
}

impl DisplayTable for DatasetReference {
    fn to_table_headers() -> Row {
        row![bFg => "Dataset", "Project ID", "Dataset ID"]
    }

    fn to_table_row(&self) -> Row {
        let full_name = format!(
            "{}{}{}",
            self.project_id().dimmed(),
            ".".dimmed(),
            self.dataset_id()
        );
        row![full_name, self.project_id(), self.dataset_id()]
    }
}

impl DisplayTable for SubscriptionPath {
    fn to_table_headers() -> Row {
        row![bFg => "Subscription", "Project", "Name"]
    }

    fn to_table_row(&self) -> Row {
        row![self.path(), self.project(), self.subscription()]
    }
}

impl DisplayTable for PipelineOptions {
    fn to_table_headers() -> Row {
        row![bFg => "Dataset", "Subscription"]
    }

    fn to_table_row(&self) -> Row {
        row![self.dataset, self.subscription]
    }
}

/// Helper trait to allow collection of values to be converted into a table.
pub trait IntoTable {
    fn into_table(self) -> Table;
}

/// All iterators of displayable values can be converted into a table.
impl<'a, Iterable, Item: 'a> IntoTable for Iterable
where
    Iterable: IntoIterator<Item = &'a Item>,
    Item: DisplayTable,
{
    fn into_table(self) -> Table {
        let mut table = new_table();
        table.set_titles(Item::to_table_headers());
        for value in self.into_iter() {
            table.add_row(value.to_table_row());
        }
        table
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    let format = format::FormatBuilder::new()
        .column_separator(' ')
        .borders(' ')
        .separators(&[], format::LineSeparator::new('-', '+', '+', '+'))
        .padding(0, 1)
        .build();
    table.set_format(format);
    table
}

fn print_table<T: IntoTable>(resources: T) {
    let table = resources.into_table();
    table.printstd();
}

/// Print option values using the selected output format.
#[derive(Default, Debug)]
pub struct Printer {
    output: OutputFormat,
}

impl Printer {
    pub fn new(output: OutputFormat) -> Self {
        Self { output }
    }

    pub fn print_resources<T, Resource>(&self, resources: T) -> Result<()>
    where
        T: IntoIterator<Item = Resource> + IntoTable,
        Resource: Serialize,
    {
        match self.output {
            OutputFormat::Table => print_table(resources),
            OutputFormat::Json => print_resources_as_json(resources, io::stdout().lock())?,
        };
        Ok(())
    }
}
