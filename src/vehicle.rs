//! The `Vehicle` record mutated by the background tasks.

use std::io::{self, Write};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: i64,
    name: String,
}

impl Vehicle {
    pub fn new() -> Self {
        Vehicle::default()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Writes `Vehicle ID=<id>` followed by a newline.
    pub fn write_id<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Vehicle ID={}", self.id)
    }

    /// Writes `Vehicle Name=<name>` followed by a newline.
    pub fn write_name<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Vehicle Name={}", self.name)
    }

    pub fn print_id(&self) -> io::Result<()> {
        self.write_id(&mut io::stdout().lock())
    }

    pub fn print_name(&self) -> io::Result<()> {
        self.write_name(&mut io::stdout().lock())
    }
}
