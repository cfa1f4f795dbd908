//! Console rendering of query results
//!
//! Borrowed views and their owned copies render identically, so the menu
//! can print whichever form it produced.

use crate::persona::Persona;
use crate::queries::CityWealth;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, Write};

/// A query result that can be printed to the console
pub trait Report {
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl Report for Persona {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.detail())
    }
}

impl Report for &Persona {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).render(out)
    }
}

/// Listings print one summary line per record
impl<P: Borrow<Persona>> Report for Vec<P> {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for persona in self {
            writeln!(out, "  {}", persona.borrow())?;
        }
        writeln!(out, "  ({} personas)", self.len())
    }
}

impl<K: Display, V: Report> Report for HashMap<K, V> {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "Sin resultados.");
        }
        for (key, value) in self {
            writeln!(out, "\n=== {} ===", key)?;
            value.render(out)?;
        }
        Ok(())
    }
}

impl Report for CityWealth<'_> {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Ciudad con mayor patrimonio agregado: {} (${:.2})",
            self.city, self.total_assets
        )
    }
}
