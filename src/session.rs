//! Interactive menu loop
//!
//! The session owns the current collection, the generator and the monitor.
//! Input and output are generic so the loop can be driven by stdin/stdout or
//! by scripted buffers in tests. Every `CensoError` is reported and the loop
//! continues; only EOF, the exit option, or a failing output stream end it.

use crate::error::{CensoError, Result};
use crate::generator::PersonaGenerator;
use crate::menu::{self, MenuOption, Ownership, Query};
use crate::monitor::{Monitor, DEFAULT_STATS_FILE};
use crate::persona::Persona;
use crate::queries::{self, IntoOwned, WEALTH_THRESHOLD};
use crate::report::Report;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Print a query result, optionally from an owned copy of the view
fn present<T>(out: &mut dyn Write, view: T, ownership: Ownership) -> io::Result<()>
where
    T: IntoOwned + Report,
    T::Owned: Report,
{
    match ownership {
        Ownership::Borrowed => view.render(out),
        Ownership::Owned => view.into_owned().render(out),
    }
}

pub struct Session<R, W> {
    input: R,
    out: W,
    generator: PersonaGenerator,
    monitor: Monitor,
    personas: Option<Vec<Persona>>,
    stats_file: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, generator: PersonaGenerator) -> Self {
        Self {
            input,
            out,
            generator,
            monitor: Monitor::new(),
            personas: None,
            stats_file: PathBuf::from(DEFAULT_STATS_FILE),
        }
    }

    pub fn with_stats_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stats_file = path.into();
        self
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// Current collection, if one was built
    pub fn personas(&self) -> Option<&[Persona]> {
        self.personas.as_deref()
    }

    /// Run the menu until the exit option or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{}", menu::menu_text())?;
            write!(self.out, "Seleccione una opción: ")?;
            self.out.flush()?;

            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    writeln!(self.out, "\nSaliendo...")?;
                    return Ok(());
                }
                Err(CensoError::Io(err)) => return Err(err),
                Err(err) => {
                    writeln!(self.out, "{}", err)?;
                    continue;
                }
            };

            let option = match menu::parse_option(&line) {
                Ok(option) => option,
                Err(err) => {
                    writeln!(self.out, "{}", err)?;
                    continue;
                }
            };

            if option == MenuOption::Exit {
                writeln!(self.out, "Saliendo...")?;
                return Ok(());
            }

            if let Err(err) = self.dispatch(option) {
                tracing::debug!(?option, error = %err, "operation aborted");
                writeln!(self.out, "{}", err)?;
            }
        }
    }

    /// Next console line; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => Err(
                CensoError::InvalidInput("la entrada no es UTF-8 válido".to_string()),
            ),
            Err(err) => Err(err.into()),
        }
    }

    fn prompt_number(&mut self, prompt: &str) -> Result<i64> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let line = self
            .read_line()?
            .ok_or_else(|| CensoError::InvalidInput("fin de la entrada".to_string()))?;
        menu::parse_number(&line)
    }

    fn prompt_text(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let line = self
            .read_line()?
            .ok_or_else(|| CensoError::InvalidInput("fin de la entrada".to_string()))?;
        Ok(line.trim().to_string())
    }

    fn collection_len(&self) -> Result<usize> {
        self.personas
            .as_ref()
            .map(Vec::len)
            .ok_or(CensoError::EmptyCollection)
    }

    /// Execute one menu option; measured options are timed and recorded
    pub fn dispatch(&mut self, option: MenuOption) -> Result<()> {
        let label = option.operation_label();
        match option {
            MenuOption::Generate => {
                let n = self.prompt_number("\nIngrese el número de personas a generar: ")?;
                self.build_collection(n).map(|_| ())
            }
            MenuOption::ListAll => self.measured(label, Self::list_all),
            MenuOption::Query(query, ownership) => {
                self.measured(label, |session| session.run_query(query, ownership))
            }
            MenuOption::ShowByIndex => {
                let len = self.collection_len()?;
                let raw = self.prompt_number(&format!("\nIngrese el índice (0-{}): ", len - 1))?;
                let index = usize::try_from(raw).map_err(|_| {
                    CensoError::InvalidInput(format!("índice {} fuera de rango", raw))
                })?;
                self.measured(label, |session| {
                    let personas = session.personas.as_deref().unwrap_or_default();
                    queries::get(personas, index)?.render(&mut session.out)?;
                    Ok(())
                })
            }
            MenuOption::FindById => {
                self.collection_len()?;
                let id = self.prompt_text("\nIngrese el ID a buscar: ")?;
                self.measured(label, |session| {
                    let personas = session.personas.as_deref().unwrap_or_default();
                    queries::find_by_id(personas, &id)?.render(&mut session.out)?;
                    Ok(())
                })
            }
            MenuOption::ShowStatistics => {
                self.monitor.write_summary(&mut self.out)?;
                Ok(())
            }
            MenuOption::ExportStatistics => self.export_statistics(),
            MenuOption::Exit => Ok(()),
        }
    }

    /// Build a fresh collection of `n` records, replacing any previous one
    pub fn build_collection(&mut self, n: i64) -> Result<usize> {
        self.measured(Some("Crear datos".to_string()), |session| {
            let personas = session.generator.generate_collection(n)?;
            let count = personas.len();
            session.personas = Some(personas);
            writeln!(session.out, "Generadas {} personas", count)?;
            Ok(count)
        })
    }

    /// Time `op`, sample the memory delta, record and print the statistic.
    /// Failed operations are not recorded.
    fn measured<T>(
        &mut self,
        label: Option<String>,
        op: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.monitor.start();
        let memory_before = self.monitor.sample_memory();
        let value = op(self)?;
        let elapsed_ms = self.monitor.stop();
        let memory_kb = self.monitor.sample_memory() - memory_before;

        if let Some(label) = label {
            self.monitor.record(label, elapsed_ms, memory_kb);
            if let Some(entry) = self.monitor.entries().last() {
                Monitor::write_entry(&mut self.out, entry)?;
            }
        }
        Ok(value)
    }

    fn list_all(&mut self) -> Result<()> {
        let personas = self
            .personas
            .as_deref()
            .ok_or(CensoError::EmptyCollection)?;
        writeln!(self.out, "\n=== RESUMEN DE PERSONAS ({}) ===", personas.len())?;
        for (i, persona) in personas.iter().enumerate() {
            writeln!(self.out, "{}. {}", i, persona)?;
        }
        Ok(())
    }

    fn run_query(&mut self, query: Query, ownership: Ownership) -> Result<()> {
        let personas = self
            .personas
            .as_deref()
            .ok_or(CensoError::EmptyCollection)?;
        let out: &mut dyn Write = &mut self.out;
        tracing::debug!(?query, ?ownership, records = personas.len(), "running query");

        writeln!(out, "\n=== {} ===", query.title())?;
        match query {
            Query::Oldest => present(out, queries::oldest(personas)?, ownership),
            Query::OldestByCity => present(out, queries::oldest_by_city(personas)?, ownership),
            Query::Wealthiest => present(out, queries::wealthiest(personas)?, ownership),
            Query::WealthiestByCity => {
                present(out, queries::wealthiest_by_city(personas)?, ownership)
            }
            Query::WealthiestByGroup => {
                present(out, queries::wealthiest_by_group(personas)?, ownership)
            }
            Query::GroupByDeclaration => {
                present(out, queries::group_by_declaration(personas)?, ownership)
            }
            Query::MostIndebted => present(out, queries::most_indebted(personas)?, ownership),
            Query::RichestCity => present(out, queries::richest_city(personas)?, ownership),
            Query::WealthyByCity => present(
                out,
                queries::wealthy_by_city(personas, WEALTH_THRESHOLD)?,
                ownership,
            ),
        }?;
        Ok(())
    }

    fn export_statistics(&mut self) -> Result<()> {
        match self.monitor.export_csv(&self.stats_file) {
            Ok(()) => {
                writeln!(
                    self.out,
                    "Estadísticas exportadas a {}",
                    self.stats_file.display()
                )?;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(path = %self.stats_file.display(), error = %err, "export failed");
                writeln!(
                    self.out,
                    "No se pudo exportar a {}: {}",
                    self.stats_file.display(),
                    err
                )?;
                Ok(())
            }
        }
    }
}
