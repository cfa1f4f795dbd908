//! Menu numbering and console input parsing

use crate::error::{CensoError, Result};

/// Whether a query result is printed from the borrowed view or from an owned copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Borrowed,
    Owned,
}

impl Ownership {
    /// Suffix used in operation labels
    pub fn label(&self) -> &'static str {
        match self {
            Ownership::Borrowed => "Referencia",
            Ownership::Owned => "Valor",
        }
    }
}

/// Queries reachable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Oldest,
    OldestByCity,
    Wealthiest,
    WealthiestByCity,
    WealthiestByGroup,
    GroupByDeclaration,
    MostIndebted,
    RichestCity,
    WealthyByCity,
}

impl Query {
    /// Menu number of the borrowed variant; the owned variant follows it
    const fn first_option(&self) -> i64 {
        match self {
            Query::Oldest => 2,
            Query::OldestByCity => 4,
            Query::Wealthiest => 6,
            Query::WealthiestByCity => 8,
            Query::WealthiestByGroup => 10,
            Query::GroupByDeclaration => 12,
            Query::MostIndebted => 14,
            Query::RichestCity => 16,
            Query::WealthyByCity => 18,
        }
    }

    const ALL: [Query; 9] = [
        Query::Oldest,
        Query::OldestByCity,
        Query::Wealthiest,
        Query::WealthiestByCity,
        Query::WealthiestByGroup,
        Query::GroupByDeclaration,
        Query::MostIndebted,
        Query::RichestCity,
        Query::WealthyByCity,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Query::Oldest => "Persona más longeva del país",
            Query::OldestByCity => "Personas más longevas por ciudad",
            Query::Wealthiest => "Persona con mayor patrimonio del país",
            Query::WealthiestByCity => "Personas con mayor patrimonio por ciudad",
            Query::WealthiestByGroup => "Personas con mayor patrimonio por grupo de declaración",
            Query::GroupByDeclaration => "Declarantes de renta por grupo",
            Query::MostIndebted => "Persona con mayor endeudamiento del país",
            Query::RichestCity => "Ciudad con mayor patrimonio agregado",
            Query::WealthyByCity => "Personas con patrimonio superior a 1.000 millones",
        }
    }
}

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Generate,
    ListAll,
    Query(Query, Ownership),
    ShowByIndex,
    FindById,
    ShowStatistics,
    ExportStatistics,
    Exit,
}

impl MenuOption {
    /// Map a menu number to an option
    pub fn from_number(number: i64) -> Option<MenuOption> {
        let option = match number {
            0 => MenuOption::Generate,
            1 => MenuOption::ListAll,
            20 => MenuOption::ShowByIndex,
            21 => MenuOption::FindById,
            22 => MenuOption::ShowStatistics,
            23 => MenuOption::ExportStatistics,
            24 => MenuOption::Exit,
            n => {
                let query = Query::ALL
                    .into_iter()
                    .find(|q| n == q.first_option() || n == q.first_option() + 1)?;
                let ownership = if n == query.first_option() {
                    Ownership::Borrowed
                } else {
                    Ownership::Owned
                };
                MenuOption::Query(query, ownership)
            }
        };
        Some(option)
    }

    /// Label recorded in the monitor log; `None` for options that are not measured
    pub fn operation_label(&self) -> Option<String> {
        match self {
            MenuOption::Generate => Some("Crear datos".to_string()),
            MenuOption::ListAll => Some("Mostrar resumen".to_string()),
            MenuOption::Query(query, ownership) => {
                Some(format!("{} ({})", query.title(), ownership.label()))
            }
            MenuOption::ShowByIndex => Some("Mostrar detalle".to_string()),
            MenuOption::FindById => Some("Buscar por ID".to_string()),
            MenuOption::ShowStatistics | MenuOption::ExportStatistics | MenuOption::Exit => None,
        }
    }
}

/// Menu text shown before every prompt
pub fn menu_text() -> String {
    let mut text = String::from("\n\n=== MENÚ PRINCIPAL ===");
    text.push_str("\n0. Crear nuevo conjunto de datos");
    text.push_str("\n1. Mostrar resumen de todas las personas");
    for query in Query::ALL {
        for (offset, ownership) in [Ownership::Borrowed, Ownership::Owned].into_iter().enumerate() {
            text.push_str(&format!(
                "\n{}. {}({})",
                query.first_option() + offset as i64,
                query.title(),
                ownership.label()
            ));
        }
    }
    text.push_str("\n20. Mostrar detalle por índice");
    text.push_str("\n21. Buscar persona por ID");
    text.push_str("\n22. Mostrar estadísticas");
    text.push_str("\n23. Exportar estadísticas");
    text.push_str("\n24. Salir");
    text
}

/// Parse a console line as an integer
pub fn parse_number(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CensoError::InvalidInput(format!("'{}' no es un número", trimmed)))
}

/// Parse a console line as a menu option
pub fn parse_option(line: &str) -> Result<MenuOption> {
    let number = parse_number(line)?;
    MenuOption::from_number(number)
        .ok_or_else(|| CensoError::InvalidInput(format!("opción {} inválida", number)))
}
