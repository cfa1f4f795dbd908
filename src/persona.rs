//! Persona records and their rendering

use std::fmt;

/// Birth date without calendar validation (day 1-28, month 1-12)
///
/// Field order is year, month, day so the derived `Ord` compares dates
/// chronologically: an earlier date is "less".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl BirthDate {
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Tax declaration bracket derived from the last two digits of an id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclarationGroup {
    A,
    B,
    C,
}

impl DeclarationGroup {
    /// Bracket for a numeric id: last two digits <40 → A, 40-79 → B, 80-99 → C
    pub fn from_id(id: u64) -> Self {
        match id % 100 {
            0..=39 => Self::A,
            40..=79 => Self::B,
            _ => Self::C,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for DeclarationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A synthetic person with identity and fiscal data
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    pub first_name: String,
    /// Two surnames joined by a space
    pub last_name: String,
    /// Numeric-looking identifier, unique within one generator
    pub id: String,
    pub city: String,
    pub birth_date: BirthDate,
    /// Annual income in COP
    pub annual_income: f64,
    /// Total assets (patrimonio) in COP
    pub assets: f64,
    /// Outstanding debts in COP, at most 70% of `assets` when generated
    pub debts: f64,
    pub declaration_group: DeclarationGroup,
}

impl Persona {
    /// Assets minus debts
    pub fn net_worth(&self) -> f64 {
        self.assets - self.debts
    }

    /// Full multi-line rendering
    pub fn detail(&self) -> PersonaDetail<'_> {
        PersonaDetail(self)
    }
}

/// Compact one-line rendering used by listings
impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} | {} | ${:.2} | Grupo renta:{}",
            self.id,
            self.first_name,
            self.last_name,
            self.city,
            self.annual_income,
            self.declaration_group
        )
    }
}

/// Display adapter for [`Persona::detail`]
pub struct PersonaDetail<'a>(&'a Persona);

impl fmt::Display for PersonaDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        writeln!(f, "-------------------------------------")?;
        writeln!(f, "[{}] Nombre: {} {}", p.id, p.first_name, p.last_name)?;
        writeln!(f, "   - Ciudad de residencia: {}", p.city)?;
        writeln!(f, "   - Fecha de nacimiento: {}", p.birth_date)?;
        writeln!(f)?;
        writeln!(f, "   - Ingresos anuales: ${:.2}", p.annual_income)?;
        writeln!(f, "   - Patrimonio: ${:.2}", p.assets)?;
        writeln!(f, "   - Deudas: ${:.2}", p.debts)?;
        write!(f, "   - Grupo de declaracion: {}", p.declaration_group)
    }
}

#[cfg(test)]
pub(crate) fn sample(id: u64, city: &str, assets: f64, debts: f64) -> Persona {
    Persona {
        first_name: "Ana".to_string(),
        last_name: "Gómez Torres".to_string(),
        id: id.to_string(),
        city: city.to_string(),
        birth_date: BirthDate::new(1, 1, 1980),
        annual_income: 50_000_000.0,
        assets,
        debts,
        declaration_group: DeclarationGroup::from_id(id),
    }
}
