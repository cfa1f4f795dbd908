//! Synthetic population generator
//!
//! Names, surnames and cities come from fixed Colombian tables; the
//! numeric fields are drawn uniformly. Ids come from a counter owned by
//! the generator, so two generators never share state.

use crate::error::{CensoError, Result};
use crate::persona::{BirthDate, DeclarationGroup, Persona};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First id handed out by a default generator
pub const DEFAULT_START_ID: u64 = 1_000_000_000;

const FEMALE_NAMES: &[&str] = &[
    "María", "Luisa", "Carmen", "Ana", "Sofía", "Isabel", "Laura", "Andrea", "Paula",
    "Valentina", "Camila", "Daniela", "Carolina", "Fernanda", "Gabriela", "Patricia",
    "Claudia", "Diana", "Lucía", "Ximena",
];

const MALE_NAMES: &[&str] = &[
    "Juan", "Carlos", "José", "James", "Andrés", "Miguel", "Luis", "Pedro", "Alejandro",
    "Ricardo", "Felipe", "David", "Jorge", "Santiago", "Daniel", "Fernando", "Diego",
    "Rafael", "Martín", "Óscar", "Edison", "Nestor", "Gertridis",
];

const SURNAMES: &[&str] = &[
    "Gómez", "Rodríguez", "Martínez", "López", "García", "Pérez", "González", "Sánchez",
    "Ramírez", "Torres", "Díaz", "Vargas", "Castro", "Ruiz", "Álvarez", "Romero", "Suárez",
    "Rojas", "Moreno", "Muñoz", "Valencia",
];

/// The 20 cities a Persona can reside in
pub const CITIES: &[&str] = &[
    "Bogotá", "Medellín", "Cali", "Barranquilla", "Cartagena", "Bucaramanga", "Pereira",
    "Santa Marta", "Cúcuta", "Ibagué", "Manizales", "Pasto", "Neiva", "Villavicencio",
    "Armenia", "Sincelejo", "Valledupar", "Montería", "Popayán", "Tunja",
];

const INCOME_RANGE: (f64, f64) = (10_000_000.0, 500_000_000.0);
const MAX_ASSETS: f64 = 2_000_000_000.0;
/// Debts never exceed this fraction of assets
pub const MAX_DEBT_RATIO: f64 = 0.7;

/// Largest collection a single request may build
pub const MAX_COLLECTION_SIZE: i64 = 10_000_000;

/// Produces Persona records with sequential ids
#[derive(Debug)]
pub struct PersonaGenerator {
    next_id: u64,
    rng: StdRng,
}

impl PersonaGenerator {
    /// Generator seeded from OS entropy, ids starting at [`DEFAULT_START_ID`]
    pub fn new() -> Self {
        Self {
            next_id: DEFAULT_START_ID,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible populations
    pub fn with_seed(seed: u64) -> Self {
        Self {
            next_id: DEFAULT_START_ID,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn starting_at(mut self, start_id: u64) -> Self {
        self.next_id = start_id;
        self
    }

    /// Id the next generated Persona will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    fn pick(&mut self, table: &[&'static str]) -> &'static str {
        table[self.rng.gen_range(0..table.len())]
    }

    /// Generate one Persona. Always succeeds.
    pub fn generate_person(&mut self) -> Persona {
        let names = if self.rng.gen_bool(0.5) {
            MALE_NAMES
        } else {
            FEMALE_NAMES
        };
        let first_name = self.pick(names).to_string();
        let first_surname = self.pick(SURNAMES);
        let second_surname = self.pick(SURNAMES);
        let last_name = format!("{} {}", first_surname, second_surname);

        let id = self.next_id;
        self.next_id += 1;

        let city = self.pick(CITIES).to_string();
        let birth_date = BirthDate::new(
            self.rng.gen_range(1..=28),
            self.rng.gen_range(1..=12),
            self.rng.gen_range(1960..=2009),
        );

        let annual_income = self.rng.gen_range(INCOME_RANGE.0..INCOME_RANGE.1);
        let assets = self.rng.gen_range(0.0..MAX_ASSETS);
        // inclusive: assets may be exactly zero
        let debts = self.rng.gen_range(0.0..=assets * MAX_DEBT_RATIO);

        Persona {
            first_name,
            last_name,
            id: id.to_string(),
            city,
            birth_date,
            annual_income,
            assets,
            debts,
            declaration_group: DeclarationGroup::from_id(id),
        }
    }

    /// Generate `n` Persona records.
    ///
    /// `n <= 0` and `n > MAX_COLLECTION_SIZE` are rejected, as is a count the
    /// allocator cannot reserve.
    pub fn generate_collection(&mut self, n: i64) -> Result<Vec<Persona>> {
        if n <= 0 {
            return Err(CensoError::InvalidInput(format!(
                "debe generar al menos 1 persona (recibido {})",
                n
            )));
        }
        if n > MAX_COLLECTION_SIZE {
            return Err(CensoError::InvalidInput(format!(
                "no se pueden generar más de {} personas (recibido {})",
                MAX_COLLECTION_SIZE, n
            )));
        }
        let n = usize::try_from(n)
            .map_err(|_| CensoError::InvalidInput(format!("tamaño fuera de rango: {}", n)))?;

        let mut personas = Vec::new();
        personas.try_reserve_exact(n).map_err(|err| {
            CensoError::InvalidInput(format!("no hay memoria para {} personas: {}", n, err))
        })?;
        for _ in 0..n {
            personas.push(self.generate_person());
        }
        tracing::debug!(count = n, next_id = self.next_id, "generated collection");
        Ok(personas)
    }
}

impl Default for PersonaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
